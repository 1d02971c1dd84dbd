//! Integration tests for chart input, houses and aspects.

use dhruv_vedic_base::{
    AspectKind, BirthRequest, Chart, ChartPoint, Graha, PositionProvider, Rashi, StaticProvider,
    VedicError, fetch_chart, normalize_360, planets_aspecting_graha, planets_aspecting_house,
};
use proptest::prelude::*;

const CHART_JSON: &str = r#"{
    "kind": "D1",
    "positions": {
        "Ascendant": { "longitude": 215.0 },
        "Sun":       { "longitude": 280.5 },
        "Moon":      { "longitude": 292.402721 },
        "Mars":      { "longitude": 14.2 },
        "Mercury":   { "longitude": 265.0, "retrograde": true },
        "Jupiter":   { "longitude": 76.8, "retrograde": true },
        "Venus":     { "longitude": 300.1 },
        "Saturn":    { "longitude": 266.3 },
        "Rahu":      { "longitude": 304.0 }
    },
    "cusps": [215.0, 244.0, 275.0, 306.0, 337.0, 6.0, 35.0, 64.0, 95.0, 126.0, 157.0, 186.0],
    "meta": {
        "native_id": "n-42",
        "birth": "1990-01-15T04:30:00",
        "yogas": [{ "name": "Gaja Kesari", "planets": ["Jupiter", "Moon", "Pluto"] }]
    }
}"#;

fn chart() -> Chart {
    serde_json::from_str(CHART_JSON).unwrap()
}

/// Ketu is derived and every node is retrograde.
#[test]
fn parsed_chart_has_ketu() {
    let c = chart();
    assert_eq!(c.len(), 10);
    assert!((c.longitude(Graha::Ketu).unwrap() - 124.0).abs() < 1e-10);
    assert!(c.is_retrograde(Graha::Rahu));
    assert!(c.is_retrograde(Graha::Buddh));
}

/// Metadata stays apart from positions; unknown yoga planets are skipped.
#[test]
fn metadata_is_separate() {
    let c = chart();
    assert_eq!(c.meta().native_id.as_deref(), Some("n-42"));
    assert!(c.meta().birth.is_some());
    let yoga = &c.meta().yogas[0];
    assert_eq!(yoga.grahas(), vec![Graha::Guru, Graha::Chandra]);
}

/// Cusp houses against whole-sign houses.
#[test]
fn cusp_and_whole_sign_houses() {
    let c = chart();
    assert_eq!(c.cusp_rashi(10), Rashi::Simha);
    assert_eq!(c.house_lord(10), Graha::Surya);
    assert_eq!(c.house_of(Graha::Surya), Some(3));
    assert_eq!(c.whole_sign_house(Graha::Surya), Some(3));
    assert_eq!(c.whole_sign_rashi(10), Some(Rashi::Simha));
    assert_eq!(c.house_of(ChartPoint::Lagna), Some(1));
}

/// Aspects onto the 10th (Simha) and onto the Moon.
#[test]
fn aspects() {
    let c = chart();
    // Ketu sits in Simha; Venus and Rahu in Kumbha cast their 7th onto it
    let hits = planets_aspecting_house(&c, 10);
    let occupants: Vec<Graha> = hits
        .iter()
        .filter(|h| h.kind == AspectKind::Occupation)
        .map(|h| h.graha)
        .collect();
    assert_eq!(occupants, vec![Graha::Ketu]);
    assert!(hits.iter().any(|h| h.graha == Graha::Shukra && h.kind == AspectKind::Drishti));

    let on_moon = planets_aspecting_graha(&c, Graha::Chandra);
    assert!(on_moon.iter().all(|h| h.graha != Graha::Chandra));
    // Sun shares Makara with the Moon
    assert!(on_moon.iter().any(|h| h.graha == Graha::Surya && h.kind == AspectKind::Occupation));
}

struct Down;

impl PositionProvider for Down {
    fn positions(&self, _: &BirthRequest) -> Result<Chart, VedicError> {
        Err(VedicError::Provider("connection refused".into()))
    }
}

fn request() -> BirthRequest {
    serde_json::from_str(
        r#"{"date":"1990-01-15","time":"10:00:00","latitude":13.08,"longitude":80.27,"timezone":"+05:30"}"#,
    )
    .unwrap()
}

/// Provider failures and empty answers reach the caller.
#[test]
fn provider_failures_propagate() {
    assert!(matches!(
        fetch_chart(&Down, &request()),
        Err(VedicError::Provider(_))
    ));
    let empty = StaticProvider::new(serde_json::from_str(r#"{"positions":{}}"#).unwrap());
    assert_eq!(fetch_chart(&empty, &request()), Err(VedicError::EmptyChart));
    let ok = StaticProvider::new(chart());
    assert_eq!(fetch_chart(&ok, &request()).unwrap(), chart());
}

/// A provider that sends both nodes cannot break their opposition.
#[test]
fn inconsistent_nodes_from_json() {
    let c: Chart = serde_json::from_str(
        r#"{"positions":{"Rahu":{"longitude":10.0},"Ketu":{"longitude":50.0}}}"#,
    )
    .unwrap();
    assert!((c.longitude(Graha::Ketu).unwrap() - 190.0).abs() < 1e-10);
    assert_eq!(Rashi::of_longitude(c.longitude(Graha::Ketu).unwrap()), Rashi::Tula);
}

/// Ketu alone is enough to place Rahu.
#[test]
fn ketu_only_chart() {
    let c: Chart =
        serde_json::from_str(r#"{"positions":{"Ketu":{"longitude":5.0}}}"#).unwrap();
    assert!((c.longitude(Graha::Rahu).unwrap() - 185.0).abs() < 1e-10);
    assert!(c.is_retrograde(Graha::Rahu));
}

proptest! {
    #[test]
    fn nodes_stay_opposite(rahu in -720.0f64..720.0, ketu in proptest::option::of(0.0f64..360.0)) {
        let mut b = Chart::builder(dhruv_vedic_base::ChartKind::Rasi).graha(Graha::Rahu, rahu, true);
        if let Some(k) = ketu {
            b = b.graha(Graha::Ketu, k, true);
        }
        let c = b.build().unwrap();
        let r = c.longitude(Graha::Rahu).unwrap();
        let k = c.longitude(Graha::Ketu).unwrap();
        prop_assert!((normalize_360(k - r) - 180.0).abs() < 1e-9, "rahu {r} ketu {k}");
    }
}
