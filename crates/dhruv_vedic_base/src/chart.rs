//! Chart model: positions of the 9 grahas and the Lagna, house cusps and
//! native metadata.
//!
//! A [`Chart`] is built once through [`ChartBuilder`] and never mutated.
//! Longitudes are normalized to [0, 360) on the way in, the lunar nodes are
//! always retrograde and exactly opposite: whichever node is given fixes the
//! other, and Rahu wins when both are supplied.
//!
//! Houses come in two flavours:
//! - cusp-based ([`Chart::house_of`]), using the provider's 12 cusps, or
//!   equal 30 deg houses from 0 deg Mesha when no cusps were supplied;
//! - whole-sign ([`Chart::whole_sign_house`]), counted from the Lagna rashi.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::rashi::Rashi;
use crate::util::normalize_360;

/// A point in the chart: one of the grahas or the Lagna (Ascendant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ChartPoint {
    Graha(Graha),
    Lagna,
}

/// The 9 grahas followed by the Lagna.
pub const ALL_POINTS: [ChartPoint; 10] = [
    ChartPoint::Graha(Graha::Surya),
    ChartPoint::Graha(Graha::Chandra),
    ChartPoint::Graha(Graha::Mangal),
    ChartPoint::Graha(Graha::Buddh),
    ChartPoint::Graha(Graha::Guru),
    ChartPoint::Graha(Graha::Shukra),
    ChartPoint::Graha(Graha::Shani),
    ChartPoint::Graha(Graha::Rahu),
    ChartPoint::Graha(Graha::Ketu),
    ChartPoint::Lagna,
];

impl ChartPoint {
    /// Display name ("Sun" .. "Ketu", "Ascendant").
    pub const fn name(self) -> &'static str {
        match self {
            Self::Graha(g) => g.english_name(),
            Self::Lagna => "Ascendant",
        }
    }

    pub const fn graha(self) -> Option<Graha> {
        match self {
            Self::Graha(g) => Some(g),
            Self::Lagna => None,
        }
    }
}

impl From<Graha> for ChartPoint {
    fn from(g: Graha) -> Self {
        Self::Graha(g)
    }
}

impl fmt::Display for ChartPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartPoint {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if ["ascendant", "lagna", "asc"]
            .iter()
            .any(|n| n.eq_ignore_ascii_case(t))
        {
            return Ok(Self::Lagna);
        }
        Graha::from_name(t).map(Self::Graha)
    }
}

impl From<ChartPoint> for String {
    fn from(p: ChartPoint) -> Self {
        p.name().to_string()
    }
}

impl TryFrom<String> for ChartPoint {
    type Error = VedicError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Sidereal position of one chart point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    /// Sidereal longitude in degrees, [0, 360).
    pub longitude: f64,
    #[serde(default)]
    pub retrograde: bool,
}

impl PlanetPosition {
    pub const fn new(longitude: f64, retrograde: bool) -> Self {
        Self {
            longitude,
            retrograde,
        }
    }

    pub fn rashi(&self) -> Rashi {
        Rashi::of_longitude(self.longitude)
    }
}

/// Which harmonic a chart represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartKind {
    /// Birth chart.
    #[default]
    #[serde(alias = "D1")]
    Rasi,
    /// 9-fold harmonic.
    #[serde(alias = "D9")]
    Navamsha,
    /// 10-fold harmonic.
    #[serde(alias = "D10")]
    Dasamsa,
}

impl ChartKind {
    /// Short label ("D1", "D9", "D10").
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rasi => "D1",
            Self::Navamsha => "D9",
            Self::Dasamsa => "D10",
        }
    }
}

/// A named combination detected upstream, with its participating planets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct YogaInput {
    pub name: String,
    /// Planet names as supplied; names no table knows are ignored.
    #[serde(default)]
    pub planets: Vec<String>,
}

impl YogaInput {
    /// Participating planets that resolve to a graha.
    pub fn grahas(&self) -> Vec<Graha> {
        self.planets
            .iter()
            .filter_map(|p| Graha::from_name(p).ok())
            .collect()
    }
}

/// Native metadata carried beside the positions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartMeta {
    pub native_id: Option<String>,
    pub native_name: Option<String>,
    /// Birth instant (UTC).
    pub birth: Option<NaiveDateTime>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub yogas: Vec<YogaInput>,
}

/// Immutable chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawChart")]
pub struct Chart {
    kind: ChartKind,
    positions: BTreeMap<ChartPoint, PlanetPosition>,
    cusps: Option<[f64; 12]>,
    meta: ChartMeta,
}

#[derive(Deserialize)]
struct RawChart {
    #[serde(default)]
    kind: ChartKind,
    positions: BTreeMap<ChartPoint, PlanetPosition>,
    #[serde(default)]
    cusps: Option<[f64; 12]>,
    #[serde(default)]
    meta: ChartMeta,
}

impl TryFrom<RawChart> for Chart {
    type Error = VedicError;

    fn try_from(raw: RawChart) -> Result<Self, Self::Error> {
        let mut builder = ChartBuilder::new(raw.kind).meta(raw.meta);
        for (point, pos) in raw.positions {
            builder = builder.point(point, pos);
        }
        if let Some(c) = raw.cusps {
            builder = builder.cusps(c);
        }
        builder.build()
    }
}

/// Equal 30 deg houses from 0 deg Mesha.
pub const DEFAULT_CUSPS: [f64; 12] = [
    0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0,
];

/// Equal 30 deg cusps starting at `start`.
pub fn equal_cusps(start: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, c) in cusps.iter_mut().enumerate() {
        *c = normalize_360(start + 30.0 * i as f64);
    }
    cusps
}

/// House (1-12) containing `lon` for the given ordered cusps.
///
/// House h spans [cusp[h-1], cusp[h]), wrapping across 0 deg. Cusps that
/// enclose nothing fall back to house 1.
pub fn which_house(lon: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_360(lon);
    for i in 0..12 {
        let start = normalize_360(cusps[i]);
        let end = normalize_360(cusps[(i + 1) % 12]);
        let inside = if end > start {
            start <= lon && lon < end
        } else if end < start {
            lon >= start || lon < end
        } else {
            false
        };
        if inside {
            return (i + 1) as u8;
        }
    }
    1
}

impl Chart {
    pub fn builder(kind: ChartKind) -> ChartBuilder {
        ChartBuilder::new(kind)
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn meta(&self) -> &ChartMeta {
        &self.meta
    }

    /// Number of positioned points.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Supplied cusps, if any.
    pub fn supplied_cusps(&self) -> Option<&[f64; 12]> {
        self.cusps.as_ref()
    }

    /// Effective cusps: supplied ones, else [`DEFAULT_CUSPS`].
    pub fn cusps(&self) -> [f64; 12] {
        self.cusps.unwrap_or(DEFAULT_CUSPS)
    }

    pub fn position(&self, point: impl Into<ChartPoint>) -> Option<&PlanetPosition> {
        self.positions.get(&point.into())
    }

    pub fn longitude(&self, point: impl Into<ChartPoint>) -> Option<f64> {
        self.position(point).map(|p| p.longitude)
    }

    pub fn ascendant(&self) -> Option<f64> {
        self.longitude(ChartPoint::Lagna)
    }

    pub fn rashi_of(&self, point: impl Into<ChartPoint>) -> Option<Rashi> {
        self.position(point).map(PlanetPosition::rashi)
    }

    pub fn is_retrograde(&self, point: impl Into<ChartPoint>) -> bool {
        self.position(point).is_some_and(|p| p.retrograde)
    }

    /// All positioned points in [`ALL_POINTS`] order.
    pub fn points(&self) -> impl Iterator<Item = (ChartPoint, &PlanetPosition)> {
        self.positions.iter().map(|(k, v)| (*k, v))
    }

    /// Positioned grahas in traditional order.
    pub fn grahas(&self) -> impl Iterator<Item = (Graha, &PlanetPosition)> {
        ALL_GRAHAS
            .into_iter()
            .filter_map(|g| self.position(g).map(|p| (g, p)))
    }

    /// Cusp-based house (1-12) of a point.
    pub fn house_of(&self, point: impl Into<ChartPoint>) -> Option<u8> {
        let cusps = self.cusps();
        self.longitude(point).map(|lon| which_house(lon, &cusps))
    }

    /// Rashi containing the cusp of house `house` (1-12).
    pub fn cusp_rashi(&self, house: u8) -> Rashi {
        let idx = ((house as usize + 11) % 12).min(11);
        Rashi::of_longitude(self.cusps()[idx])
    }

    /// Lord of the rashi on the cusp of house `house`.
    pub fn house_lord(&self, house: u8) -> Graha {
        self.cusp_rashi(house).lord()
    }

    /// Points in a cusp-based house, the Lagna included.
    pub fn occupants(&self, house: u8) -> Vec<ChartPoint> {
        let cusps = self.cusps();
        self.points()
            .filter(|(_, p)| which_house(p.longitude, &cusps) == house)
            .map(|(k, _)| k)
            .collect()
    }

    /// Points whose longitude falls in `rashi`, the Lagna included.
    pub fn points_in_rashi(&self, rashi: Rashi) -> Vec<ChartPoint> {
        self.points()
            .filter(|(_, p)| p.rashi() == rashi)
            .map(|(k, _)| k)
            .collect()
    }

    /// Whole-sign house (1-12) counted from the Lagna rashi.
    pub fn whole_sign_house(&self, point: impl Into<ChartPoint>) -> Option<u8> {
        let asc = self.rashi_of(ChartPoint::Lagna)?;
        let r = self.rashi_of(point)?;
        Some(asc.distance_to(r) + 1)
    }

    /// Rashi occupying whole-sign house `house` (1-12).
    pub fn whole_sign_rashi(&self, house: u8) -> Option<Rashi> {
        let asc = self.rashi_of(ChartPoint::Lagna)?;
        Some(Rashi::from_index(asc.index() + (house + 11) % 12))
    }

    /// Grahas in whole-sign house `house`.
    pub fn grahas_in_whole_sign_house(&self, house: u8) -> Vec<Graha> {
        self.grahas()
            .filter(|(g, _)| self.whole_sign_house(*g) == Some(house))
            .map(|(g, _)| g)
            .collect()
    }
}

/// Builder for [`Chart`].
#[derive(Debug, Clone, Default)]
pub struct ChartBuilder {
    kind: ChartKind,
    positions: BTreeMap<ChartPoint, PlanetPosition>,
    cusps: Option<[f64; 12]>,
    meta: ChartMeta,
}

impl ChartBuilder {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn point(mut self, point: ChartPoint, position: PlanetPosition) -> Self {
        self.positions.insert(point, position);
        self
    }

    pub fn graha(self, graha: Graha, longitude: f64, retrograde: bool) -> Self {
        self.point(
            ChartPoint::Graha(graha),
            PlanetPosition::new(longitude, retrograde),
        )
    }

    pub fn ascendant(self, longitude: f64) -> Self {
        self.point(ChartPoint::Lagna, PlanetPosition::new(longitude, false))
    }

    /// Rahu at `rahu_lon`, Ketu opposite; both retrograde.
    pub fn nodes(self, rahu_lon: f64) -> Self {
        self.graha(Graha::Rahu, rahu_lon, true)
            .graha(Graha::Ketu, rahu_lon + 180.0, true)
    }

    pub fn cusps(mut self, cusps: [f64; 12]) -> Self {
        self.cusps = Some(cusps);
        self
    }

    pub fn meta(mut self, meta: ChartMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Validate and freeze.
    pub fn build(self) -> Result<Chart, VedicError> {
        let mut positions = BTreeMap::new();
        for (point, pos) in self.positions {
            if !pos.longitude.is_finite() {
                return Err(VedicError::InvalidInput(format!(
                    "non-finite longitude for {point}"
                )));
            }
            let retrograde = match point {
                ChartPoint::Graha(g) if g.is_node() => true,
                _ => pos.retrograde,
            };
            positions.insert(
                point,
                PlanetPosition::new(normalize_360(pos.longitude), retrograde),
            );
        }

        let rahu = ChartPoint::Graha(Graha::Rahu);
        let ketu = ChartPoint::Graha(Graha::Ketu);
        // The nodes are always opposite; Rahu wins when both are given.
        let pair = match (positions.get(&rahu), positions.get(&ketu)) {
            (Some(r), _) => Some((ketu, r.longitude)),
            (None, Some(k)) => Some((rahu, k.longitude)),
            (None, None) => None,
        };
        if let Some((other, lon)) = pair {
            positions.insert(other, PlanetPosition::new(normalize_360(lon + 180.0), true));
        }

        let cusps = match self.cusps {
            Some(c) => {
                if c.iter().any(|v| !v.is_finite()) {
                    return Err(VedicError::InvalidInput("non-finite house cusp".into()));
                }
                let mut out = c;
                for v in out.iter_mut() {
                    *v = normalize_360(*v);
                }
                Some(out)
            }
            None => None,
        };

        Ok(Chart {
            kind: self.kind,
            positions,
            cusps,
            meta: self.meta,
        })
    }
}
