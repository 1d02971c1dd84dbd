//! Graha drishti (directional aspects) on whole-sign houses.
//!
//! Every graha aspects the 7th house from itself. Mars additionally aspects
//! the 4th and 8th, Jupiter the 5th and 9th, Saturn the 3rd and 10th. Counts
//! follow the nth-house convention: the occupied house is the 1st.
//! A graha also acts on the house it occupies.

use serde::Serialize;

use crate::chart::{Chart, ChartPoint};
use crate::graha::{ALL_GRAHAS, Graha, nth_house_from};

/// How a graha reaches a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AspectKind {
    /// The graha sits in the house.
    Occupation,
    /// The graha casts a drishti onto the house.
    Drishti,
}

/// One graha acting on a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AspectHit {
    pub graha: Graha,
    /// Whole-sign house the graha occupies.
    pub from_house: u8,
    pub kind: AspectKind,
}

/// Aspect house counts of a graha (nth-house convention).
pub const fn aspect_counts(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Mangal => &[4, 7, 8],
        Graha::Guru => &[5, 7, 9],
        Graha::Shani => &[3, 7, 10],
        _ => &[7],
    }
}

/// Houses a graha in `from_house` casts drishti on.
pub fn aspected_houses(graha: Graha, from_house: u8) -> Vec<u8> {
    aspect_counts(graha)
        .iter()
        .map(|n| nth_house_from(from_house, *n))
        .collect()
}

/// Whether a graha in `from_house` acts on `target_house`.
pub fn aspect_kind(graha: Graha, from_house: u8, target_house: u8) -> Option<AspectKind> {
    if from_house == target_house {
        Some(AspectKind::Occupation)
    } else if aspect_counts(graha)
        .iter()
        .any(|n| nth_house_from(from_house, *n) == target_house)
    {
        Some(AspectKind::Drishti)
    } else {
        None
    }
}

/// Grahas occupying or aspecting whole-sign house `house`.
///
/// Grahas without a position are skipped; an empty list is returned when
/// the chart has no Lagna.
pub fn planets_aspecting_house(chart: &Chart, house: u8) -> Vec<AspectHit> {
    let mut hits = Vec::new();
    for graha in ALL_GRAHAS {
        let Some(from_house) = chart.whole_sign_house(graha) else {
            continue;
        };
        if let Some(kind) = aspect_kind(graha, from_house, house) {
            hits.push(AspectHit {
                graha,
                from_house,
                kind,
            });
        }
    }
    hits
}

/// Grahas occupying or aspecting the house of `target`, excluding `target`.
pub fn planets_aspecting_graha(chart: &Chart, target: Graha) -> Vec<AspectHit> {
    let Some(house) = chart.whole_sign_house(target) else {
        return Vec::new();
    };
    planets_aspecting_house(chart, house)
        .into_iter()
        .filter(|h| h.graha != target)
        .collect()
}

/// Grahas casting drishti on the house of `point` (occupants excluded).
pub fn drishti_on_point(chart: &Chart, point: ChartPoint) -> Vec<Graha> {
    let Some(house) = chart.whole_sign_house(point) else {
        return Vec::new();
    };
    planets_aspecting_house(chart, house)
        .into_iter()
        .filter(|h| h.kind == AspectKind::Drishti)
        .map(|h| h.graha)
        .collect()
}
