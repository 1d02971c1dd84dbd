//! Amsha (divisional chart) calculations for the Navamsha (D9) and the
//! Dasamsa (D10).
//!
//! Each amsha divides the 30-degree rashi span into N equal parts and maps
//! each part to a target rashi; the position inside the part is stretched
//! back to a full 30 degrees.
//!
//! - D9: the count starts at the rashi itself for movable signs, 9th from it
//!   for fixed signs and 5th from it for dual signs.
//! - D10: odd signs (Mesha, Mithuna, ...) start at the sign itself, even
//!   signs 9th from it.
//!
//! Derived charts use equal 30 degree houses from the derived Lagna.

use serde::{Deserialize, Serialize};

use crate::chart::{Chart, ChartBuilder, ChartKind, equal_cusps};
use crate::error::VedicError;
use crate::rashi::{MotionClass, Rashi};
use crate::util::normalize_360;

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Amsha {
    D1,
    D9,
    D10,
}

impl Amsha {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D9 => 9,
            Self::D10 => 10,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D9 => "Navamsha",
            Self::D10 => "Dasamsa",
        }
    }

    /// Chart kind produced by this division.
    pub const fn chart_kind(self) -> ChartKind {
        match self {
            Self::D1 => ChartKind::Rasi,
            Self::D9 => ChartKind::Navamsha,
            Self::D10 => ChartKind::Dasamsa,
        }
    }

    /// Parse "D9", "9", "navamsha", ...
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "d1" | "1" | "rashi" | "rasi" => Some(Self::D1),
            "d9" | "9" | "navamsha" | "navamsa" => Some(Self::D9),
            "d10" | "10" | "dasamsa" | "dashamsha" => Some(Self::D10),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Target rashi sequences
// ---------------------------------------------------------------------------

/// Target rashi index for a division of a natal rashi.
fn amsha_target_rashi(amsha: Amsha, natal_rashi_idx: u8, div_idx: u16) -> u8 {
    match amsha {
        Amsha::D1 => natal_rashi_idx,
        Amsha::D9 => {
            let start = match Rashi::from_index(natal_rashi_idx).motion_class() {
                MotionClass::Movable => 0,
                MotionClass::Fixed => 8,
                MotionClass::Dual => 4,
            };
            ((natal_rashi_idx as u16 + start + div_idx) % 12) as u8
        }
        Amsha::D10 => increment_start(natal_rashi_idx, div_idx, 8),
    }
}

/// Odd rashi starts from natal, even from natal+offset.
fn increment_start(natal_rashi_idx: u8, div_idx: u16, even_offset: u16) -> u8 {
    // 0-indexed: 0,2,4,6,8,10 are odd rashis (1-based 1,3,5,7,9,11)
    let is_odd = natal_rashi_idx % 2 == 0;
    let start = if is_odd {
        natal_rashi_idx as u16
    } else {
        (natal_rashi_idx as u16 + even_offset) % 12
    };
    ((start + div_idx) % 12) as u8
}

// ---------------------------------------------------------------------------
// Core transformation
// ---------------------------------------------------------------------------

/// 0-based division index of a longitude within its rashi.
pub fn division_index(sidereal_lon: f64, amsha: Amsha) -> u16 {
    let lon = normalize_360(sidereal_lon);
    let pos_in_rashi = lon % 30.0;
    let total = amsha.divisions();
    let deg_per_div = 30.0 / total as f64;
    ((pos_in_rashi / deg_per_div).floor() as u16).min(total - 1)
}

/// Navamsha part (0..8) of a longitude within its rashi.
pub fn navamsha_part(sidereal_lon: f64) -> u8 {
    division_index(sidereal_lon, Amsha::D9) as u8
}

/// Transform a sidereal longitude through an amsha division.
///
/// Returns the amsha longitude in [0, 360).
pub fn amsha_longitude(sidereal_lon: f64, amsha: Amsha) -> f64 {
    let lon = normalize_360(sidereal_lon);
    if amsha == Amsha::D1 {
        return lon;
    }

    let rashi_idx = Rashi::of_longitude(lon).index();
    let pos_in_rashi = lon - rashi_idx as f64 * 30.0;
    let deg_per_div = 30.0 / amsha.divisions() as f64;
    let div_idx = division_index(lon, amsha);

    let target_rashi_idx = amsha_target_rashi(amsha, rashi_idx, div_idx);

    // Scale position within division to 0-30 range
    let pos_in_div = pos_in_rashi - div_idx as f64 * deg_per_div;
    let scaled_pos = (pos_in_div / deg_per_div * 30.0).clamp(0.0, 30.0);

    normalize_360(target_rashi_idx as f64 * 30.0 + scaled_pos)
}

pub fn navamsha_longitude(sidereal_lon: f64) -> f64 {
    amsha_longitude(sidereal_lon, Amsha::D9)
}

pub fn dasamsa_longitude(sidereal_lon: f64) -> f64 {
    amsha_longitude(sidereal_lon, Amsha::D10)
}

/// Derive a divisional chart from a birth chart.
///
/// Every point is transformed and keeps its retrograde flag. Houses are
/// equal 30 degree houses from the derived Lagna (0 deg Mesha without one).
/// Metadata is carried over unchanged.
pub fn derive_chart(d1: &Chart, amsha: Amsha) -> Result<Chart, VedicError> {
    if amsha == Amsha::D1 {
        return Ok(d1.clone());
    }

    let mut builder = ChartBuilder::new(amsha.chart_kind()).meta(d1.meta().clone());
    for (point, pos) in d1.points() {
        let mut p = *pos;
        p.longitude = amsha_longitude(pos.longitude, amsha);
        builder = builder.point(point, p);
    }
    let start = d1
        .ascendant()
        .map(|asc| amsha_longitude(asc, amsha))
        .unwrap_or(0.0);
    builder = builder.cusps(equal_cusps(start));

    log::debug!("derived {} chart with {} points", amsha.name(), d1.len());
    builder.build()
}
