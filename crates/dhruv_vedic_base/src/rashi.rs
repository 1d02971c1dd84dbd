//! The twelve 30-degree rashis, their lords, tatwas and motion classes, and
//! the degrees-minutes-seconds form of a position inside a rashi.
//!
//! Tatwa and motion class repeat in fixed cycles of four and three from Mesha.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::{Graha, rashi_lord};
use crate::util::normalize_360;

/// A zodiac sign, Mesha (Aries) first. Serialized by Sanskrit name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Tatwa (element) of a rashi: fire, earth, air, water repeating from Mesha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Air => "air",
            Self::Water => "water",
        }
    }
}

/// Motion class of a rashi: movable (chara), fixed (sthira), dual (dwiswabhava).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionClass {
    Movable,
    Fixed,
    Dual,
}

impl MotionClass {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Movable => "movable",
            Self::Fixed => "fixed",
            Self::Dual => "dual",
        }
    }
}

impl Rashi {
    /// Sanskrit name, e.g. "Vrischika".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// English name, e.g. "Scorpio".
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Mesha is 0, Meena is 11.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi from a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Rashi containing a sidereal longitude.
    pub fn of_longitude(lon: f64) -> Self {
        let idx = (normalize_360(lon) / 30.0).floor() as u8;
        ALL_RASHIS[idx.min(11) as usize]
    }

    /// Planetary lord.
    pub const fn lord(self) -> Graha {
        rashi_lord(self)
    }

    /// Tatwa of the rashi.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Motion class of the rashi.
    pub const fn motion_class(self) -> MotionClass {
        match self.index() % 3 {
            0 => MotionClass::Movable,
            1 => MotionClass::Fixed,
            _ => MotionClass::Dual,
        }
    }

    /// Forward offset in rashis from `self` to `other` (0..11).
    pub const fn distance_to(self, other: Rashi) -> u8 {
        (other.index() + 12 - self.index()) % 12
    }

    /// Resolve a Sanskrit or western name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, VedicError> {
        let trimmed = name.trim();
        ALL_RASHIS
            .into_iter()
            .find(|r| {
                r.name().eq_ignore_ascii_case(trimmed)
                    || r.western_name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| VedicError::UnknownName {
                kind: "rashi",
                name: name.to_string(),
            })
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl fmt::Display for Rashi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rashi {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl From<Rashi> for String {
    fn from(r: Rashi) -> Self {
        r.name().to_string()
    }
}

impl TryFrom<String> for Rashi {
    type Error = VedicError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_name(&s)
    }
}

/// An angle split into degrees, arc-minutes and arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    /// Fractional, below 60.
    pub seconds: f64,
}

/// Where a longitude falls in the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    pub rashi_index: u8,
    pub dms: Dms,
    /// In [0, 30).
    pub degrees_in_rashi: f64,
}

/// Split decimal degrees into DMS; the sign of the input is dropped.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Degrees within the sign, in [0, 30).
pub fn degrees_in_rashi(lon: f64) -> f64 {
    normalize_360(lon) % 30.0
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi = Rashi::of_longitude(lon);
    let degrees_in_rashi = lon - (rashi.index() as f64) * 30.0;

    RashiInfo {
        rashi,
        rashi_index: rashi.index(),
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}
