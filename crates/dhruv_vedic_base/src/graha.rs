//! Grahas, their names, and the lordship of the twelve rashis.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::rashi::Rashi;

/// A chart body: the seven visible planets plus the lunar nodes.
///
/// Serialized by English name ("Sun", "Moon", ...). Parsing accepts the
/// English or Sanskrit name in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// Sun through Saturn, then Rahu and Ketu.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// Sun through Saturn; the node-free set used by Ashtakavarga and the karakas.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Position in [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// True for Rahu and Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Resolve an English or Sanskrit name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, VedicError> {
        let trimmed = name.trim();
        ALL_GRAHAS
            .into_iter()
            .find(|g| {
                g.english_name().eq_ignore_ascii_case(trimmed)
                    || g.name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| VedicError::UnknownName {
                kind: "graha",
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Graha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

impl FromStr for Graha {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl From<Graha> for String {
    fn from(g: Graha) -> Self {
        g.english_name().to_string()
    }
}

impl TryFrom<String> for Graha {
    type Error = VedicError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_name(&s)
    }
}

/// Lord of a rashi: Mars, Venus, Mercury, Moon, Sun, Mercury, Venus, Mars,
/// Jupiter, Saturn, Saturn, Jupiter from Mesha onward.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Get the lord of a rashi by 0-based index.
///
/// Returns None if index >= 12.
pub fn rashi_lord_by_index(rashi_index: u8) -> Option<Graha> {
    if rashi_index >= 12 {
        return None;
    }
    Some(rashi_lord(crate::rashi::ALL_RASHIS[rashi_index as usize]))
}

/// Compute the n-th rashi from a given rashi (0-based indices, 1-based offset).
///
/// `nth_rashi_from(0, 1)` = 0 (same rashi), `nth_rashi_from(0, 2)` = 1 (next rashi).
pub fn nth_rashi_from(rashi_index: u8, offset: u8) -> u8 {
    ((rashi_index as u16 + offset as u16 + 11) % 12) as u8
}

/// The n-th house counted from `house` (both 1-based, the house itself is the 1st).
pub fn nth_house_from(house: u8, n: u8) -> u8 {
    ((house as u16 + n as u16 + 22) % 12 + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn from_name_accepts_both_vocabularies() {
        assert_eq!(Graha::from_name("Sun").unwrap(), Graha::Surya);
        assert_eq!(Graha::from_name("shani").unwrap(), Graha::Shani);
        assert_eq!(Graha::from_name(" JUPITER ").unwrap(), Graha::Guru);
        assert_eq!("Rahu".parse::<Graha>().unwrap(), Graha::Rahu);
    }

    #[test]
    fn from_name_unknown() {
        assert!(matches!(
            Graha::from_name("Pluto"),
            Err(VedicError::UnknownName { kind: "graha", .. })
        ));
    }

    #[test]
    fn serde_uses_english_name() {
        let json = serde_json::to_string(&Graha::Buddh).unwrap();
        assert_eq!(json, "\"Mercury\"");
        let g: Graha = serde_json::from_str("\"Venus\"").unwrap();
        assert_eq!(g, Graha::Shukra);
    }

    #[test]
    fn rashi_lordship_dual_ruled() {
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrischika), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrishabha), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Tula), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Dhanu), Graha::Guru);
        assert_eq!(rashi_lord(Rashi::Meena), Graha::Guru);
        assert_eq!(rashi_lord(Rashi::Makara), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
    }

    #[test]
    fn rashi_lord_by_index_bounds() {
        assert_eq!(rashi_lord_by_index(4), Some(Graha::Surya));
        assert_eq!(rashi_lord_by_index(12), None);
    }

    #[test]
    fn nth_rashi_wrap() {
        assert_eq!(nth_rashi_from(0, 1), 0);
        assert_eq!(nth_rashi_from(11, 2), 0);
        assert_eq!(nth_rashi_from(0, 12), 11);
        assert_eq!(nth_rashi_from(0, 8), 7);
    }

    #[test]
    fn nth_house_wrap() {
        assert_eq!(nth_house_from(1, 1), 1);
        assert_eq!(nth_house_from(1, 7), 7);
        assert_eq!(nth_house_from(10, 7), 4);
        assert_eq!(nth_house_from(12, 2), 1);
    }
}
