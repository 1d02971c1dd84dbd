//! The 27 lunar mansions of 13 deg 20' and their four padas.
//!
//! Vimshottari lordship runs Ketu, Venus, Sun, Moon, Mars, Rahu, Jupiter,
//! Saturn, Mercury and repeats three times around the zodiac.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;
use crate::util::normalize_360;

/// 13 deg 20'.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// 3 deg 20'.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// Vimshottari lord sequence, starting at Ashwini.
pub const VIMSHOTTARI_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// A nakshatra, Ashwini first. Serialized by Sanskrit name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Alternate spellings seen in external data.
const NAME_ALIASES: [(&str, Nakshatra); 6] = [
    ("Moola", Nakshatra::Mula),
    ("Dhanishta", Nakshatra::Dhanishtha),
    ("Shatataraka", Nakshatra::Shatabhisha),
    ("Aswini", Nakshatra::Ashwini),
    ("Aslesha", Nakshatra::Ashlesha),
    ("Jyeshta", Nakshatra::Jyeshtha),
];

impl Nakshatra {
    /// Sanskrit name, e.g. "Purva Bhadrapada".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Ashwini is 0, Revati is 26.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Vimshottari ruling graha.
    pub const fn lord(self) -> Graha {
        VIMSHOTTARI_LORDS[(self.index() % 9) as usize]
    }

    /// Resolve a name, ignoring case, spaces and common alternate spellings.
    pub fn from_name(name: &str) -> Result<Self, VedicError> {
        let squash = |s: &str| -> String {
            s.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_lowercase())
                .collect()
        };
        let wanted = squash(name);
        ALL_NAKSHATRAS_27
            .into_iter()
            .find(|n| squash(n.name()) == wanted)
            .or_else(|| {
                NAME_ALIASES
                    .into_iter()
                    .find(|(alias, _)| squash(alias) == wanted)
                    .map(|(_, n)| n)
            })
            .ok_or_else(|| VedicError::UnknownName {
                kind: "nakshatra",
                name: name.to_string(),
            })
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Nakshatra {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl From<Nakshatra> for String {
    fn from(n: Nakshatra) -> Self {
        n.name().to_string()
    }
}

impl TryFrom<String> for Nakshatra {
    type Error = VedicError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_name(&s)
    }
}

/// Where a longitude falls among the nakshatras.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    pub nakshatra_index: u8,
    /// 1 to 4.
    pub pada: u8,
    /// Vimshottari lord.
    pub lord: Graha,
    pub degrees_in_nakshatra: f64,
    pub degrees_in_pada: f64,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fraction_elapsed: f64,
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - (nak_idx as f64) * NAKSHATRA_SPAN_27;
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);
    let degrees_in_pada = degrees_in_nakshatra - (pada_idx as f64) * PADA_SPAN;
    let nakshatra = ALL_NAKSHATRAS_27[nak_idx as usize];

    NakshatraInfo {
        nakshatra,
        nakshatra_index: nak_idx,
        pada: pada_idx + 1,
        lord: nakshatra.lord(),
        degrees_in_nakshatra,
        degrees_in_pada,
        fraction_elapsed: degrees_in_nakshatra / NAKSHATRA_SPAN_27,
    }
}
