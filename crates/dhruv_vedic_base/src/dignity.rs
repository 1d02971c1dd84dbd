//! Sign-level dignity, natural benefic/malefic classes and the smaller
//! classical tables the career rules consult (yogakaraka, Pushkara
//! navamsha, navamsha deities, chara karakas).

use serde::Serialize;

use crate::amsha::navamsha_part;
use crate::chart::Chart;
use crate::graha::Graha;
use crate::rashi::{MotionClass, Rashi, degrees_in_rashi};
use crate::util::normalize_360;

// ---------------------------------------------------------------------------
// Exaltation, debilitation, own signs
// ---------------------------------------------------------------------------

/// Exaltation rashi. `None` for Rahu/Ketu.
pub const fn exaltation_rashi(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Surya => Some(Rashi::Mesha),
        Graha::Chandra => Some(Rashi::Vrishabha),
        Graha::Mangal => Some(Rashi::Makara),
        Graha::Buddh => Some(Rashi::Kanya),
        Graha::Guru => Some(Rashi::Karka),
        Graha::Shukra => Some(Rashi::Meena),
        Graha::Shani => Some(Rashi::Tula),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation rashi (7th from exaltation). `None` for Rahu/Ketu.
pub const fn debilitation_rashi(graha: Graha) -> Option<Rashi> {
    match exaltation_rashi(graha) {
        Some(r) => Some(Rashi::from_index(r.index() + 6)),
        None => None,
    }
}

/// Own-sign rashis. Empty for Rahu/Ketu.
pub const fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

pub fn is_exalted(graha: Graha, rashi: Rashi) -> bool {
    exaltation_rashi(graha) == Some(rashi)
}

pub fn is_debilitated(graha: Graha, rashi: Rashi) -> bool {
    debilitation_rashi(graha) == Some(rashi)
}

pub fn is_own_sign(graha: Graha, rashi: Rashi) -> bool {
    own_signs(graha).contains(&rashi)
}

/// Own sign or exaltation.
pub fn is_strong(graha: Graha, rashi: Rashi) -> bool {
    is_own_sign(graha, rashi) || is_exalted(graha, rashi)
}

/// Sign dignity of a graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dignity {
    Exalted,
    OwnSign,
    Debilitated,
    Neutral,
}

/// Priority: exaltation > own sign > debilitation.
pub fn dignity_in_rashi(graha: Graha, rashi: Rashi) -> Dignity {
    if is_exalted(graha, rashi) {
        Dignity::Exalted
    } else if is_own_sign(graha, rashi) {
        Dignity::OwnSign
    } else if is_debilitated(graha, rashi) {
        Dignity::Debilitated
    } else {
        Dignity::Neutral
    }
}

// ---------------------------------------------------------------------------
// Benefic / malefic
// ---------------------------------------------------------------------------

/// Natural benefics: Jupiter, Venus, Mercury, Moon.
pub const fn is_benefic(graha: Graha) -> bool {
    matches!(
        graha,
        Graha::Guru | Graha::Shukra | Graha::Buddh | Graha::Chandra
    )
}

/// Natural malefics: Saturn, Mars, Rahu, Ketu. The Sun is in neither class.
pub const fn is_malefic(graha: Graha) -> bool {
    matches!(
        graha,
        Graha::Shani | Graha::Mangal | Graha::Rahu | Graha::Ketu
    )
}

// ---------------------------------------------------------------------------
// Yogakaraka
// ---------------------------------------------------------------------------

/// Graha ruling both a kendra and a trikona for a Lagna rashi.
pub const fn yogakaraka(lagna: Rashi) -> Option<Graha> {
    match lagna {
        Rashi::Vrishabha | Rashi::Tula => Some(Graha::Shani),
        Rashi::Mithuna | Rashi::Makara | Rashi::Kumbha => Some(Graha::Shukra),
        Rashi::Karka | Rashi::Simha => Some(Graha::Mangal),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Pushkara navamsha
// ---------------------------------------------------------------------------

/// Pushkara degree range `[start, end)` inside a rashi.
pub const fn pushkara_range(rashi: Rashi) -> (f64, f64) {
    match rashi.motion_class() {
        MotionClass::Movable => (21.333, 24.0),
        MotionClass::Fixed => (24.0, 26.667),
        MotionClass::Dual => (26.667, 30.0),
    }
}

pub fn is_pushkara(longitude: f64) -> bool {
    let (start, end) = pushkara_range(Rashi::of_longitude(longitude));
    let deg = degrees_in_rashi(longitude);
    start <= deg && deg < end
}

// ---------------------------------------------------------------------------
// Navamsha deities
// ---------------------------------------------------------------------------

pub const NAVAMSHA_DEITIES: [&str; 9] = [
    "Agni", "Brahma", "Vishnu", "Shiva", "Skanda", "Indra", "Kubera", "Varuna", "Mitra",
];

/// Presiding deity of the navamsha holding `longitude`.
pub fn navamsha_deity(longitude: f64) -> &'static str {
    let lon = normalize_360(longitude);
    let rashi = Rashi::of_longitude(lon).index() as usize;
    let part = navamsha_part(lon) as usize;
    NAVAMSHA_DEITIES[(rashi * 9 + part) % 9]
}

// ---------------------------------------------------------------------------
// Chara karakas
// ---------------------------------------------------------------------------

/// The eight Jaimini significators, highest longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CharaKaraka {
    Atmakaraka,
    Amatyakaraka,
    Bhratrukaraka,
    Matrukaraka,
    Pitrukaraka,
    Putrakaraka,
    Gnatikaraka,
    Darakaraka,
}

pub const ALL_CHARA_KARAKAS: [CharaKaraka; 8] = [
    CharaKaraka::Atmakaraka,
    CharaKaraka::Amatyakaraka,
    CharaKaraka::Bhratrukaraka,
    CharaKaraka::Matrukaraka,
    CharaKaraka::Pitrukaraka,
    CharaKaraka::Putrakaraka,
    CharaKaraka::Gnatikaraka,
    CharaKaraka::Darakaraka,
];

impl CharaKaraka {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Atmakaraka => "Atmakaraka",
            Self::Amatyakaraka => "Amatyakaraka",
            Self::Bhratrukaraka => "Bhratrukaraka",
            Self::Matrukaraka => "Matrukaraka",
            Self::Pitrukaraka => "Pitrukaraka",
            Self::Putrakaraka => "Putrakaraka",
            Self::Gnatikaraka => "Gnatikaraka",
            Self::Darakaraka => "Darakaraka",
        }
    }
}

/// Bodies ranked for chara karakas (Ketu excluded).
const KARAKA_BODIES: [Graha; 8] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
];

/// Karakas ordered by full longitude, descending.
///
/// Absent bodies are skipped, so fewer than eight karakas may be assigned.
/// Ties keep the traditional graha order.
pub fn chara_karakas(chart: &Chart) -> Vec<(CharaKaraka, Graha)> {
    let mut bodies: Vec<(Graha, f64)> = KARAKA_BODIES
        .iter()
        .filter_map(|g| chart.longitude(*g).map(|lon| (*g, lon)))
        .collect();
    bodies.sort_by(|a, b| b.1.total_cmp(&a.1));
    ALL_CHARA_KARAKAS
        .iter()
        .zip(bodies)
        .map(|(k, (g, _))| (*k, g))
        .collect()
}

/// Graha holding one karaka role.
pub fn karaka(chart: &Chart, role: CharaKaraka) -> Option<Graha> {
    chara_karakas(chart)
        .into_iter()
        .find(|(k, _)| *k == role)
        .map(|(_, g)| g)
}
