//! Ashtakavarga (benefic points) calculations.
//!
//! Implements Bhinna Ashtakavarga (BAV) for the 7 grahas and the Lagna, and
//! Sarvashtakavarga (SAV) as the elementwise sum of the 7 planetary BAVs.
//!
//! For each target, 8 contributors (7 grahas + Lagna) assign benefic points
//! (bindus) to rashis based on their relative offset. Grid slots are rashis
//! counted from Mesha (slot 1 = Mesha .. slot 12 = Meena). Every bindu keeps
//! the name of the contributor that produced it.
//!
//! Mathematical invariants (totals across 12 rashis, constant for ALL charts
//! with every contributor present):
//! - Sun: 48, Moon: 49, Mars: 39, Mercury: 54, Jupiter: 56, Venus: 52, Saturn: 39
//! - Lagna: 49
//! - SAV total: 337

use serde::Serialize;

use crate::chart::{Chart, ChartPoint};
use crate::graha::{Graha, SAPTA_GRAHAS};

// ---------------------------------------------------------------------------
// Rules table (bitmask encoding)
// ---------------------------------------------------------------------------

/// Build a bitmask from 1-based offset values.
/// Bit i is set if offset i appears in the list.
const fn bits(offsets: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < offsets.len() {
        mask |= 1u16 << offsets[i];
        i += 1;
    }
    mask
}

/// Ashtakavarga rules: RULES[target][contributor] = bitmask of favorable offsets.
///
/// target:      0=Sun, 1=Moon, 2=Mars, 3=Mercury, 4=Jupiter, 5=Venus, 6=Saturn, 7=Lagna
/// contributor: 0=Sun, 1=Moon, 2=Mars, 3=Mercury, 4=Jupiter, 5=Venus, 6=Saturn, 7=Lagna
///
/// Offsets are 1-based (1=same rashi, 2=next rashi, ..., 12=previous rashi).
const RULES: [[u16; 8]; 8] = [
    // Sun (total: 48)
    [
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]), // from Sun
        bits(&[3, 6, 10, 11]),             // from Moon
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]), // from Mars
        bits(&[3, 5, 6, 9, 10, 11, 12]),   // from Mercury
        bits(&[5, 6, 9, 11]),              // from Jupiter
        bits(&[6, 7, 12]),                 // from Venus
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]), // from Saturn
        bits(&[3, 4, 6, 10, 11, 12]),      // from Lagna
    ],
    // Moon (total: 49)
    [
        bits(&[3, 6, 7, 8, 10, 11]),       // from Sun
        bits(&[1, 3, 6, 7, 10, 11]),       // from Moon
        bits(&[2, 3, 5, 6, 9, 10, 11]),    // from Mars
        bits(&[1, 3, 4, 5, 7, 8, 10, 11]), // from Mercury
        bits(&[1, 4, 7, 8, 10, 11, 12]),   // from Jupiter
        bits(&[3, 4, 5, 7, 9, 10, 11]),    // from Venus
        bits(&[3, 5, 6, 11]),              // from Saturn
        bits(&[3, 6, 10, 11]),             // from Lagna
    ],
    // Mars (total: 39)
    [
        bits(&[3, 5, 6, 10, 11]),        // from Sun
        bits(&[3, 6, 11]),               // from Moon
        bits(&[1, 2, 4, 7, 8, 10, 11]),  // from Mars
        bits(&[3, 5, 6, 11]),            // from Mercury
        bits(&[6, 10, 11, 12]),          // from Jupiter
        bits(&[6, 8, 11, 12]),           // from Venus
        bits(&[1, 4, 7, 8, 9, 10, 11]),  // from Saturn
        bits(&[1, 3, 6, 10, 11]),        // from Lagna
    ],
    // Mercury (total: 54)
    [
        bits(&[5, 6, 9, 11, 12]),           // from Sun
        bits(&[2, 4, 6, 8, 10, 11]),        // from Moon
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),  // from Mars
        bits(&[1, 3, 5, 6, 9, 10, 11, 12]), // from Mercury
        bits(&[6, 8, 11, 12]),              // from Jupiter
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),   // from Venus
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),  // from Saturn
        bits(&[1, 2, 4, 6, 8, 10, 11]),     // from Lagna
    ],
    // Jupiter (total: 56)
    [
        bits(&[1, 2, 3, 4, 7, 8, 9, 10, 11]), // from Sun
        bits(&[2, 5, 7, 9, 11]),              // from Moon
        bits(&[1, 2, 4, 7, 8, 10, 11]),       // from Mars
        bits(&[1, 2, 4, 5, 6, 9, 10, 11]),    // from Mercury
        bits(&[1, 2, 3, 4, 7, 8, 10, 11]),    // from Jupiter
        bits(&[2, 5, 6, 9, 10, 11]),          // from Venus
        bits(&[3, 5, 6, 12]),                 // from Saturn
        bits(&[1, 2, 4, 5, 6, 7, 9, 10, 11]), // from Lagna
    ],
    // Venus (total: 52)
    [
        bits(&[8, 11, 12]),                   // from Sun
        bits(&[1, 2, 3, 4, 5, 8, 9, 11, 12]), // from Moon
        bits(&[3, 4, 6, 9, 11, 12]),          // from Mars
        bits(&[3, 5, 6, 9, 11]),              // from Mercury
        bits(&[5, 8, 9, 10, 11]),             // from Jupiter
        bits(&[1, 2, 3, 4, 5, 8, 9, 10, 11]), // from Venus
        bits(&[3, 4, 5, 8, 9, 10, 11]),       // from Saturn
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),     // from Lagna
    ],
    // Saturn (total: 39)
    [
        bits(&[1, 2, 4, 7, 8, 10, 11]), // from Sun
        bits(&[3, 6, 11]),              // from Moon
        bits(&[3, 5, 6, 10, 11, 12]),   // from Mars
        bits(&[6, 8, 9, 10, 11, 12]),   // from Mercury
        bits(&[5, 6, 11, 12]),          // from Jupiter
        bits(&[6, 11, 12]),             // from Venus
        bits(&[3, 5, 6, 11]),           // from Saturn
        bits(&[1, 3, 4, 6, 10, 11]),    // from Lagna
    ],
    // Lagna (total: 49)
    [
        bits(&[3, 4, 6, 10, 11, 12]),         // from Sun
        bits(&[3, 6, 10, 11]),                // from Moon
        bits(&[1, 3, 6, 10, 11]),             // from Mars
        bits(&[1, 2, 4, 6, 8, 10, 11]),       // from Mercury
        bits(&[1, 2, 4, 5, 6, 7, 9, 10, 11]), // from Jupiter
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),     // from Venus
        bits(&[1, 3, 4, 6, 10, 11]),          // from Saturn
        bits(&[3, 6, 10, 11]),                // from Lagna
    ],
];

/// Expected BAV totals per graha (for validation).
pub const BAV_TOTALS: [u8; 7] = [48, 49, 39, 54, 56, 52, 39];

/// Expected total of the Lagna's own BAV.
pub const LAGNA_BAV_TOTAL: u8 = 49;

/// Expected SAV total (constant for all fully populated charts).
pub const SAV_TOTAL: u16 = 337;

/// Contributors in table order.
const CONTRIBUTORS: [ChartPoint; 8] = [
    ChartPoint::Graha(Graha::Surya),
    ChartPoint::Graha(Graha::Chandra),
    ChartPoint::Graha(Graha::Mangal),
    ChartPoint::Graha(Graha::Buddh),
    ChartPoint::Graha(Graha::Guru),
    ChartPoint::Graha(Graha::Shukra),
    ChartPoint::Graha(Graha::Shani),
    ChartPoint::Lagna,
];

/// Relative position (1-12) of `slot` counted from `reference` (both 1-based).
pub fn relative_position(slot: u8, reference: u8) -> u8 {
    if slot >= reference {
        slot - reference + 1
    } else {
        slot + 13 - reference
    }
}

// ---------------------------------------------------------------------------
// Bhinna Ashtakavarga (BAV)
// ---------------------------------------------------------------------------

/// Bhinna Ashtakavarga for one target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BhinnaAshtakavarga {
    pub target: ChartPoint,
    /// Bindus per rashi slot (index 0 = Mesha, max 8 each).
    pub points: [u8; 12],
    /// Contributors of each slot's bindus, in contributor order.
    pub contributions: [Vec<ChartPoint>; 12],
}

impl BhinnaAshtakavarga {
    /// Total points across all 12 rashis.
    pub fn total(&self) -> u8 {
        self.points.iter().sum()
    }
}

/// Calculate the BAV of one target.
///
/// `target_index`: 0=Sun .. 6=Saturn, 7=Lagna.
/// `rashis`: 0-based rashi of each contributor in table order; `None`
/// contributors add nothing.
pub fn calculate_bav(target_index: u8, rashis: &[Option<u8>; 8]) -> BhinnaAshtakavarga {
    let rules = &RULES[target_index as usize % 8];
    let mut points = [0u8; 12];
    let mut contributions: [Vec<ChartPoint>; 12] = Default::default();

    for (contributor, rashi) in rashis.iter().enumerate() {
        let Some(reference) = rashi else {
            continue;
        };
        for slot in 1u8..=12 {
            let offset = relative_position(slot, reference % 12 + 1);
            if (rules[contributor] >> offset) & 1 == 1 {
                points[slot as usize - 1] += 1;
                contributions[slot as usize - 1].push(CONTRIBUTORS[contributor]);
            }
        }
    }

    BhinnaAshtakavarga {
        target: CONTRIBUTORS[target_index as usize % 8],
        points,
        contributions,
    }
}

// ---------------------------------------------------------------------------
// Full grid
// ---------------------------------------------------------------------------

/// Classification of the SAV of the 10th slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SavStrength {
    Strong,
    Good,
    Moderate,
}

impl SavStrength {
    /// >= 30 strong, >= 26 good, otherwise moderate.
    pub fn from_bindus(bindus: u8) -> Self {
        if bindus >= 30 {
            Self::Strong
        } else if bindus >= 26 {
            Self::Good
        } else {
            Self::Moderate
        }
    }

    pub fn score(self) -> f64 {
        match self {
            Self::Strong => 1.0,
            Self::Good => 0.7,
            Self::Moderate => 0.4,
        }
    }
}

/// BAVs of the 7 grahas and the Lagna, plus SAV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AshtakavargaGrid {
    /// Sun..Saturn.
    pub bav: [BhinnaAshtakavarga; 7],
    /// The Lagna's own BAV (not part of SAV).
    pub lagna_bav: BhinnaAshtakavarga,
    /// Elementwise sum of the 7 planetary BAVs.
    pub sav: [u8; 12],
}

impl AshtakavargaGrid {
    pub fn sav_total(&self) -> u16 {
        self.sav.iter().map(|&v| v as u16).sum()
    }

    /// SAV of rashi slot `slot` (1 = Mesha .. 12 = Meena).
    pub fn sav_slot(&self, slot: u8) -> Option<u8> {
        (1..=12).contains(&slot).then(|| self.sav[slot as usize - 1])
    }

    /// SAV of slot 10, the career signal.
    pub fn sav_tenth(&self) -> u8 {
        self.sav[9]
    }

    pub fn sav_tenth_strength(&self) -> SavStrength {
        SavStrength::from_bindus(self.sav_tenth())
    }

    /// BAV of a graha (Sun..Saturn).
    pub fn bav_of(&self, graha: Graha) -> Option<&BhinnaAshtakavarga> {
        SAPTA_GRAHAS
            .iter()
            .position(|g| *g == graha)
            .map(|i| &self.bav[i])
    }

    /// Per-planet bindus of one slot, in Sun..Saturn order.
    pub fn sav_by_planet(&self, slot: u8) -> Vec<(Graha, u8)> {
        if !(1..=12).contains(&slot) {
            return Vec::new();
        }
        SAPTA_GRAHAS
            .iter()
            .zip(self.bav.iter())
            .map(|(g, b)| (*g, b.points[slot as usize - 1]))
            .collect()
    }
}

/// Compute the full grid from a birth chart.
///
/// Returns `None` when the Sun, the Moon or the Lagna is missing. Other
/// missing grahas simply contribute nothing.
pub fn ashtakavarga(chart: &Chart) -> Option<AshtakavargaGrid> {
    let mut rashis = [None; 8];
    for (i, point) in CONTRIBUTORS.iter().enumerate() {
        rashis[i] = chart.rashi_of(*point).map(|r| r.index());
    }
    if rashis[0].is_none() || rashis[1].is_none() || rashis[7].is_none() {
        log::debug!("ashtakavarga unavailable: Sun, Moon or Lagna missing");
        return None;
    }

    let bav: [BhinnaAshtakavarga; 7] = std::array::from_fn(|i| calculate_bav(i as u8, &rashis));
    let lagna_bav = calculate_bav(7, &rashis);

    let mut sav = [0u8; 12];
    for b in &bav {
        for (acc, p) in sav.iter_mut().zip(b.points.iter()) {
            *acc += p;
        }
    }

    let grid = AshtakavargaGrid {
        bav,
        lagna_bav,
        sav,
    };
    log::debug!("ashtakavarga SAV total {}", grid.sav_total());
    Some(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;

    fn all_at(rashis: [u8; 8]) -> [Option<u8>; 8] {
        rashis.map(Some)
    }

    #[test]
    fn rules_table_bav_totals() {
        for (graha, &expected) in BAV_TOTALS.iter().enumerate() {
            let total: u32 = RULES[graha].iter().map(|&mask| mask.count_ones()).sum();
            assert_eq!(
                total as u8, expected,
                "BAV total mismatch for graha {graha}: got {total}, expected {expected}"
            );
        }
        let lagna: u32 = RULES[7].iter().map(|&mask| mask.count_ones()).sum();
        assert_eq!(lagna as u8, LAGNA_BAV_TOTAL);
    }

    #[test]
    fn rules_table_sav_total() {
        let total: u32 = RULES[..7]
            .iter()
            .flat_map(|r| r.iter())
            .map(|&mask| mask.count_ones())
            .sum();
        assert_eq!(total as u16, SAV_TOTAL);
    }

    #[test]
    fn relative_position_forward_count() {
        assert_eq!(relative_position(5, 5), 1);
        assert_eq!(relative_position(6, 5), 2);
        assert_eq!(relative_position(4, 5), 12);
        assert_eq!(relative_position(1, 12), 2);
    }

    #[test]
    fn bav_totals_any_position() {
        let rashis = all_at([3, 7, 0, 11, 5, 9, 2, 1]);
        for i in 0..7u8 {
            assert_eq!(calculate_bav(i, &rashis).total(), BAV_TOTALS[i as usize]);
        }
        assert_eq!(calculate_bav(7, &rashis).total(), LAGNA_BAV_TOTAL);
    }

    #[test]
    fn contributions_match_points() {
        let rashis = all_at([3, 7, 0, 11, 5, 9, 2, 1]);
        let bav = calculate_bav(0, &rashis);
        for slot in 0..12 {
            assert_eq!(bav.contributions[slot].len(), bav.points[slot] as usize);
        }
    }

    #[test]
    fn sun_bav_from_own_sign() {
        // Everything in Mesha: offset 1 scores only from Sun, Mars and Saturn.
        let bav = calculate_bav(0, &all_at([0; 8]));
        assert_eq!(bav.points[0], 3);
        assert!(bav.contributions[0].contains(&ChartPoint::Graha(Graha::Surya)));
        assert!(!bav.contributions[0].contains(&ChartPoint::Lagna));
    }

    #[test]
    fn missing_contributor_skipped() {
        let mut rashis = all_at([0; 8]);
        rashis[4] = None;
        let bav = calculate_bav(0, &rashis);
        assert_eq!(bav.total(), 48 - 4);
    }

    #[test]
    fn grid_requires_sun_moon_lagna() {
        let chart = Chart::builder(ChartKind::Rasi)
            .graha(Graha::Surya, 10.0, false)
            .graha(Graha::Chandra, 100.0, false)
            .build()
            .unwrap();
        assert!(ashtakavarga(&chart).is_none());
    }

    #[test]
    fn grid_sav_is_337() {
        let chart = Chart::builder(ChartKind::Rasi)
            .ascendant(95.0)
            .graha(Graha::Surya, 10.0, false)
            .graha(Graha::Chandra, 100.0, false)
            .graha(Graha::Mangal, 200.0, false)
            .graha(Graha::Buddh, 25.0, false)
            .graha(Graha::Guru, 310.0, false)
            .graha(Graha::Shukra, 50.0, false)
            .graha(Graha::Shani, 280.0, false)
            .build()
            .unwrap();
        let grid = ashtakavarga(&chart).unwrap();
        assert_eq!(grid.sav_total(), SAV_TOTAL);
        assert_eq!(grid.lagna_bav.total(), LAGNA_BAV_TOTAL);
        let by_planet: u8 = grid.sav_by_planet(10).iter().map(|(_, p)| p).sum();
        assert_eq!(by_planet, grid.sav_tenth());
    }

    #[test]
    fn sav_strength_thresholds() {
        assert_eq!(SavStrength::from_bindus(30), SavStrength::Strong);
        assert_eq!(SavStrength::from_bindus(26), SavStrength::Good);
        assert_eq!(SavStrength::from_bindus(25), SavStrength::Moderate);
        assert!((SavStrength::Good.score() - 0.7).abs() < 1e-12);
    }
}
