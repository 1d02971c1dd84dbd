//! Combustion (Asta) detection.
//!
//! A graha is combust when it sits closer to the Sun than its orb.
//! Retrograde Mercury and Venus use tighter orbs.

use crate::chart::Chart;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::util::angular_distance;

/// Combustion orb in degrees from the Sun.
///
/// `None` for the Sun and the nodes.
pub fn combustion_threshold(graha: Graha, is_retrograde: bool) -> Option<f64> {
    match graha {
        Graha::Surya | Graha::Rahu | Graha::Ketu => None,
        Graha::Chandra => Some(12.0),
        Graha::Mangal => Some(17.0),
        Graha::Buddh => {
            if is_retrograde {
                Some(12.0)
            } else {
                Some(14.0)
            }
        }
        Graha::Guru => Some(11.0),
        Graha::Shukra => {
            if is_retrograde {
                Some(8.0)
            } else {
                Some(10.0)
            }
        }
        Graha::Shani => Some(15.0),
    }
}

/// Whether a graha is combust. The orb boundary itself is not combust.
pub fn is_combust(graha: Graha, graha_lon: f64, sun_lon: f64, is_retrograde: bool) -> bool {
    match combustion_threshold(graha, is_retrograde) {
        Some(orb) => angular_distance(graha_lon, sun_lon) < orb,
        None => false,
    }
}

/// Whether `graha` is combust in `chart`. False without the Sun or the graha.
pub fn is_combust_in(chart: &Chart, graha: Graha) -> bool {
    match (chart.position(graha), chart.longitude(Graha::Surya)) {
        (Some(p), Some(sun)) => is_combust(graha, p.longitude, sun, p.retrograde),
        _ => false,
    }
}

/// Combust grahas of a chart in traditional order.
pub fn combust_grahas(chart: &Chart) -> Vec<Graha> {
    ALL_GRAHAS
        .into_iter()
        .filter(|g| is_combust_in(chart, *g))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;

    #[test]
    fn orbs() {
        for g in [Graha::Surya, Graha::Rahu, Graha::Ketu] {
            assert!(combustion_threshold(g, false).is_none(), "{g}");
            assert!(!is_combust(g, 100.0, 100.0, false));
        }
        assert_eq!(combustion_threshold(Graha::Chandra, true), Some(12.0));
        assert_eq!(combustion_threshold(Graha::Guru, false), Some(11.0));
        assert_eq!(combustion_threshold(Graha::Shani, false), Some(15.0));
    }

    #[test]
    fn strict_boundary() {
        assert!(!is_combust(Graha::Mangal, 117.0, 100.0, false));
        assert!(is_combust(Graha::Mangal, 116.999, 100.0, false));
    }

    #[test]
    fn wraps_across_zero() {
        assert!(is_combust(Graha::Mangal, 5.0, 355.0, false));
        assert!(!is_combust(Graha::Chandra, 20.0, 355.0, false));
    }

    #[test]
    fn retrograde_orbs_tighter() {
        assert!(is_combust(Graha::Buddh, 113.0, 100.0, false));
        assert!(!is_combust(Graha::Buddh, 113.0, 100.0, true));
        assert!(is_combust(Graha::Shukra, 109.0, 100.0, false));
        assert!(!is_combust(Graha::Shukra, 109.0, 100.0, true));
    }

    #[test]
    fn chart_level_status() {
        let chart = Chart::builder(ChartKind::Rasi)
            .graha(Graha::Surya, 100.0, false)
            .graha(Graha::Chandra, 105.0, false)
            .graha(Graha::Mangal, 200.0, false)
            .graha(Graha::Buddh, 113.0, true)
            .graha(Graha::Shukra, 109.0, false)
            .nodes(100.0)
            .build()
            .unwrap();
        assert_eq!(combust_grahas(&chart), vec![Graha::Chandra, Graha::Shukra]);
        assert!(!is_combust_in(&chart, Graha::Guru));
    }
}
