//! The compact D1 view shown beside the checklist.

use dhruv_vedic_base::{Chart, ChartPoint, Graha, Rashi};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSummary {
    pub tenth_house_rasi: Rashi,
    pub tenth_lord: Graha,
    pub tenth_lord_in_rasi: Option<Rashi>,
    /// Points sharing the 10th cusp's rashi, the Ascendant included.
    pub planets_in_10th: Vec<ChartPoint>,
    pub ascendant_rasi: Option<Rashi>,
}

impl ChartSummary {
    pub fn of(d1: &Chart) -> Self {
        let tenth_house_rasi = d1.cusp_rashi(10);
        let tenth_lord = tenth_house_rasi.lord();
        Self {
            tenth_house_rasi,
            tenth_lord,
            tenth_lord_in_rasi: d1.rashi_of(tenth_lord),
            planets_in_10th: d1.points_in_rashi(tenth_house_rasi),
            ascendant_rasi: d1.rashi_of(ChartPoint::Lagna),
        }
    }

    /// Display form of the 10th lord's rashi.
    pub fn tenth_lord_rasi_name(&self) -> String {
        self.tenth_lord_in_rasi
            .map_or_else(|| "Unknown".to_string(), |r| r.to_string())
    }
}
