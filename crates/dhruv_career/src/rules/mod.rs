//! Career rule registry.
//!
//! Each rule is an independent strategy over the D1/D9/D10 charts, the
//! running dasha and the Ashtakavarga grid. A rule that does not apply
//! returns `None`; one that applies yields factor tags, named scores and a
//! [`RuleRecord`] for the report.

pub mod checklist;
pub mod classical;
pub mod d1;
pub mod d10;
pub mod engine;
pub mod meta;
pub mod summary;
pub mod timing;
pub mod yogas;

use std::fmt::Display;

use dhruv_vedic_base::{
    AshtakavargaGrid, Chart, ChartPoint, CurrentDasha, Graha, Rashi, is_benefic, is_exalted,
    is_own_sign,
};
use serde::Serialize;

pub use checklist::{CategoryGroup, ChecklistEntry, build_checklist, group_by_category};
pub use engine::{CareerStrength, CareerVerdict, evaluate, evaluate_with, run_rules};
pub use meta::{CATEGORY_ORDER, RULE_META, RuleCategory, RuleMeta, rule_meta};
pub use summary::ChartSummary;

/// Kendra (angular) houses.
pub const KENDRAS: [u8; 4] = [1, 4, 7, 10];

/// Upachaya (growing) houses.
pub const UPACHAYAS: [u8; 4] = [3, 6, 10, 11];

/// Everything a rule may read.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub d1: &'a Chart,
    pub d9: &'a Chart,
    pub d10: &'a Chart,
    pub dasha: Option<&'a CurrentDasha>,
    pub ashtakavarga: Option<&'a AshtakavargaGrid>,
}

impl<'a> RuleContext<'a> {
    pub fn new(d1: &'a Chart, d9: &'a Chart, d10: &'a Chart) -> Self {
        Self {
            d1,
            d9,
            d10,
            dasha: None,
            ashtakavarga: None,
        }
    }

    pub fn with_dasha(mut self, dasha: Option<&'a CurrentDasha>) -> Self {
        self.dasha = dasha;
        self
    }

    pub fn with_ashtakavarga(mut self, grid: Option<&'a AshtakavargaGrid>) -> Self {
        self.ashtakavarga = grid;
        self
    }

    /// Rashi on the D1 10th cusp.
    pub fn tenth_rashi(&self) -> Rashi {
        self.d1.cusp_rashi(10)
    }

    pub fn tenth_lord(&self) -> Graha {
        self.d1.house_lord(10)
    }

    /// Points in the D1 10th cusp house, the Lagna included.
    pub fn tenth_occupants(&self) -> Vec<ChartPoint> {
        self.d1.occupants(10)
    }

    pub fn tenth_benefics(&self) -> Vec<Graha> {
        self.tenth_occupants()
            .into_iter()
            .filter_map(ChartPoint::graha)
            .filter(|g| is_benefic(*g))
            .collect()
    }

    /// D10 houses are meaningful only once the D10 Lagna is known.
    pub fn d10_has_lagna(&self) -> bool {
        self.d10.ascendant().is_some()
    }

    /// Where the 10th lord sits in D1: its record id and score.
    pub fn tenth_lord_placement(&self) -> Option<(&'static str, f64)> {
        let lord = self.tenth_lord();
        let rashi = self.d1.rashi_of(lord)?;
        if rashi == self.tenth_rashi() {
            Some(("D1_10th_lord_in_10th", 1.0))
        } else if is_own_sign(lord, rashi) {
            Some(("D1_10th_lord_in_own_sign", 0.9))
        } else if is_exalted(lord, rashi) {
            Some(("D1_10th_lord_exalted", 1.0))
        } else {
            None
        }
    }
}

/// One evaluated rule as reported to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleRecord {
    pub rule_id: &'static str,
    pub name: &'static str,
    pub explanation: String,
    pub score: f64,
}

/// Output of one rule that applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub factors: Vec<String>,
    pub scores: Vec<(&'static str, f64)>,
    pub record: RuleRecord,
}

impl RuleOutcome {
    /// Outcome recorded under `rule_id` with its base name and explanation.
    pub fn new(rule_id: &'static str, score: f64) -> Self {
        let (name, explanation) = match rule_meta(rule_id) {
            Some(m) => (m.name, m.explanation.to_string()),
            None => (rule_id, String::new()),
        };
        Self {
            factors: Vec::new(),
            scores: Vec::new(),
            record: RuleRecord {
                rule_id,
                name,
                explanation,
                score,
            },
        }
    }

    /// Append chart-specific text to the explanation.
    pub fn detail(mut self, text: impl AsRef<str>) -> Self {
        if !self.record.explanation.is_empty() {
            self.record.explanation.push(' ');
        }
        self.record.explanation.push_str(text.as_ref());
        self
    }

    pub fn factor(mut self, tag: impl Into<String>) -> Self {
        self.factors.push(tag.into());
        self
    }

    pub fn score(mut self, key: &'static str, value: f64) -> Self {
        self.scores.push((key, value));
        self
    }

    /// Record id, factor tags and score keys.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.record.rule_id)
            .chain(self.factors.iter().map(String::as_str))
            .chain(self.scores.iter().map(|(k, _)| *k))
    }
}

/// One career rule.
pub trait CareerRule: Send + Sync {
    fn id(&self) -> &'static str;
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome>;
}

/// All rules in evaluation order.
pub fn default_rules() -> Vec<Box<dyn CareerRule>> {
    vec![
        Box::new(d1::TenthLordPlacement),
        Box::new(d1::PlanetsInTenth),
        Box::new(d10::D10TenthRashi),
        Box::new(timing::DasaLordIsTenthLord),
        Box::new(timing::BhuktiLordIsTenthLord),
        Box::new(timing::SavTenth),
        Box::new(d1::TenthLordInSecondOrThird),
        Box::new(d10::KendraBenefics),
        Box::new(d10::KendraMalefics),
        Box::new(d10::TenthTatwa),
        Box::new(d10::Vargottama),
        Box::new(d10::TenthLordTransposition),
        Box::new(d10::TenthLordWeak),
        Box::new(d1::AspectsToTenthHouse),
        Box::new(d1::AspectsToTenthLord),
        Box::new(classical::NavamshaDispositor),
        Box::new(d1::HouseConnections),
        Box::new(classical::ChandraLagna),
        Box::new(classical::CharaKarakas),
        Box::new(d10::RajaYogaStrength),
        Box::new(classical::UpachayaSunSaturn),
        Box::new(classical::EighthHouse),
        Box::new(classical::AmsaDeity),
        Box::new(yogas::YogakarakaInTenth),
        Box::new(yogas::ParivartanaWithTenthLord),
        Box::new(yogas::Neechabhanga),
        Box::new(yogas::SunInTenth),
        Box::new(yogas::DharmaKarma),
        Box::new(yogas::ExaltedInTenth),
        Box::new(yogas::NodesInTenth),
        Box::new(yogas::CombustInTenth),
        Box::new(d10::LagnaStrength),
        Box::new(d10::TenthLordStrength),
        Box::new(d10::BigThreeLords),
        Box::new(d1::ArthaTrikona),
        Box::new(d1::BusinessVsJob),
        Box::new(d10::SaturnPlacement),
        Box::new(d1::PlanetaryIndicators),
        Box::new(d10::HouseOccupants::SECOND),
        Box::new(d10::HouseOccupants::FOURTH),
        Box::new(d10::HouseOccupants::EIGHTH),
        Box::new(d10::HouseOccupants::NINTH),
        Box::new(timing::DashaCareerTiming),
        Box::new(d10::StrengthComparison),
        Box::new(classical::MoonTenth),
        Box::new(d10::BeneficRatio),
        Box::new(d10::ExaltedInBoth),
        Box::new(d10::AspectsInD10::JUPITER),
        Box::new(d10::AspectsInD10::SATURN),
        Box::new(d10::RetrogradeInD10),
    ]
}

/// Names joined for prose.
pub(crate) fn join_names<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Joined names, or "None" for an empty list.
pub(crate) fn or_none(names: String) -> String {
    if names.is_empty() {
        "None".to_string()
    } else {
        names
    }
}

/// Names joined for factor tags.
pub(crate) fn join_tag<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
pub(crate) mod fixtures {
    use dhruv_vedic_base::{Amsha, Chart, ChartKind, Graha, derive_chart, equal_cusps};

    /// Mesha Lagna, equal houses: the 10th is Makara, ruled by Saturn.
    pub fn mesha_chart(placements: &[(Graha, f64, bool)]) -> Chart {
        let mut b = Chart::builder(ChartKind::Rasi)
            .ascendant(5.0)
            .cusps(equal_cusps(0.0));
        for (g, lon, retro) in placements {
            b = b.graha(*g, *lon, *retro);
        }
        b.build().unwrap()
    }

    pub fn derived(d1: &Chart) -> (Chart, Chart) {
        (
            derive_chart(d1, Amsha::D9).unwrap(),
            derive_chart(d1, Amsha::D10).unwrap(),
        )
    }
}
