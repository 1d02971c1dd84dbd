//! Every known rule id cross-referenced against what a batch produced.

use std::collections::BTreeMap;

use dhruv_vedic_base::{CurrentDasha, Graha};
use serde::Serialize;

use super::meta::{CATEGORY_ORDER, RULE_META, RuleCategory, RuleMeta};
use super::summary::ChartSummary;
use super::{RuleOutcome, join_names};

/// One row of the rule checklist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistEntry {
    pub rule_id: &'static str,
    pub name: &'static str,
    pub category: RuleCategory,
    pub matched: bool,
    pub current_value: String,
    pub reason: String,
    /// Record score when matched, 0 otherwise.
    pub score: f64,
}

/// Checklist rows of one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub category: RuleCategory,
    pub display_name: &'static str,
    pub matched_count: usize,
    pub total_count: usize,
    pub rules: Vec<ChecklistEntry>,
}

/// First outcome carrying a tag that contains `id`.
fn matching<'o>(outcomes: &'o [RuleOutcome], id: &str) -> Option<&'o RuleOutcome> {
    outcomes.iter().find(|o| o.tags().any(|t| t.contains(id)))
}

fn bhukti_name(bhukti: Option<Graha>) -> String {
    bhukti.map_or_else(|| "Unknown".to_string(), |g| g.to_string())
}

/// Value and reason for a row.
fn describe(
    meta: &RuleMeta,
    hit: Option<&RuleOutcome>,
    dasha: Option<&CurrentDasha>,
    summary: &ChartSummary,
) -> (String, String) {
    let lord = summary.tenth_lord;
    let tenth = summary.tenth_house_rasi;
    let lord_rasi = summary.tenth_lord_rasi_name();
    match (meta.id, hit) {
        ("D1_10th_lord_in_10th", Some(_)) => (
            format!("10th lord: {lord} in {tenth}"),
            format!("{lord} (10th lord) is placed in the 10th house ({tenth}), which is excellent for career."),
        ),
        ("D1_10th_lord_in_10th", None) => (
            format!("10th lord: {lord} in {lord_rasi}"),
            format!("{lord} (10th lord) is in {lord_rasi}, not in the 10th house ({tenth})."),
        ),
        ("D1_10th_lord_in_own_sign", Some(_)) => (
            format!("{lord} in own sign ({lord_rasi})"),
            format!("The 10th lord {lord} is in its own sign {lord_rasi}, strengthening career."),
        ),
        ("D1_10th_lord_in_own_sign", None) => (
            format!("{lord} in {lord_rasi}"),
            format!("The 10th lord {lord} is not in its own sign."),
        ),
        ("D1_planets_in_10th", Some(o)) if !summary.planets_in_10th.is_empty() => {
            let planets = &summary.planets_in_10th;
            (
                format!("{} planets: {}", planets.len(), join_names(planets)),
                o.record.explanation.clone(),
            )
        }
        ("D1_planets_in_10th", _) => (
            "No planets in 10th".to_string(),
            "No planets occupy the 10th house in D1.".to_string(),
        ),
        ("current_dasa_lord_is_10th_lord", _) => match (dasha, hit) {
            (None, _) => (
                "Dasha not calculated".to_string(),
                "Current Dasha period could not be determined.".to_string(),
            ),
            (Some(d), Some(_)) => {
                let dasa = d.current_dasa;
                (
                    format!("Dasha: {dasa} (10th lord)"),
                    format!("Currently running {dasa} Mahadasha, which rules the 10th house. Excellent time for career growth."),
                )
            }
            (Some(d), None) => {
                let dasa = d.current_dasa;
                (
                    format!("Dasha: {dasa} (10th lord: {lord})"),
                    format!("Currently in {dasa} Mahadasha. The 10th lord is {lord}, not {dasa}."),
                )
            }
        },
        ("current_bhukti_lord_is_10th_lord", _) => match (dasha, hit) {
            (None, _) => (
                "Bhukti not calculated".to_string(),
                "Current Bhukti period could not be determined.".to_string(),
            ),
            (Some(d), Some(_)) => {
                let bhukti = bhukti_name(d.current_bhukti);
                (
                    format!("Bhukti: {bhukti} (10th lord)"),
                    format!(
                        "Currently in {bhukti} Antardasha within {} Mahadasha. The 10th lord sub-period brings career opportunities.",
                        d.current_dasa
                    ),
                )
            }
            (Some(d), None) => {
                let bhukti = bhukti_name(d.current_bhukti);
                (
                    format!("Bhukti: {bhukti} (10th lord: {lord})"),
                    format!("Currently in {bhukti} Antardasha. The 10th lord is {lord}, not {bhukti}."),
                )
            }
        },
        ("dasha_10th_link" | "bhukti_10th_link", _) => match (dasha, hit) {
            (None, _) => (
                "Not calculated".to_string(),
                "Dasha periods not calculated.".to_string(),
            ),
            (Some(d), Some(o)) => (
                format!("{}/{}", d.current_dasa, bhukti_name(d.current_bhukti)),
                o.record.explanation.clone(),
            ),
            (Some(d), None) => (
                format!("{}/{}", d.current_dasa, bhukti_name(d.current_bhukti)),
                "Current Dasha/Bhukti periods not connected to 10th house or its lord.".to_string(),
            ),
        },
        (_, Some(o)) => (
            format!("Score: {:.2}", o.record.score),
            o.record.explanation.clone(),
        ),
        (_, None) => (
            "Not present".to_string(),
            format!("{} (Not found in this chart)", meta.explanation),
        ),
    }
}

/// One entry per known rule id, in the fixed metadata order.
///
/// A matched entry scores with the score-map value under its id when
/// there is one, otherwise with the matching record's score.
pub fn build_checklist(
    outcomes: &[RuleOutcome],
    scores: &BTreeMap<String, f64>,
    dasha: Option<&CurrentDasha>,
    summary: &ChartSummary,
) -> Vec<ChecklistEntry> {
    RULE_META
        .iter()
        .map(|meta| {
            let hit = matching(outcomes, meta.id);
            let (current_value, reason) = describe(meta, hit, dasha, summary);
            let score = hit.map_or(0.0, |o| {
                scores.get(meta.id).copied().unwrap_or(o.record.score)
            });
            ChecklistEntry {
                rule_id: meta.id,
                name: meta.name,
                category: RuleCategory::of(meta.id),
                matched: hit.is_some(),
                current_value,
                reason,
                score,
            }
        })
        .collect()
}

/// Checklist rows grouped in display order; empty categories are left out.
pub fn group_by_category(checklist: &[ChecklistEntry]) -> Vec<CategoryGroup> {
    CATEGORY_ORDER
        .iter()
        .filter_map(|&category| {
            let rules: Vec<ChecklistEntry> = checklist
                .iter()
                .filter(|e| e.category == category)
                .cloned()
                .collect();
            if rules.is_empty() {
                return None;
            }
            Some(CategoryGroup {
                category,
                display_name: category.display_name(),
                matched_count: rules.iter().filter(|e| e.matched).count(),
                total_count: rules.len(),
                rules,
            })
        })
        .collect()
}
