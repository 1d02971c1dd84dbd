//! Runs the registry and folds the outcomes into a verdict.

use std::collections::BTreeMap;
use std::panic::{AssertUnwindSafe, catch_unwind};

use log::{debug, warn};
use serde::Serialize;

use super::checklist::{ChecklistEntry, build_checklist};
use super::summary::ChartSummary;
use super::{CareerRule, RuleContext, RuleOutcome, RuleRecord, default_rules};

/// Overall reading of the score map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerStrength {
    Strong,
    Moderate,
    Weak,
}

impl CareerStrength {
    /// Strong from a mean of 0.7, moderate from 0.4. No scores reads as
    /// moderate.
    pub fn from_scores(scores: &BTreeMap<String, f64>) -> Self {
        if scores.is_empty() {
            return Self::Moderate;
        }
        let mean = scores.values().sum::<f64>() / scores.len() as f64;
        if mean >= 0.7 {
            Self::Strong
        } else if mean >= 0.4 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerVerdict {
    pub career_strength: CareerStrength,
    pub factors: Vec<String>,
    pub scores: BTreeMap<String, f64>,
    pub applied_rules: Vec<RuleRecord>,
    pub rules_checklist: Vec<ChecklistEntry>,
    /// "matched/total" over the checklist.
    pub rules_score: String,
    pub chart_summary: ChartSummary,
}

impl CareerVerdict {
    pub fn matched_count(&self) -> usize {
        self.rules_checklist.iter().filter(|e| e.matched).count()
    }
}

/// Evaluates each rule in order. A rule that panics is logged and skipped.
pub fn run_rules(rules: &[Box<dyn CareerRule>], ctx: &RuleContext<'_>) -> Vec<RuleOutcome> {
    let mut outcomes = Vec::new();
    for rule in rules {
        match catch_unwind(AssertUnwindSafe(|| rule.evaluate(ctx))) {
            Ok(Some(outcome)) => outcomes.push(outcome),
            Ok(None) => {}
            Err(_) => warn!("career rule {} panicked; skipped", rule.id()),
        }
    }
    debug!("{} of {} career rules applied", outcomes.len(), rules.len());
    outcomes
}

/// Verdict over the full registry.
pub fn evaluate(ctx: &RuleContext<'_>) -> CareerVerdict {
    evaluate_with(&default_rules(), ctx)
}

/// Verdict over a caller-supplied rule set.
pub fn evaluate_with(rules: &[Box<dyn CareerRule>], ctx: &RuleContext<'_>) -> CareerVerdict {
    let outcomes = run_rules(rules, ctx);

    let mut factors = Vec::new();
    let mut scores = BTreeMap::new();
    for o in &outcomes {
        factors.extend(o.factors.iter().cloned());
        for (key, value) in &o.scores {
            scores.insert((*key).to_string(), *value);
        }
    }

    let chart_summary = ChartSummary::of(ctx.d1);
    let rules_checklist = build_checklist(&outcomes, &scores, ctx.dasha, &chart_summary);
    let matched = rules_checklist.iter().filter(|e| e.matched).count();
    let rules_score = format!("{matched}/{}", rules_checklist.len());

    CareerVerdict {
        career_strength: CareerStrength::from_scores(&scores),
        factors,
        scores,
        applied_rules: outcomes.into_iter().map(|o| o.record).collect(),
        rules_checklist,
        rules_score,
        chart_summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::mesha_chart;
    use dhruv_vedic_base::{Chart, ChartKind, Graha};

    struct Fixed(&'static str, f64);

    impl CareerRule for Fixed {
        fn id(&self) -> &'static str {
            self.0
        }

        fn evaluate(&self, _: &RuleContext<'_>) -> Option<RuleOutcome> {
            Some(RuleOutcome::new(self.0, self.1).factor(self.0).score(self.0, self.1))
        }
    }

    struct Broken;

    impl CareerRule for Broken {
        fn id(&self) -> &'static str {
            "broken"
        }

        fn evaluate(&self, _: &RuleContext<'_>) -> Option<RuleOutcome> {
            panic!("bad input")
        }
    }

    fn scores(values: &[f64]) -> BTreeMap<String, f64> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("k{i}"), *v))
            .collect()
    }

    #[test]
    fn strength_thresholds() {
        assert_eq!(CareerStrength::from_scores(&BTreeMap::new()), CareerStrength::Moderate);
        assert_eq!(CareerStrength::from_scores(&scores(&[0.7])), CareerStrength::Strong);
        assert_eq!(CareerStrength::from_scores(&scores(&[0.9, 0.5])), CareerStrength::Strong);
        assert_eq!(CareerStrength::from_scores(&scores(&[0.4])), CareerStrength::Moderate);
        assert_eq!(CareerStrength::from_scores(&scores(&[0.2, 0.3])), CareerStrength::Weak);
    }

    #[test]
    fn panicking_rule_is_skipped() {
        let rules: Vec<Box<dyn CareerRule>> = vec![
            Box::new(Fixed("sun_in_10th", 0.8)),
            Box::new(Broken),
            Box::new(Fixed("sav_10th", 1.0)),
        ];
        let c = mesha_chart(&[]);
        let v = evaluate_with(&rules, &RuleContext::new(&c, &c, &c));
        assert_eq!(v.applied_rules.len(), 2);
        assert_eq!(v.career_strength, CareerStrength::Strong);
        assert_eq!(v.factors, vec!["sun_in_10th".to_string(), "sav_10th".to_string()]);
    }

    #[test]
    fn later_scores_overwrite() {
        let rules: Vec<Box<dyn CareerRule>> =
            vec![Box::new(Fixed("sav_10th", 1.0)), Box::new(Fixed("sav_10th", 0.2))];
        let c = mesha_chart(&[]);
        let v = evaluate_with(&rules, &RuleContext::new(&c, &c, &c));
        assert_eq!(v.scores.len(), 1);
        assert!((v.scores["sav_10th"] - 0.2).abs() < 1e-12);
        assert_eq!(v.career_strength, CareerStrength::Weak);
    }

    #[test]
    fn empty_chart_is_moderate() {
        let empty = Chart::builder(ChartKind::Rasi).build().unwrap();
        let v = evaluate(&RuleContext::new(&empty, &empty, &empty));
        assert_eq!(v.career_strength, CareerStrength::Moderate);
        assert_eq!(v.rules_checklist.len(), 59);
        assert_eq!(v.rules_score, format!("{}/59", v.matched_count()));
    }

    #[test]
    fn full_registry_on_a_chart() {
        let c = mesha_chart(&[
            (Graha::Shani, 280.0, false),
            (Graha::Surya, 10.0, false),
            (Graha::Chandra, 100.0, false),
        ]);
        let v = evaluate(&RuleContext::new(&c, &c, &c));
        assert!(v.applied_rules.iter().any(|r| r.rule_id == "D1_10th_lord_in_10th"));
        assert!(v.scores.contains_key("d1_10th_lord_placement"));
        assert!(v.rules_checklist[0].matched);
    }
}
