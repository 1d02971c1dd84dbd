//! Reading individual rule scores.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreStrength {
    Excellent,
    Good,
    Moderate,
    Present,
    Weak,
}

/// Excellent from 0.8, good from 0.5, moderate from 0.3, present above 0.
pub fn score_strength(score: f64) -> ScoreStrength {
    if score >= 0.8 {
        ScoreStrength::Excellent
    } else if score >= 0.5 {
        ScoreStrength::Good
    } else if score >= 0.3 {
        ScoreStrength::Moderate
    } else if score > 0.0 {
        ScoreStrength::Present
    } else {
        ScoreStrength::Weak
    }
}

/// One score-map entry with its reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReading {
    pub key: String,
    pub value: f64,
    pub strength: ScoreStrength,
    pub display_name: String,
}

/// `d10_kendra_benefics` -> `D10 Kendra Benefics`.
pub fn display_name(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn interpret_scores(scores: &BTreeMap<String, f64>) -> Vec<ScoreReading> {
    scores
        .iter()
        .map(|(key, value)| ScoreReading {
            key: key.clone(),
            value: *value,
            strength: score_strength(*value),
            display_name: display_name(key),
        })
        .collect()
}
