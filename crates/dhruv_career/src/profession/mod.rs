//! Profession probabilities from the D1 10th house, its lord and the
//! grahas around them.
//!
//! Houses are matched through cusp rashis: a graha is "in the 10th" when it
//! shares the 10th cusp's rashi, and the 10th lord's house is the first
//! house whose cusp falls in the lord's rashi.

pub mod tables;

use dhruv_vedic_base::{ALL_GRAHAS, Chart, Graha, Nakshatra, Rashi, nakshatra_from_longitude};
use log::debug;
use serde::Serialize;

use crate::config::ProfessionConfig;

pub use tables::{PROFESSIONS, ProfessionCategory, ProfessionYoga, profession};

/// Houses where the 10th lord adds a little weight.
const GOOD_LORD_HOUSES: [u8; 8] = [1, 2, 4, 5, 7, 9, 10, 11];

const PRIMARY_OCCUPANT: f64 = 30.0;
const SECONDARY_OCCUPANT: f64 = 15.0;
const TENTH_RASHI: f64 = 20.0;
const NAKSHATRA: f64 = 15.0;
const PRIMARY_LORD: f64 = 25.0;
const SECONDARY_LORD: f64 = 15.0;
const LORD_RASHI: f64 = 20.0;
const PRIMARY_CONJUNCT: f64 = 25.0;
const SECONDARY_CONJUNCT: f64 = 15.0;
const LORD_HOUSE: f64 = 10.0;
const MAX_REASONS: usize = 4;

/// What the classifier reads off a D1 chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CareerFacts {
    pub tenth_rashi: Rashi,
    pub tenth_occupants: Vec<Graha>,
    pub cusp_nakshatra: Nakshatra,
    pub lord: Graha,
    pub lord_rashi: Option<Rashi>,
    pub lord_nakshatra: Option<Nakshatra>,
    pub lord_house: Option<u8>,
    /// Grahas sharing the lord's rashi.
    pub with_lord: Vec<Graha>,
}

impl CareerFacts {
    pub fn of(d1: &Chart) -> Self {
        let cusps = d1.cusps();
        let tenth_rashi = d1.cusp_rashi(10);
        let lord = tenth_rashi.lord();
        let lord_rashi = d1.rashi_of(lord);
        let in_rashi = |r: Rashi| -> Vec<Graha> {
            ALL_GRAHAS
                .into_iter()
                .filter(|g| d1.rashi_of(*g) == Some(r))
                .collect()
        };
        Self {
            tenth_rashi,
            tenth_occupants: in_rashi(tenth_rashi),
            cusp_nakshatra: nakshatra_from_longitude(cusps[9]).nakshatra,
            lord,
            lord_rashi,
            lord_nakshatra: d1
                .longitude(lord)
                .map(|lon| nakshatra_from_longitude(lon).nakshatra),
            lord_house: lord_rashi
                .and_then(|r| (1..=12).find(|h| d1.cusp_rashi(*h) == r)),
            with_lord: lord_rashi
                .map(|r| in_rashi(r).into_iter().filter(|g| *g != lord).collect())
                .unwrap_or_default(),
        }
    }
}

/// One category's probability with the reasons behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessionScore {
    pub name: &'static str,
    pub description: &'static str,
    /// Percent, capped at 100.
    pub probability: f64,
    pub reasons: Vec<String>,
}

/// "1st", "2nd", "11th".
pub fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn signed(bonus: f64) -> String {
    if bonus < 0.0 {
        format!("({bonus:.0}%)")
    } else {
        format!("(+{bonus:.0}%)")
    }
}

/// Yogas formed in the 10th first, then with the 10th lord and its
/// companions.
fn detect_yogas(category: &ProfessionCategory, facts: &CareerFacts) -> Vec<(String, f64)> {
    let mut found: Vec<(String, f64)> = Vec::new();
    let mut names: Vec<&str> = Vec::new();
    for y in category.yogas {
        if y.grahas.iter().all(|g| facts.tenth_occupants.contains(g)) {
            found.push((y.name.to_string(), y.bonus));
            names.push(y.name);
        }
    }
    if facts.lord_rashi.is_none() || facts.with_lord.is_empty() {
        return found;
    }
    let near_lord = |g: &Graha| *g == facts.lord || facts.with_lord.contains(g);
    for y in category.yogas {
        if y.grahas.iter().all(near_lord) && !names.contains(&y.name) {
            found.push((format!("{} (10th lord)", y.name), y.bonus));
        }
    }
    found
}

/// Probability of one category.
pub fn score_profession(category: &ProfessionCategory, facts: &CareerFacts) -> ProfessionScore {
    let mut score = 0.0;
    let mut reasons = Vec::new();
    let mut add = |points: f64, reason: String| {
        score += points;
        reasons.push(format!("{reason} {}", signed(points)));
    };

    for (name, bonus) in detect_yogas(category, facts) {
        add(bonus, name);
    }
    for g in &facts.tenth_occupants {
        if category.primary.contains(g) {
            add(PRIMARY_OCCUPANT, format!("{g} in 10th (primary)"));
        } else if category.secondary.contains(g) {
            add(SECONDARY_OCCUPANT, format!("{g} in 10th (secondary)"));
        }
    }
    if category.rashis.contains(&facts.tenth_rashi) {
        add(TENTH_RASHI, format!("10th in {}", facts.tenth_rashi));
    }
    let nakshatra = [facts.lord_nakshatra, Some(facts.cusp_nakshatra)]
        .into_iter()
        .flatten()
        .find(|n| category.nakshatras.contains(n));
    if let Some(n) = nakshatra {
        add(NAKSHATRA, format!("Nakshatra {n}"));
    }
    let lord = facts.lord;
    if category.primary.contains(&lord) {
        add(PRIMARY_LORD, format!("{lord} as 10th lord"));
    } else if category.secondary.contains(&lord) {
        add(SECONDARY_LORD, format!("{lord} as 10th lord"));
    }
    if let Some(r) = facts.lord_rashi {
        if category.rashis.contains(&r) {
            add(LORD_RASHI, format!("10th lord in {r}"));
        }
    }
    for g in &facts.with_lord {
        if category.primary.contains(g) {
            add(PRIMARY_CONJUNCT, format!("{g} with 10th lord"));
        } else if category.secondary.contains(g) {
            add(SECONDARY_CONJUNCT, format!("{g} with 10th lord"));
        }
    }
    if let Some(h) = facts.lord_house {
        if GOOD_LORD_HOUSES.contains(&h) {
            add(LORD_HOUSE, format!("10th lord in {} house", ordinal(h)));
        }
    }

    reasons.truncate(MAX_REASONS);
    ProfessionScore {
        name: category.name,
        description: category.description,
        probability: score.min(100.0),
        reasons,
    }
}

/// Every category, most probable first. Ties keep table order.
pub fn profession_probabilities(d1: &Chart) -> Vec<ProfessionScore> {
    let facts = CareerFacts::of(d1);
    let mut scores: Vec<ProfessionScore> = PROFESSIONS
        .iter()
        .map(|c| score_profession(c, &facts))
        .collect();
    scores.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    scores
}

/// Label for the best probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfessionStrength {
    Excellent,
    Good,
    Moderate,
    Developing,
}

impl ProfessionStrength {
    pub fn from_probability(p: f64) -> Self {
        if p >= 70.0 {
            Self::Excellent
        } else if p >= 50.0 {
            Self::Good
        } else if p >= 30.0 {
            Self::Moderate
        } else {
            Self::Developing
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessionProbability {
    pub name: &'static str,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessionSummary {
    pub top_professions: Vec<ProfessionScore>,
    pub career_strength: ProfessionStrength,
    pub top_probability: f64,
    pub top_profession_desc: &'static str,
    pub all_professions: Vec<ProfessionProbability>,
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Top categories with trimmed reasons, plus every category's probability.
pub fn profession_summary(d1: &Chart, config: &ProfessionConfig) -> ProfessionSummary {
    let all = profession_probabilities(d1);
    let top_probability = all.first().map_or(0.0, |p| round1(p.probability));
    let top_profession_desc = all.first().map_or("", |p| p.description);
    if let Some(best) = all.first() {
        debug!("top profession {} at {:.1}%", best.name, best.probability);
    }
    let top_professions = all
        .iter()
        .take(config.top_n)
        .map(|p| ProfessionScore {
            probability: round1(p.probability),
            reasons: p
                .reasons
                .iter()
                .take(config.reasons_per_profession)
                .cloned()
                .collect(),
            ..p.clone()
        })
        .collect();
    ProfessionSummary {
        top_professions,
        career_strength: ProfessionStrength::from_probability(
            all.first().map_or(0.0, |p| p.probability),
        ),
        top_probability,
        top_profession_desc,
        all_professions: all
            .iter()
            .map(|p| ProfessionProbability {
                name: p.name,
                probability: round1(p.probability),
            })
            .collect(),
    }
}
