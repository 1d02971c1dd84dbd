//! Rules over the Dasamsa (D10) chart and its links back to D1.

use dhruv_vedic_base::drishti::aspected_houses;
use dhruv_vedic_base::{
    ALL_POINTS, Chart, ChartPoint, Graha, Rashi, SAPTA_GRAHAS, is_benefic, is_exalted,
    is_malefic, is_own_sign, is_strong,
};

use super::{
    CareerRule, KENDRAS, RuleContext, RuleOutcome, UPACHAYAS, join_names, join_tag, or_none,
};

/// D10 houses from which a transposed 10th lord still delivers.
const GOOD_HOUSES: [u8; 7] = [1, 4, 5, 7, 9, 10, 11];

/// House-class bonuses for a lord's D10 placement.
struct HouseBonus {
    kendra: f64,
    trikona: f64,
    wealth: f64,
    upachaya: f64,
    upachaya_label: &'static str,
    neutral_label: &'static str,
}

const LAGNA_LORD_BONUS: HouseBonus = HouseBonus {
    kendra: 0.5,
    trikona: 0.4,
    wealth: 0.2,
    upachaya: 0.1,
    upachaya_label: "Upachaya (growth through effort)",
    neutral_label: "neutral placement",
};

const TENTH_LORD_BONUS: HouseBonus = HouseBonus {
    kendra: 0.6,
    trikona: 0.5,
    wealth: 0.3,
    upachaya: 0.2,
    upachaya_label: "Upachaya (growth)",
    neutral_label: "neutral",
};

fn lord_strength(d10: &Chart, lord: Graha, bonus: &HouseBonus) -> Option<(f64, Vec<String>)> {
    let rashi = d10.rashi_of(lord)?;
    let house = d10.house_of(lord)?;
    let mut score = 0.3;
    let mut details = vec![format!("house {house}")];
    let label = if KENDRAS.contains(&house) {
        score += bonus.kendra;
        "Kendra (strong)"
    } else if house == 5 || house == 9 {
        score += bonus.trikona;
        "Trikona (fortunate)"
    } else if house == 2 || house == 11 {
        score += bonus.wealth;
        "wealth house"
    } else if house == 3 || house == 6 {
        score += bonus.upachaya;
        bonus.upachaya_label
    } else {
        bonus.neutral_label
    };
    details.push(label.to_string());
    if is_own_sign(lord, rashi) {
        score += 0.3;
        details.push("own sign".to_string());
    } else if is_exalted(lord, rashi) {
        score += 0.4;
        details.push("exalted".to_string());
    }
    Some((f64::min(score, 1.0), details))
}

/// A D10 lord with its strength and the reasons behind it.
pub struct LordReading {
    pub rashi: Rashi,
    pub lord: Graha,
    pub score: f64,
    pub details: Vec<String>,
}

/// Strength of the lord of the D10 Lagna rashi.
pub fn d10_lagna_lord(ctx: &RuleContext<'_>) -> Option<LordReading> {
    let rashi = ctx.d10.rashi_of(ChartPoint::Lagna)?;
    let lord = rashi.lord();
    let (score, details) = lord_strength(ctx.d10, lord, &LAGNA_LORD_BONUS)?;
    Some(LordReading {
        rashi,
        lord,
        score,
        details,
    })
}

/// Strength of the lord of the D10 10th cusp rashi.
pub fn d10_tenth_lord(ctx: &RuleContext<'_>) -> Option<LordReading> {
    if !ctx.d10_has_lagna() {
        return None;
    }
    let rashi = ctx.d10.cusp_rashi(10);
    let lord = rashi.lord();
    let (score, details) = lord_strength(ctx.d10, lord, &TENTH_LORD_BONUS)?;
    Some(LordReading {
        rashi,
        lord,
        score,
        details,
    })
}

/// Whether the D1 10th lord is strong in D10 and in a supportive house.
fn transposition(ctx: &RuleContext<'_>) -> Option<(bool, bool)> {
    let lord = ctx.tenth_lord();
    let rashi = ctx.d10.rashi_of(lord)?;
    let house = if ctx.d10_has_lagna() {
        ctx.d10.house_of(lord)
    } else {
        None
    };
    Some((
        is_strong(lord, rashi),
        house.is_some_and(|h| GOOD_HOUSES.contains(&h)),
    ))
}

pub struct D10TenthRashi;

impl CareerRule for D10TenthRashi {
    fn id(&self) -> &'static str {
        "D10_10th_rasi"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        if !ctx.d10_has_lagna() {
            return None;
        }
        let rashi = ctx.d10.cusp_rashi(10);
        Some(
            RuleOutcome::new("D10_10th_rasi", 1.0)
                .factor(format!("D10_10th_rasi_{rashi}"))
                .score("d10_10th_rasi", 1.0)
                .detail(format!("Sign: {rashi}.")),
        )
    }
}

fn kendra_grahas(d10: &Chart, class: fn(Graha) -> bool) -> Vec<Graha> {
    d10.grahas()
        .map(|(g, _)| g)
        .filter(|g| class(*g))
        .filter(|g| d10.house_of(*g).is_some_and(|h| KENDRAS.contains(&h)))
        .collect()
}

pub struct KendraBenefics;

impl CareerRule for KendraBenefics {
    fn id(&self) -> &'static str {
        "D10_Kendra_benefics"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let benefics = kendra_grahas(ctx.d10, is_benefic);
        if benefics.is_empty() {
            return None;
        }
        let score = (0.25 * benefics.len() as f64).min(1.0);
        Some(
            RuleOutcome::new("D10_Kendra_benefics", score)
                .factor(format!("D10_Kendra_benefics_{}", join_tag(&benefics)))
                .score("d10_kendra_benefics", score),
        )
    }
}

pub struct KendraMalefics;

impl CareerRule for KendraMalefics {
    fn id(&self) -> &'static str {
        "D10_Kendra_malefics"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let malefics = kendra_grahas(ctx.d10, is_malefic);
        if malefics.is_empty() {
            return None;
        }
        Some(
            RuleOutcome::new("D10_Kendra_malefics", 0.3)
                .factor(format!("D10_Kendra_malefics_{}", join_tag(&malefics))),
        )
    }
}

pub struct TenthTatwa;

impl CareerRule for TenthTatwa {
    fn id(&self) -> &'static str {
        "D10_sign_nature_10th"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        if !ctx.d10_has_lagna() {
            return None;
        }
        let rashi = ctx.d10.cusp_rashi(10);
        let tatwa = rashi.element().name();
        Some(
            RuleOutcome::new("D10_sign_nature_10th", 0.5)
                .factor(format!("D10_10th_tatwa_{tatwa}"))
                .score("d10_10th_tatwa", 0.5)
                .detail(format!("10th sign: {rashi} ({tatwa}).")),
        )
    }
}

pub struct Vargottama;

impl CareerRule for Vargottama {
    fn id(&self) -> &'static str {
        "Vargottama"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let points: Vec<ChartPoint> = ALL_POINTS
            .into_iter()
            .filter(|p| match (ctx.d1.rashi_of(*p), ctx.d10.rashi_of(*p)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            })
            .collect();
        if points.is_empty() {
            return None;
        }
        let score = (0.2 * points.len() as f64 + 0.3).min(1.0);
        Some(
            RuleOutcome::new("Vargottama", score)
                .factor(format!("Vargottama_{}", join_tag(&points)))
                .score("vargottama", score)
                .detail(format!("Planets: {}.", join_names(&points))),
        )
    }
}

pub struct TenthLordTransposition;

impl CareerRule for TenthLordTransposition {
    fn id(&self) -> &'static str {
        "D10_10th_lord_transposition"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let (strong, good_house) = transposition(ctx)?;
        if !(strong && good_house) {
            return None;
        }
        Some(
            RuleOutcome::new("D10_10th_lord_transposition", 1.0)
                .factor("D10_10th_lord_transposition_strong")
                .score("d10_10th_lord_transposition", 1.0),
        )
    }
}

pub struct TenthLordWeak;

impl CareerRule for TenthLordWeak {
    fn id(&self) -> &'static str {
        "D10_10th_lord_weak"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        ctx.tenth_lord_placement()?;
        let (strong, good_house) = transposition(ctx)?;
        if strong || good_house {
            return None;
        }
        Some(RuleOutcome::new("D10_10th_lord_weak", 0.2).factor("D10_10th_lord_weak"))
    }
}

pub struct RajaYogaStrength;

impl CareerRule for RajaYogaStrength {
    fn id(&self) -> &'static str {
        "raja_yoga_in_D10"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        for yoga in &ctx.d1.meta().yogas {
            let strong: Vec<Graha> = yoga
                .grahas()
                .into_iter()
                .filter(|g| ctx.d10.rashi_of(*g).is_some_and(|r| is_own_sign(*g, r)))
                .collect();
            if strong.is_empty() {
                continue;
            }
            let score = (0.3 + 0.2 * strong.len() as f64).min(1.0);
            return Some(
                RuleOutcome::new("raja_yoga_in_D10", score)
                    .factor(format!("raja_yoga_D10_strength_{}", yoga.name))
                    .score("raja_yoga_d10_strength", score)
                    .detail(format!(
                        "{} planets strong in D10: {}.",
                        yoga.name,
                        join_names(&strong)
                    )),
            );
        }
        None
    }
}

pub struct LagnaStrength;

impl CareerRule for LagnaStrength {
    fn id(&self) -> &'static str {
        "d10_lagna_strength"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let r = d10_lagna_lord(ctx)?;
        Some(
            RuleOutcome::new("d10_lagna_strength", r.score)
                .factor(format!("D10_lagna_lord_{}_{}", r.lord, r.details.join(",")))
                .score("d10_lagna_strength", r.score)
                .detail(format!(
                    "D10 Lagna: {}, Lord: {} ({}).",
                    r.rashi,
                    r.lord,
                    r.details.join(", ")
                )),
        )
    }
}

pub struct TenthLordStrength;

impl CareerRule for TenthLordStrength {
    fn id(&self) -> &'static str {
        "d10_10th_lord_placement"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let r = d10_tenth_lord(ctx)?;
        Some(
            RuleOutcome::new("d10_10th_lord_placement", r.score)
                .factor(format!("D10_10th_lord_{}_{}", r.lord, r.details.join(",")))
                .score("d10_10th_lord_placement", r.score)
                .detail(format!(
                    "D10 10th house: {}, Lord: {} ({}).",
                    r.rashi,
                    r.lord,
                    r.details.join(", ")
                )),
        )
    }
}

pub struct BigThreeLords;

impl CareerRule for BigThreeLords {
    fn id(&self) -> &'static str {
        "big_three_lords"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let mut total = 0.0;
        let mut details = Vec::new();
        if let Some(r) = d10_lagna_lord(ctx) {
            total += 0.33 * r.score;
            details.push(format!("D10 Lagna lord: {:.2}", r.score));
        }
        if let Some(r) = d10_tenth_lord(ctx) {
            total += 0.33 * r.score;
            details.push(format!("D10 10th lord: {:.2}", r.score));
        }
        if let Some((_, score)) = ctx.tenth_lord_placement() {
            total += 0.34 * score;
            details.push(format!("D1 10th lord: {score:.2}"));
        }
        if details.len() < 2 || total <= 0.0 {
            return None;
        }
        Some(
            RuleOutcome::new("big_three_lords", total)
                .factor(format!("big_three_lords_combined_{total:.2}"))
                .score("big_three_lords", total)
                .detail(format!(
                    "Combined score: {total:.2}. Details: {}.",
                    details.join("; ")
                )),
        )
    }
}

pub struct SaturnPlacement;

impl CareerRule for SaturnPlacement {
    fn id(&self) -> &'static str {
        "saturn_in_d10"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let saturn = Graha::Shani;
        let rashi = ctx.d10.rashi_of(saturn)?;
        let house = ctx.d10.house_of(saturn)?;
        let (mut score, first) = if UPACHAYAS.contains(&house) {
            (
                0.8,
                format!("in Upachaya house {house} (favorable for career discipline)"),
            )
        } else if [1, 4, 7].contains(&house) {
            (
                0.4,
                format!("in Kendra house {house} (brings responsibility)"),
            )
        } else {
            (0.3, format!("in house {house}"))
        };
        let mut details = vec![first];
        if is_own_sign(saturn, rashi) {
            score += 0.2;
            details.push("in own sign (disciplined success)".to_string());
        } else if is_exalted(saturn, rashi) {
            score += 0.3;
            details.push("exalted (systematic growth)".to_string());
        }
        let score = f64::min(score, 1.0);
        Some(
            RuleOutcome::new("saturn_in_d10", score)
                .factor(format!("Saturn_in_D10_house_{house}_{rashi}"))
                .score("saturn_in_d10", score)
                .detail(format!("Saturn in D10: {}.", details.join(", "))),
        )
    }
}

/// Occupants of one D10 house.
pub struct HouseOccupants {
    house: u8,
    id: &'static str,
    ordinal: &'static str,
    /// Score by benefic count rather than by all occupants.
    by_benefics: bool,
    base: f64,
    step: f64,
    note: &'static str,
}

impl HouseOccupants {
    pub const SECOND: Self = Self {
        house: 2,
        id: "d10_2nd_house",
        ordinal: "2nd",
        by_benefics: true,
        base: 0.3,
        step: 0.2,
        note: "Good for income and communication.",
    };
    pub const FOURTH: Self = Self {
        house: 4,
        id: "d10_4th_house",
        ordinal: "4th",
        by_benefics: true,
        base: 0.2,
        step: 0.25,
        note: "Comfortable work environment.",
    };
    pub const EIGHTH: Self = Self {
        house: 8,
        id: "d10_8th_house",
        ordinal: "8th",
        by_benefics: false,
        base: 0.2,
        step: 0.2,
        note: "Research, occult, or transformative career.",
    };
    pub const NINTH: Self = Self {
        house: 9,
        id: "d10_9th_house",
        ordinal: "9th",
        by_benefics: true,
        base: 0.4,
        step: 0.3,
        note: "Fortune and higher learning.",
    };
}

impl CareerRule for HouseOccupants {
    fn id(&self) -> &'static str {
        self.id
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        if !ctx.d10_has_lagna() {
            return None;
        }
        let grahas: Vec<Graha> = ctx
            .d10
            .occupants(self.house)
            .into_iter()
            .filter_map(ChartPoint::graha)
            .collect();
        if grahas.is_empty() {
            return None;
        }
        let benefics = grahas.iter().filter(|g| is_benefic(**g)).count();
        let counted = if self.by_benefics {
            benefics
        } else {
            grahas.len()
        };
        let score = (self.step * counted as f64 + self.base).min(1.0);
        let listed = if self.by_benefics {
            format!("{} ({benefics} benefics)", join_names(&grahas))
        } else {
            join_names(&grahas)
        };
        Some(
            RuleOutcome::new(self.id, score)
                .factor(format!("D10_{}_house_{}", self.ordinal, join_tag(&grahas)))
                .score(self.id, score)
                .detail(format!(
                    "Planets in D10 {}: {listed}. {}",
                    self.ordinal, self.note
                )),
        )
    }
}

pub struct StrengthComparison;

impl CareerRule for StrengthComparison {
    fn id(&self) -> &'static str {
        "d1_d10_strength_comparison"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let strong_in = |chart: &Chart, g: Graha| chart.rashi_of(g).is_some_and(|r| is_strong(g, r));
        let mut both = Vec::new();
        let mut d10_only = Vec::new();
        for g in SAPTA_GRAHAS {
            match (strong_in(ctx.d1, g), strong_in(ctx.d10, g)) {
                (true, true) => both.push(g),
                (false, true) => d10_only.push(g),
                _ => {}
            }
        }
        if both.is_empty() && d10_only.is_empty() {
            return None;
        }
        let mut details = Vec::new();
        if !both.is_empty() {
            details.push(format!("Strong in both D1 & D10: {}", join_names(&both)));
        }
        if !d10_only.is_empty() {
            details.push(format!(
                "Strong in D10 only (career talent): {}",
                join_names(&d10_only)
            ));
        }
        let score = (0.3 * both.len() as f64 + 0.2 * d10_only.len() as f64).min(1.0);
        Some(
            RuleOutcome::new("d1_d10_strength_comparison", score)
                .factor("D1_D10_strength_comparison")
                .score("d1_d10_strength_comparison", score)
                .detail(format!("{}.", details.join("; "))),
        )
    }
}

pub struct BeneficRatio;

impl CareerRule for BeneficRatio {
    fn id(&self) -> &'static str {
        "d10_benefic_malefic_ratio"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let mut benefics = Vec::new();
        let mut malefics = Vec::new();
        for (g, _) in ctx.d10.grahas() {
            if is_benefic(g) {
                benefics.push(g);
            } else if is_malefic(g) {
                malefics.push(g);
            }
        }
        let (b, m) = (benefics.len(), malefics.len());
        if b + m == 0 {
            return None;
        }
        let ratio = b as f64 / (b + m) as f64;
        let (score, interp) = if ratio >= 0.6 {
            (0.8, "smooth progress")
        } else if ratio >= 0.4 {
            (0.5, "balanced (effort with support)")
        } else {
            (0.3, "challenging (success through struggle)")
        };
        Some(
            RuleOutcome::new("d10_benefic_malefic_ratio", score)
                .factor(format!("D10_benefic_malefic_ratio_{b}:{m}"))
                .score("d10_benefic_malefic_ratio", score)
                .detail(format!(
                    "Benefics: {b} ({}), Malefics: {m} ({}). Career path: {interp}.",
                    or_none(join_names(&benefics)),
                    or_none(join_names(&malefics))
                )),
        )
    }
}

pub struct ExaltedInBoth;

impl CareerRule for ExaltedInBoth {
    fn id(&self) -> &'static str {
        "exalted_in_both_d1_d10"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let exalted_in = |chart: &Chart, g: Graha| chart.rashi_of(g).filter(|r| is_exalted(g, *r));
        let found: Vec<(Graha, Rashi)> = SAPTA_GRAHAS
            .into_iter()
            .filter_map(|g| match (exalted_in(ctx.d1, g), exalted_in(ctx.d10, g)) {
                (Some(r), Some(_)) => Some((g, r)),
                _ => None,
            })
            .collect();
        if found.is_empty() {
            return None;
        }
        let grahas: Vec<Graha> = found.iter().map(|(g, _)| *g).collect();
        let described: Vec<String> = found
            .iter()
            .map(|(g, r)| format!("{g} (exalted in {r})"))
            .collect();
        let score = (0.5 * found.len() as f64).min(1.5);
        Some(
            RuleOutcome::new("exalted_in_both_d1_d10", score)
                .factor(format!("exalted_in_both_{}", join_tag(&grahas)))
                .score("exalted_in_both_d1_d10", score)
                .detail(format!(
                    "Planets: {}. Exceptional, consistent talent in career.",
                    described.join(", ")
                )),
        )
    }
}

/// Drishti of Jupiter or Saturn inside D10.
pub struct AspectsInD10 {
    graha: Graha,
    id: &'static str,
    note: &'static str,
}

impl AspectsInD10 {
    pub const JUPITER: Self = Self {
        graha: Graha::Guru,
        id: "jupiter_aspects_d10",
        note: "Brings wisdom and opportunities.",
    };
    pub const SATURN: Self = Self {
        graha: Graha::Shani,
        id: "saturn_aspects_d10",
        note: "Brings discipline and structure.",
    };
}

impl CareerRule for AspectsInD10 {
    fn id(&self) -> &'static str {
        self.id
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let d10 = ctx.d10;
        let from = d10.house_of(self.graha)?;
        let houses = aspected_houses(self.graha, from);
        let aspected: Vec<Graha> = d10
            .grahas()
            .map(|(g, _)| g)
            .filter(|g| *g != self.graha)
            .filter(|g| d10.house_of(*g).is_some_and(|h| houses.contains(&h)))
            .collect();
        let score = match self.graha {
            Graha::Guru => {
                let benefics = aspected.iter().filter(|g| is_benefic(**g)).count();
                let kendras = houses.iter().filter(|h| KENDRAS.contains(*h)).count();
                0.4 + 0.1 * benefics as f64 + 0.15 * kendras as f64
            }
            _ => {
                let upachayas = houses.iter().filter(|h| UPACHAYAS.contains(*h)).count();
                0.4 + 0.15 * upachayas as f64
            }
        };
        let score = score.min(1.0);
        let name = self.graha.english_name();
        Some(
            RuleOutcome::new(self.id, score)
                .factor(format!("{name}_aspects_D10_houses_{}", join_tag(&houses)))
                .score(self.id, score)
                .detail(format!(
                    "{name} in house {from} aspects houses {}. Aspected planets: {}. {}",
                    join_names(&houses),
                    or_none(join_names(&aspected)),
                    self.note
                )),
        )
    }
}

/// Planets whose retrograde motion shows in D10.
const RETROGRADE_CANDIDATES: [Graha; 5] = [
    Graha::Buddh,
    Graha::Shukra,
    Graha::Mangal,
    Graha::Guru,
    Graha::Shani,
];

pub struct RetrogradeInD10;

impl CareerRule for RetrogradeInD10 {
    fn id(&self) -> &'static str {
        "retrograde_planets_d10"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let found: Vec<(Graha, u8)> = RETROGRADE_CANDIDATES
            .into_iter()
            .filter(|g| ctx.d10.is_retrograde(*g))
            .filter_map(|g| ctx.d10.house_of(g).map(|h| (g, h)))
            .collect();
        if found.is_empty() {
            return None;
        }
        let grahas: Vec<Graha> = found.iter().map(|(g, _)| *g).collect();
        let described: Vec<String> = found
            .iter()
            .map(|(g, h)| format!("{g} in house {h}"))
            .collect();
        let score = (0.3 * found.len() as f64 + 0.2).min(1.0);
        Some(
            RuleOutcome::new("retrograde_planets_d10", score)
                .factor(format!("retrograde_in_D10_{}", join_tag(&grahas)))
                .score("retrograde_planets_d10", score)
                .detail(format!(
                    "Retrograde planets: {}. Indicates unconventional career approach or unique specialized skills.",
                    described.join(", ")
                )),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::mesha_chart;
    use dhruv_vedic_base::{ChartKind, ChartMeta, YogaInput, equal_cusps};

    const EPS: f64 = 1e-9;

    fn d10_chart(asc: f64, placements: &[(Graha, f64, bool)]) -> Chart {
        let mut b = Chart::builder(ChartKind::Dasamsa)
            .ascendant(asc)
            .cusps(equal_cusps(asc));
        for (g, lon, retro) in placements {
            b = b.graha(*g, *lon, *retro);
        }
        b.build().unwrap()
    }

    /// Mesha D10 Lagna: Mars and Venus in the 10th, Saturn in the 3rd,
    /// Jupiter in the 4th, retrograde Mercury in the 8th.
    fn sample_d10() -> Chart {
        d10_chart(
            0.0,
            &[
                (Graha::Mangal, 280.0, false),
                (Graha::Shani, 70.0, false),
                (Graha::Guru, 100.0, false),
                (Graha::Shukra, 280.5, false),
                (Graha::Buddh, 215.0, true),
            ],
        )
    }

    #[test]
    fn kendra_benefics_and_malefics() {
        let d1 = mesha_chart(&[]);
        let d10 = sample_d10();
        let ctx = RuleContext::new(&d1, &d1, &d10);
        let b = KendraBenefics.evaluate(&ctx).unwrap();
        assert_eq!(b.factors[0], "D10_Kendra_benefics_Jupiter,Venus");
        assert!((b.record.score - 0.5).abs() < EPS);
        let m = KendraMalefics.evaluate(&ctx).unwrap();
        assert_eq!(m.factors[0], "D10_Kendra_malefics_Mars");
        assert!(m.scores.is_empty());
    }

    #[test]
    fn tenth_sign_and_tatwa() {
        let d1 = mesha_chart(&[]);
        let d10 = sample_d10();
        let ctx = RuleContext::new(&d1, &d1, &d10);
        let r = D10TenthRashi.evaluate(&ctx).unwrap();
        assert_eq!(r.factors[0], "D10_10th_rasi_Makara");
        let t = TenthTatwa.evaluate(&ctx).unwrap();
        assert_eq!(t.record.rule_id, "D10_sign_nature_10th");
        assert_eq!(t.factors[0], "D10_10th_tatwa_earth");
    }

    #[test]
    fn lord_strengths() {
        let d1 = mesha_chart(&[(Graha::Shani, 280.0, false)]);
        let d10 = sample_d10();
        let ctx = RuleContext::new(&d1, &d1, &d10);

        // Mars rules the Mesha Lagna and sits exalted in the 10th
        let lagna = LagnaStrength.evaluate(&ctx).unwrap();
        assert!((lagna.record.score - 1.0).abs() < EPS);
        assert_eq!(lagna.factors[0], "D10_lagna_lord_Mars_house 10,Kendra (strong),exalted");

        // Saturn rules Makara and sits in Mithuna, the 3rd
        let tenth = TenthLordStrength.evaluate(&ctx).unwrap();
        assert!((tenth.record.score - 0.5).abs() < EPS);
        assert!(tenth.record.explanation.ends_with("(house 3, Upachaya (growth))."));

        let big = BigThreeLords.evaluate(&ctx).unwrap();
        assert!((big.record.score - (0.33 + 0.33 * 0.5 + 0.34)).abs() < EPS);
    }

    #[test]
    fn transposed_lord() {
        let d1 = mesha_chart(&[(Graha::Shani, 280.0, false)]);
        let weak_d10 = sample_d10();
        let ctx = RuleContext::new(&d1, &d1, &weak_d10);
        assert!(TenthLordTransposition.evaluate(&ctx).is_none());
        let weak = TenthLordWeak.evaluate(&ctx).unwrap();
        assert!((weak.record.score - 0.2).abs() < EPS);

        let strong_d10 = d10_chart(0.0, &[(Graha::Shani, 190.0, false)]);
        let ctx = RuleContext::new(&d1, &d1, &strong_d10);
        let t = TenthLordTransposition.evaluate(&ctx).unwrap();
        assert_eq!(t.scores, vec![("d10_10th_lord_transposition", 1.0)]);
        assert!(TenthLordWeak.evaluate(&ctx).is_none());
    }

    #[test]
    fn saturn_and_aspects() {
        let d1 = mesha_chart(&[]);
        let d10 = sample_d10();
        let ctx = RuleContext::new(&d1, &d1, &d10);

        let s = SaturnPlacement.evaluate(&ctx).unwrap();
        assert_eq!(s.factors[0], "Saturn_in_D10_house_3_Mithuna");
        assert!((s.record.score - 0.8).abs() < EPS);

        // Jupiter in the 4th aspects 8, 10 and 12
        let j = AspectsInD10::JUPITER.evaluate(&ctx).unwrap();
        assert_eq!(j.factors[0], "Jupiter_aspects_D10_houses_8,10,12");
        assert!((j.record.score - 0.75).abs() < EPS);
        assert!(j.record.explanation.contains("Aspected planets: Mars, Mercury, Venus."));

        // Saturn in the 3rd aspects 5, 9 and 12: no upachaya
        let sa = AspectsInD10::SATURN.evaluate(&ctx).unwrap();
        assert!((sa.record.score - 0.4).abs() < EPS);
        assert!(sa.record.explanation.contains("Aspected planets: None."));
    }

    #[test]
    fn occupants_ratio_and_retrogrades() {
        let d1 = mesha_chart(&[]);
        let d10 = sample_d10();
        let ctx = RuleContext::new(&d1, &d1, &d10);

        assert!(HouseOccupants::SECOND.evaluate(&ctx).is_none());
        let eighth = HouseOccupants::EIGHTH.evaluate(&ctx).unwrap();
        assert!((eighth.record.score - 0.4).abs() < EPS);
        assert!(eighth.record.explanation.contains("Planets in D10 8th: Mercury. Research"));

        let ratio = BeneficRatio.evaluate(&ctx).unwrap();
        assert_eq!(ratio.factors[0], "D10_benefic_malefic_ratio_3:2");
        assert!((ratio.record.score - 0.8).abs() < EPS);

        let retro = RetrogradeInD10.evaluate(&ctx).unwrap();
        assert_eq!(retro.factors[0], "retrograde_in_D10_Mercury");
        assert!((retro.record.score - 0.5).abs() < EPS);
    }

    #[test]
    fn vargottama_and_exaltation() {
        // Sun at 1 deg Mesha stays in Mesha in D10
        let d1 = mesha_chart(&[(Graha::Surya, 1.0, false)]);
        let (_, d10) = crate::rules::fixtures::derived(&d1);
        let ctx = RuleContext::new(&d1, &d1, &d10);
        let v = Vargottama.evaluate(&ctx).unwrap();
        assert_eq!(v.factors[0], "Vargottama_Sun");
        assert!((v.record.score - 0.5).abs() < EPS);
        let e = ExaltedInBoth.evaluate(&ctx).unwrap();
        assert!((e.record.score - 0.5).abs() < EPS);
        assert!(e.record.explanation.contains("Sun (exalted in Mesha)"));
        let c = StrengthComparison.evaluate(&ctx).unwrap();
        assert!((c.record.score - 0.3).abs() < EPS);
    }

    #[test]
    fn raja_yoga_needs_metadata() {
        let meta = ChartMeta {
            yogas: vec![YogaInput {
                name: "Gaja Kesari".into(),
                planets: vec!["Jupiter".into(), "Moon".into()],
            }],
            ..ChartMeta::default()
        };
        let d1 = Chart::builder(ChartKind::Rasi)
            .ascendant(5.0)
            .graha(Graha::Guru, 100.0, false)
            .graha(Graha::Chandra, 40.0, false)
            .meta(meta)
            .build()
            .unwrap();
        let d10 = d10_chart(0.0, &[(Graha::Guru, 250.0, false), (Graha::Chandra, 10.0, false)]);
        let ctx = RuleContext::new(&d1, &d1, &d10);
        let o = RajaYogaStrength.evaluate(&ctx).unwrap();
        assert_eq!(o.factors[0], "raja_yoga_D10_strength_Gaja Kesari");
        assert!((o.record.score - 0.5).abs() < EPS);

        let bare = mesha_chart(&[]);
        let ctx = RuleContext::new(&bare, &bare, &d10);
        assert!(RajaYogaStrength.evaluate(&ctx).is_none());
    }
}
