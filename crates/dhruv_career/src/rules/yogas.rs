//! Special yogas touching the 10th house. Houses here are whole-sign from
//! the D1 Lagna.

use dhruv_vedic_base::dignity::is_pushkara;
use dhruv_vedic_base::{
    Chart, ChartPoint, Graha, Rashi, SAPTA_GRAHAS, exaltation_rashi, is_combust_in,
    is_debilitated, is_exalted, is_own_sign, yogakaraka,
};

use super::{CareerRule, KENDRAS, RuleContext, RuleOutcome, join_names};

const TRIKONAS: [u8; 3] = [1, 5, 9];
const DUSTHANAS: [u8; 3] = [6, 8, 12];

fn in_tenth(chart: &Chart, graha: Graha) -> bool {
    chart.whole_sign_house(graha) == Some(10)
}

/// Flavour of a sign exchange, by the houses involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParivartanaKind {
    /// Both in kendras, or both in trikonas.
    Maha,
    Simple,
    /// Both in dusthanas.
    Khala,
    /// One in a dusthana.
    Dainya,
}

impl ParivartanaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Maha => "Maha",
            Self::Simple => "Simple",
            Self::Khala => "Khala",
            Self::Dainya => "Dainya",
        }
    }

    pub const fn score(self) -> f64 {
        match self {
            Self::Maha => 1.2,
            Self::Simple => 0.8,
            Self::Khala => 0.3,
            Self::Dainya => 0.2,
        }
    }
}

/// Exchange between two grahas, each in a rashi ruled by the other.
pub fn parivartana(chart: &Chart, a: Graha, b: Graha) -> Option<ParivartanaKind> {
    if a == b {
        return None;
    }
    let (ra, rb) = (chart.rashi_of(a)?, chart.rashi_of(b)?);
    if ra.lord() != b || rb.lord() != a {
        return None;
    }
    let (ha, hb) = (chart.whole_sign_house(a)?, chart.whole_sign_house(b)?);
    let both = |set: &[u8]| set.contains(&ha) && set.contains(&hb);
    let kind = if both(&KENDRAS) || both(&TRIKONAS) {
        ParivartanaKind::Maha
    } else if both(&DUSTHANAS) {
        ParivartanaKind::Khala
    } else if DUSTHANAS.contains(&ha) || DUSTHANAS.contains(&hb) {
        ParivartanaKind::Dainya
    } else {
        ParivartanaKind::Simple
    };
    Some(kind)
}

pub struct YogakarakaInTenth;

impl CareerRule for YogakarakaInTenth {
    fn id(&self) -> &'static str {
        "yogakaraka_in_10th"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let lagna = ctx.d1.rashi_of(ChartPoint::Lagna)?;
        let yk = yogakaraka(lagna)?;
        if !in_tenth(ctx.d1, yk) {
            return None;
        }
        let rashi = ctx.d1.rashi_of(yk)?;
        let score = if is_exalted(yk, rashi) {
            1.5
        } else if is_own_sign(yk, rashi) {
            1.3
        } else {
            1.0
        };
        Some(
            RuleOutcome::new("yogakaraka_in_10th", score)
                .factor(format!("yogakaraka_in_10th_{yk}"))
                .score("yogakaraka_in_10th", score)
                .detail(format!("Planet: {yk}.")),
        )
    }
}

pub struct ParivartanaWithTenthLord;

impl CareerRule for ParivartanaWithTenthLord {
    fn id(&self) -> &'static str {
        "parivartana_yoga_10th"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let lord = ctx.tenth_lord();
        let (other, kind) = SAPTA_GRAHAS
            .into_iter()
            .find_map(|g| parivartana(ctx.d1, lord, g).map(|k| (g, k)))?;
        let name = kind.name();
        Some(
            RuleOutcome::new("parivartana_yoga_10th", kind.score())
                .factor(format!("parivartana_yoga_{lord}_{other}_{name}"))
                .score("parivartana_yoga_10th", kind.score())
                .detail(format!("{name} Parivartana between {lord} and {other}.")),
        )
    }
}

pub struct Neechabhanga;

impl CareerRule for Neechabhanga {
    fn id(&self) -> &'static str {
        "neechabhanga_10th"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let d1 = ctx.d1;
        let in_kendra = |g: Graha| {
            d1.whole_sign_house(g)
                .is_some_and(|h| KENDRAS.contains(&h))
        };
        for g in SAPTA_GRAHAS {
            if !in_tenth(d1, g) {
                continue;
            }
            let Some(rashi) = d1.rashi_of(g) else {
                continue;
            };
            if !is_debilitated(g, rashi) {
                continue;
            }
            let exalted_here = SAPTA_GRAHAS
                .into_iter()
                .find(|x| exaltation_rashi(*x) == Some(rashi));
            if in_kendra(rashi.lord()) || exalted_here.is_some_and(in_kendra) {
                return Some(
                    RuleOutcome::new("neechabhanga_10th", 0.9)
                        .factor(format!("neechabhanga_10th_{g}"))
                        .score("neechabhanga_10th", 0.9)
                        .detail(format!("Planet: {g} (debilitation cancelled).")),
                );
            }
        }
        None
    }
}

pub struct SunInTenth;

impl CareerRule for SunInTenth {
    fn id(&self) -> &'static str {
        "sun_in_10th"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        if !in_tenth(ctx.d1, Graha::Surya) {
            return None;
        }
        let rashi = ctx.d1.rashi_of(Graha::Surya)?;
        let score = match rashi {
            Rashi::Mesha => 1.2,
            Rashi::Simha => 1.0,
            Rashi::Tula => 0.3,
            _ => 0.8,
        };
        Some(
            RuleOutcome::new("sun_in_10th", score)
                .factor("sun_in_10th")
                .score("sun_in_10th", score)
                .detail(format!("Sign: {rashi}.")),
        )
    }
}

pub struct DharmaKarma;

impl CareerRule for DharmaKarma {
    fn id(&self) -> &'static str {
        "dharma_karma_yoga"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let d1 = ctx.d1;
        let ninth_lord = Rashi::of_longitude(d1.ascendant()? + 240.0).lord();
        let tenth_lord = ctx.tenth_lord();
        if ninth_lord == tenth_lord {
            return None;
        }
        let (kind, score) = if parivartana(d1, tenth_lord, ninth_lord).is_some() {
            ("Exchange (Parivartana)", 1.3)
        } else {
            let h9 = d1.whole_sign_house(ninth_lord)?;
            let h10 = d1.whole_sign_house(tenth_lord)?;
            if h9 != h10 {
                return None;
            }
            ("Conjunction", 1.1)
        };
        Some(
            RuleOutcome::new("dharma_karma_yoga", score)
                .factor(format!("dharma_karma_yoga_{kind}"))
                .score("dharma_karma_yoga", score)
                .detail(format!("Type: {kind}.")),
        )
    }
}

pub struct ExaltedInTenth;

impl CareerRule for ExaltedInTenth {
    fn id(&self) -> &'static str {
        "exalted_in_10th"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let d1 = ctx.d1;
        let mut found = Vec::new();
        let mut best: f64 = 0.0;
        for g in SAPTA_GRAHAS {
            if !in_tenth(d1, g) {
                continue;
            }
            let Some(pos) = d1.position(g) else {
                continue;
            };
            if !is_exalted(g, pos.rashi()) {
                continue;
            }
            let score = if is_pushkara(pos.longitude) { 1.5 } else { 1.2 };
            best = best.max(score);
            found.push(g);
        }
        if found.is_empty() {
            return None;
        }
        let mut outcome = RuleOutcome::new("exalted_in_10th", best);
        for g in &found {
            outcome = outcome.factor(format!("exalted_in_10th_{g}"));
        }
        Some(
            outcome
                .score("exalted_in_10th", best)
                .detail(format!("Planets: {}.", join_names(&found))),
        )
    }
}

pub struct NodesInTenth;

impl CareerRule for NodesInTenth {
    fn id(&self) -> &'static str {
        "rahu_ketu_in_10th"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let (node, interp, score) = if in_tenth(ctx.d1, Graha::Rahu) {
            (Graha::Rahu, "Foreign/unconventional career", 0.8)
        } else if in_tenth(ctx.d1, Graha::Ketu) {
            (Graha::Ketu, "Spiritual/research career", 0.6)
        } else {
            return None;
        };
        Some(
            RuleOutcome::new("rahu_ketu_in_10th", score)
                .factor(format!("{}_in_10th", node.english_name().to_lowercase()))
                .score("rahu_ketu_in_10th", score)
                .detail(format!("{node} indicates {interp}.")),
        )
    }
}

pub struct CombustInTenth;

impl CareerRule for CombustInTenth {
    fn id(&self) -> &'static str {
        "combust_in_10th"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let combust: Vec<Graha> = SAPTA_GRAHAS
            .into_iter()
            .filter(|g| *g != Graha::Surya)
            .filter(|g| in_tenth(ctx.d1, *g) && is_combust_in(ctx.d1, *g))
            .collect();
        if combust.is_empty() {
            return None;
        }
        let mut outcome = RuleOutcome::new("combust_in_10th", 0.3);
        for g in &combust {
            outcome = outcome.factor(format!("combust_in_10th_{g}"));
        }
        Some(
            outcome
                .score("combust_in_10th", 0.3)
                .detail(format!("Planets: {}.", join_names(&combust))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::mesha_chart;
    use dhruv_vedic_base::ChartKind;

    const EPS: f64 = 1e-9;

    #[test]
    fn yogakaraka_mars_for_karka() {
        let c = Chart::builder(ChartKind::Rasi)
            .ascendant(95.0)
            .graha(Graha::Mangal, 10.0, false)
            .build()
            .unwrap();
        let ctx = RuleContext::new(&c, &c, &c);
        let o = YogakarakaInTenth.evaluate(&ctx).unwrap();
        assert_eq!(o.factors[0], "yogakaraka_in_10th_Mars");
        assert!((o.record.score - 1.3).abs() < EPS);
    }

    #[test]
    fn exchange_kinds() {
        // Saturn in Mesha (1st), Mars in Makara (10th): both kendras
        let c = mesha_chart(&[(Graha::Shani, 10.0, false), (Graha::Mangal, 280.0, false)]);
        assert_eq!(parivartana(&c, Graha::Shani, Graha::Mangal), Some(ParivartanaKind::Maha));
        let ctx = RuleContext::new(&c, &c, &c);
        let o = ParivartanaWithTenthLord.evaluate(&ctx).unwrap();
        assert_eq!(o.factors[0], "parivartana_yoga_Saturn_Mars_Maha");

        // Mercury in Vrischika (8th), Mars in Kanya (6th): Khala
        let c = mesha_chart(&[(Graha::Buddh, 220.0, false), (Graha::Mangal, 160.0, false)]);
        assert_eq!(parivartana(&c, Graha::Buddh, Graha::Mangal), Some(ParivartanaKind::Khala));
        assert_eq!(parivartana(&c, Graha::Buddh, Graha::Buddh), None);
    }

    #[test]
    fn dharma_karma_links() {
        // Mesha Lagna: Jupiter rules the 9th, Saturn the 10th
        let joined = mesha_chart(&[(Graha::Guru, 280.0, false), (Graha::Shani, 285.0, false)]);
        let ctx = RuleContext::new(&joined, &joined, &joined);
        let o = DharmaKarma.evaluate(&ctx).unwrap();
        assert_eq!(o.factors[0], "dharma_karma_yoga_Conjunction");
        assert!((o.record.score - 1.1).abs() < EPS);

        let swapped = mesha_chart(&[(Graha::Guru, 280.0, false), (Graha::Shani, 250.0, false)]);
        let ctx = RuleContext::new(&swapped, &swapped, &swapped);
        let o = DharmaKarma.evaluate(&ctx).unwrap();
        assert_eq!(o.factors[0], "dharma_karma_yoga_Exchange (Parivartana)");
    }

    #[test]
    fn debilitation_cancelled() {
        // Jupiter debilitated in Makara; Saturn, its sign lord, in Karka
        let c = mesha_chart(&[(Graha::Guru, 280.0, false), (Graha::Shani, 100.0, false)]);
        let ctx = RuleContext::new(&c, &c, &c);
        let o = Neechabhanga.evaluate(&ctx).unwrap();
        assert_eq!(o.factors[0], "neechabhanga_10th_Jupiter");

        let c = mesha_chart(&[(Graha::Guru, 280.0, false), (Graha::Shani, 40.0, false)]);
        let ctx = RuleContext::new(&c, &c, &c);
        assert!(Neechabhanga.evaluate(&ctx).is_none());
    }

    #[test]
    fn sun_exaltation_nodes_and_combustion() {
        let c = mesha_chart(&[
            (Graha::Surya, 278.0, false),
            (Graha::Buddh, 283.0, false),
            (Graha::Mangal, 292.0, false),
        ]);
        let ctx = RuleContext::new(&c, &c, &c);
        let sun = SunInTenth.evaluate(&ctx).unwrap();
        assert!((sun.record.score - 0.8).abs() < EPS);

        // Mars exalted at 22 deg Makara sits in the Pushkara degrees
        let ex = ExaltedInTenth.evaluate(&ctx).unwrap();
        assert_eq!(ex.factors, vec!["exalted_in_10th_Mars".to_string()]);
        assert!((ex.record.score - 1.5).abs() < EPS);

        let burnt = CombustInTenth.evaluate(&ctx).unwrap();
        assert_eq!(
            burnt.factors,
            vec!["combust_in_10th_Mars".to_string(), "combust_in_10th_Mercury".to_string()]
        );

        assert!(NodesInTenth.evaluate(&ctx).is_none());
        let c = Chart::builder(ChartKind::Rasi)
            .ascendant(5.0)
            .nodes(100.0)
            .build()
            .unwrap();
        let ctx = RuleContext::new(&c, &c, &c);
        let o = NodesInTenth.evaluate(&ctx).unwrap();
        assert_eq!(o.factors[0], "ketu_in_10th");
        assert!((o.record.score - 0.6).abs() < EPS);
    }
}
