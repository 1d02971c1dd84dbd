//! Dasha timing and Ashtakavarga rules.

use dhruv_vedic_base::{ChartPoint, Graha};

use super::{CareerRule, RuleContext, RuleOutcome};

pub struct DasaLordIsTenthLord;

impl CareerRule for DasaLordIsTenthLord {
    fn id(&self) -> &'static str {
        "current_dasa_lord_is_10th_lord"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let dasha = ctx.dasha?;
        if dasha.current_dasa != ctx.tenth_lord() {
            return None;
        }
        Some(
            RuleOutcome::new("current_dasa_lord_is_10th_lord", 1.0)
                .factor("current_dasa_lord_is_10th_lord")
                .score("dasha_10th_link", 1.0),
        )
    }
}

pub struct BhuktiLordIsTenthLord;

impl CareerRule for BhuktiLordIsTenthLord {
    fn id(&self) -> &'static str {
        "current_bhukti_lord_is_10th_lord"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let dasha = ctx.dasha?;
        if dasha.current_bhukti != Some(ctx.tenth_lord()) {
            return None;
        }
        Some(
            RuleOutcome::new("current_bhukti_lord_is_10th_lord", 1.0)
                .factor("current_bhukti_lord_is_10th_lord")
                .score("bhukti_10th_link", 1.0),
        )
    }
}

pub struct SavTenth;

impl CareerRule for SavTenth {
    fn id(&self) -> &'static str {
        "SAV_10th_house_bindus"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let grid = ctx.ashtakavarga?;
        let bindus = grid.sav_tenth();
        let score = grid.sav_tenth_strength().score();
        Some(
            RuleOutcome::new("SAV_10th_house_bindus", score)
                .factor(format!("SAV_10th_house_bindus_{bindus}"))
                .score("sav_10th", score)
                .detail(format!("This chart: {bindus} bindus.")),
        )
    }
}

pub struct DashaCareerTiming;

impl CareerRule for DashaCareerTiming {
    fn id(&self) -> &'static str {
        "dasha_career_timing"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let dasha = ctx.dasha?;
        let in_tenth: Vec<Graha> = ctx
            .tenth_occupants()
            .into_iter()
            .filter_map(ChartPoint::graha)
            .collect();
        let dasa = dasha.current_dasa;

        let mut score = 0.0;
        let mut details = Vec::new();
        if in_tenth.contains(&dasa) {
            score += 0.5;
            details.push(format!("{dasa} Dasha (in 10th house)"));
        }
        if let Some(b) = dasha.current_bhukti {
            if in_tenth.contains(&b) {
                score += 0.3;
                details.push(format!("{b} Bhukti (in 10th house)"));
            }
        }
        if dasa == ctx.tenth_lord() {
            score += 0.4;
            details.push(format!("{dasa} is 10th lord"));
        }
        if details.is_empty() {
            return None;
        }

        let bhukti = dasha
            .current_bhukti
            .map_or_else(|| "Unknown".to_string(), |b| b.to_string());
        let score = f64::min(score, 1.0);
        Some(
            RuleOutcome::new("dasha_career_timing", score)
                .factor(format!("dasha_career_timing_{dasa}_{bhukti}"))
                .score("dasha_career_timing", score)
                .detail(format!(
                    "Current period: {dasa}/{bhukti}. {}. Favorable time for career moves.",
                    details.join("; ")
                )),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::mesha_chart;
    use chrono::NaiveDate;
    use dhruv_vedic_base::{CurrentDasha, ashtakavarga};

    const EPS: f64 = 1e-9;

    fn running(dasa: Graha, bhukti: Option<Graha>) -> CurrentDasha {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        CurrentDasha {
            current_dasa: dasa,
            current_bhukti: bhukti,
            start_date: start,
            end_date: start + chrono::Duration::days(3650),
            remaining_years: 5.0,
            age: 40.0,
        }
    }

    #[test]
    fn dasha_links_need_a_dasha() {
        let c = mesha_chart(&[(Graha::Shani, 280.0, false)]);
        let ctx = RuleContext::new(&c, &c, &c);
        assert!(DasaLordIsTenthLord.evaluate(&ctx).is_none());
        assert!(DashaCareerTiming.evaluate(&ctx).is_none());
    }

    #[test]
    fn tenth_lord_periods() {
        let c = mesha_chart(&[(Graha::Shani, 280.0, false)]);
        let d = running(Graha::Shani, Some(Graha::Shani));
        let ctx = RuleContext::new(&c, &c, &c).with_dasha(Some(&d));
        assert_eq!(
            DasaLordIsTenthLord.evaluate(&ctx).unwrap().scores,
            vec![("dasha_10th_link", 1.0)]
        );
        assert_eq!(
            BhuktiLordIsTenthLord.evaluate(&ctx).unwrap().scores,
            vec![("bhukti_10th_link", 1.0)]
        );
        // Saturn runs both periods from the 10th and rules it: capped at 1
        let t = DashaCareerTiming.evaluate(&ctx).unwrap();
        assert_eq!(t.factors[0], "dasha_career_timing_Saturn_Saturn");
        assert!((t.record.score - 1.0).abs() < EPS);
    }

    #[test]
    fn other_periods() {
        let c = mesha_chart(&[(Graha::Shani, 280.0, false), (Graha::Guru, 285.0, false)]);
        let d = running(Graha::Shukra, Some(Graha::Guru));
        let ctx = RuleContext::new(&c, &c, &c).with_dasha(Some(&d));
        assert!(DasaLordIsTenthLord.evaluate(&ctx).is_none());
        assert!(BhuktiLordIsTenthLord.evaluate(&ctx).is_none());
        let t = DashaCareerTiming.evaluate(&ctx).unwrap();
        assert!((t.record.score - 0.3).abs() < EPS);
        assert!(t.record.explanation.contains("Current period: Venus/Jupiter. Jupiter Bhukti (in 10th house)."));
    }

    #[test]
    fn sav_strength() {
        let c = mesha_chart(&[
            (Graha::Surya, 280.5, false),
            (Graha::Chandra, 292.4, false),
            (Graha::Mangal, 14.2, false),
            (Graha::Buddh, 265.0, false),
            (Graha::Guru, 76.8, false),
            (Graha::Shukra, 300.1, false),
            (Graha::Shani, 266.3, false),
        ]);
        let grid = ashtakavarga(&c).unwrap();
        let ctx = RuleContext::new(&c, &c, &c).with_ashtakavarga(Some(&grid));
        let o = SavTenth.evaluate(&ctx).unwrap();
        assert_eq!(o.factors[0], format!("SAV_10th_house_bindus_{}", grid.sav_tenth()));
        assert!((o.record.score - grid.sav_tenth_strength().score()).abs() < EPS);
    }
}
