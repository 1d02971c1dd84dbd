//! Rules over the D1 10th house, its lord and the wealth houses.

use dhruv_vedic_base::{
    ChartPoint, Graha, is_benefic, is_malefic, planets_aspecting_graha, planets_aspecting_house,
};

use super::{CareerRule, RuleContext, RuleOutcome, join_names, join_tag};

/// Benefic grahas in a D1 cusp house.
fn benefics_in(ctx: &RuleContext<'_>, house: u8) -> Vec<Graha> {
    ctx.d1
        .occupants(house)
        .into_iter()
        .filter_map(ChartPoint::graha)
        .filter(|g| is_benefic(*g))
        .collect()
}

pub struct TenthLordPlacement;

impl CareerRule for TenthLordPlacement {
    fn id(&self) -> &'static str {
        "d1_10th_lord_placement"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let (id, score) = ctx.tenth_lord_placement()?;
        Some(
            RuleOutcome::new(id, score)
                .factor(id)
                .score("d1_10th_lord_placement", score),
        )
    }
}

pub struct PlanetsInTenth;

impl CareerRule for PlanetsInTenth {
    fn id(&self) -> &'static str {
        "D1_planets_in_10th"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let occupants = ctx.tenth_occupants();
        if occupants.is_empty() {
            return None;
        }
        let grahas: Vec<Graha> = occupants.iter().filter_map(|p| p.graha()).collect();
        let benefics = grahas.iter().filter(|g| is_benefic(**g)).count() as f64;
        let malefics = grahas.iter().filter(|g| is_malefic(**g)).count() as f64;
        Some(
            RuleOutcome::new("D1_planets_in_10th", benefics)
                .factor(format!("D1_planets_in_10th_{}", join_tag(&occupants)))
                .score("d1_10th_benefics", benefics)
                .score("d1_10th_malefics", malefics)
                .detail(format!("Benefics: {benefics}, Malefics: {malefics}.")),
        )
    }
}

pub struct TenthLordInSecondOrThird;

impl CareerRule for TenthLordInSecondOrThird {
    fn id(&self) -> &'static str {
        "D1_10th_lord_in_2nd_3rd"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let house = ctx.d1.house_of(ctx.tenth_lord())?;
        if house != 2 && house != 3 {
            return None;
        }
        Some(
            RuleOutcome::new("D1_10th_lord_in_2nd_3rd", 0.8)
                .factor("D1_10th_lord_in_2nd_3rd")
                .score("d1_10th_lord_2nd_3rd", 0.8),
        )
    }
}

pub struct AspectsToTenthHouse;

impl CareerRule for AspectsToTenthHouse {
    fn id(&self) -> &'static str {
        "aspects_to_10th_house"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let grahas: Vec<Graha> = planets_aspecting_house(ctx.d1, 10)
            .into_iter()
            .map(|h| h.graha)
            .collect();
        if grahas.is_empty() {
            return None;
        }
        let score = (0.15 * grahas.len() as f64 + 0.3).min(1.0);
        Some(
            RuleOutcome::new("aspects_to_10th_house", score)
                .factor(format!("aspects_to_10th_{}", join_tag(&grahas)))
                .score("aspects_to_10th_house", score)
                .detail(format!("Planets: {}.", join_names(&grahas))),
        )
    }
}

pub struct AspectsToTenthLord;

impl CareerRule for AspectsToTenthLord {
    fn id(&self) -> &'static str {
        "aspects_to_10th_lord"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let grahas: Vec<Graha> = planets_aspecting_graha(ctx.d1, ctx.tenth_lord())
            .into_iter()
            .map(|h| h.graha)
            .collect();
        if grahas.is_empty() {
            return None;
        }
        let score = (0.2 * grahas.len() as f64).min(1.0);
        Some(
            RuleOutcome::new("aspects_to_10th_lord", score)
                .factor(format!("aspects_to_10th_lord_{}", join_tag(&grahas)))
                .score("aspects_to_10th_lord", score),
        )
    }
}

pub struct HouseConnections;

impl CareerRule for HouseConnections {
    fn id(&self) -> &'static str {
        "house_connections_10_11_lagna"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let d1 = ctx.d1;
        let tenth = d1.house_lord(10);
        let eleventh = d1.house_lord(11);
        let lagna = d1.house_lord(1);

        let mut links = Vec::new();
        if tenth == eleventh {
            links.push("10th and 11th lord same");
        }
        if tenth == lagna {
            links.push("10th and Lagna lord same");
        }
        if eleventh == lagna {
            links.push("11th and Lagna lord same");
        }
        let tenth_house = d1.house_of(tenth);
        if tenth_house == Some(11) {
            links.push("10th lord in 11th");
        }
        if tenth_house == Some(1) {
            links.push("10th lord in Lagna");
        }
        if d1.house_of(eleventh) == Some(10) {
            links.push("11th lord in 10th");
        }
        if d1.house_of(lagna) == Some(10) {
            links.push("Lagna lord in 10th");
        }
        if links.is_empty() {
            return None;
        }

        let score = (0.25 * links.len() as f64).min(1.0);
        Some(
            RuleOutcome::new("house_connections_10_11_lagna", score)
                .factor(format!("house_connections_{}", links.join("|")))
                .score("house_connections_10_11_lagna", score)
                .detail(format!("{}.", links.join("; "))),
        )
    }
}

pub struct ArthaTrikona;

impl CareerRule for ArthaTrikona {
    fn id(&self) -> &'static str {
        "artha_trikona"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let d1 = ctx.d1;
        let mut score = 0.0;
        let mut details = Vec::new();

        for g in benefics_in(ctx, 2) {
            score += 0.15;
            details.push(format!("2nd house: {g} (benefic)"));
        }
        for g in benefics_in(ctx, 6) {
            score += 0.1;
            details.push(format!("6th house: {g} (benefic)"));
        }
        let tenth = ctx.tenth_benefics().len();
        if tenth > 0 {
            score += 0.2 * tenth as f64;
            details.push(format!("10th house: {tenth} benefics"));
        }

        let (second, sixth, tenth_lord) = (d1.house_lord(2), d1.house_lord(6), d1.house_lord(10));
        let mut links = Vec::new();
        if second == tenth_lord {
            score += 0.3;
            links.push("2nd-10th same lord");
        }
        if sixth == tenth_lord {
            score += 0.3;
            links.push("6th-10th same lord");
        }
        if second == sixth {
            score += 0.2;
            links.push("2nd-6th same lord");
        }
        if !links.is_empty() {
            details.push(links.join(", "));
        }
        if score <= 0.0 {
            return None;
        }

        let capped = f64::min(score, 1.0);
        let summary = if details.is_empty() {
            "Wealth houses occupied".to_string()
        } else {
            details.join("; ")
        };
        Some(
            RuleOutcome::new("artha_trikona", capped)
                .factor(format!("artha_trikona_{score:.2}"))
                .score("artha_trikona", capped)
                .detail(format!("Score: {capped:.2}. Details: {summary}.")),
        )
    }
}

pub struct BusinessVsJob;

impl CareerRule for BusinessVsJob {
    fn id(&self) -> &'static str {
        "business_vs_job"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let sixth = benefics_in(ctx, 6).len();
        let seventh = benefics_in(ctx, 7).len();
        let (kind, score, detail) = if seventh > sixth {
            (
                "Business/Entrepreneurship",
                0.7,
                format!(
                    "Business tendency (7th house: {seventh} benefics > 6th house: {sixth} benefics)"
                ),
            )
        } else if sixth > seventh {
            (
                "Job/Service",
                0.6,
                format!("Job/Service tendency (6th house: {sixth} benefics > 7th house: {seventh} benefics)"),
            )
        } else {
            (
                "Flexible",
                0.5,
                format!("Balanced (6th house: {sixth} benefics, 7th house: {seventh} benefics)"),
            )
        };
        Some(
            RuleOutcome::new("business_vs_job", score)
                .factor(format!("business_vs_job_{}", kind.replace('/', "_")))
                .score("business_vs_job", score)
                .detail(format!("Career type: {kind}. {detail}.")),
        )
    }
}

/// Field each of the seven planets points to.
pub const fn career_field(graha: Graha) -> Option<&'static str> {
    match graha {
        Graha::Surya => Some("Government/Authority/Leadership"),
        Graha::Chandra => Some("Healthcare/Public Service/Hospitality"),
        Graha::Mangal => Some("Military/Technical/Engineering/Sports"),
        Graha::Buddh => Some("Communication/Business/Writing/IT"),
        Graha::Guru => Some("Teaching/Finance/Law/Counseling"),
        Graha::Shukra => Some("Arts/Entertainment/Luxury/Design"),
        Graha::Shani => Some("Labor/Service/Mining/Real Estate"),
        Graha::Rahu | Graha::Ketu => None,
    }
}

pub struct PlanetaryIndicators;

impl CareerRule for PlanetaryIndicators {
    fn id(&self) -> &'static str {
        "planetary_career_indicators"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        fn note(found: &mut Vec<(Graha, Vec<&'static str>)>, g: Graha, reason: &'static str) {
            if career_field(g).is_none() {
                return;
            }
            match found.iter_mut().find(|(x, _)| *x == g) {
                Some((_, reasons)) => reasons.push(reason),
                None => found.push((g, vec![reason])),
            }
        }

        let in_tenth: Vec<Graha> = ctx
            .tenth_occupants()
            .into_iter()
            .filter_map(ChartPoint::graha)
            .collect();
        let mut found = Vec::new();
        for g in &in_tenth {
            note(&mut found, *g, "in 10th house");
        }
        note(&mut found, ctx.tenth_lord(), "10th lord");
        for hit in planets_aspecting_house(ctx.d1, 10) {
            if !in_tenth.contains(&hit.graha) {
                note(&mut found, hit.graha, "aspects 10th");
            }
        }
        if found.is_empty() {
            return None;
        }

        let mut fields: Vec<&str> = Vec::new();
        for (g, _) in &found {
            if let Some(f) = career_field(*g) {
                if !fields.contains(&f) {
                    fields.push(f);
                }
            }
        }
        let planets: Vec<Graha> = found.iter().map(|(g, _)| *g).collect();
        let described: Vec<String> = found
            .iter()
            .map(|(g, reasons)| format!("{g} ({})", reasons.join(", ")))
            .collect();
        let score = (0.3 * found.len() as f64).min(1.0);
        Some(
            RuleOutcome::new("planetary_career_indicators", score)
                .factor(format!("planetary_career_indicators_{}", join_tag(&planets)))
                .score("planetary_career_indicators", score)
                .detail(format!(
                    "Indicated fields: {}. Planets: {}.",
                    fields.join("; "),
                    described.join("; ")
                )),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::mesha_chart;

    const EPS: f64 = 1e-9;

    #[test]
    fn planets_in_tenth_counts() {
        let c = mesha_chart(&[(Graha::Guru, 275.0, false), (Graha::Shani, 280.0, false)]);
        let ctx = RuleContext::new(&c, &c, &c);
        let o = PlanetsInTenth.evaluate(&ctx).unwrap();
        assert_eq!(o.factors, vec!["D1_planets_in_10th_Jupiter,Saturn".to_string()]);
        assert!((o.record.score - 1.0).abs() < EPS);
        assert_eq!(o.scores, vec![("d1_10th_benefics", 1.0), ("d1_10th_malefics", 1.0)]);
        assert!(o.record.explanation.ends_with("Benefics: 1, Malefics: 1."));
    }

    #[test]
    fn empty_tenth_does_not_apply() {
        let c = mesha_chart(&[(Graha::Surya, 100.0, false)]);
        let ctx = RuleContext::new(&c, &c, &c);
        assert!(PlanetsInTenth.evaluate(&ctx).is_none());
        assert!(TenthLordPlacement.evaluate(&ctx).is_none());
    }

    #[test]
    fn aspects_onto_tenth() {
        // Moon in Karka casts its 7th onto Makara; Saturn in Mesha its 10th
        let c = mesha_chart(&[(Graha::Chandra, 100.0, false), (Graha::Shani, 10.0, false)]);
        let ctx = RuleContext::new(&c, &c, &c);
        let o = AspectsToTenthHouse.evaluate(&ctx).unwrap();
        assert_eq!(o.factors[0], "aspects_to_10th_Moon,Saturn");
        assert!((o.record.score - 0.6).abs() < EPS);
    }

    #[test]
    fn lord_links() {
        // Mesha Lagna: Saturn rules both 10th and 11th, Mars sits in the 10th
        let c = mesha_chart(&[(Graha::Mangal, 280.0, false), (Graha::Shani, 200.0, false)]);
        let ctx = RuleContext::new(&c, &c, &c);
        let o = HouseConnections.evaluate(&ctx).unwrap();
        assert_eq!(
            o.factors[0],
            "house_connections_10th and 11th lord same|Lagna lord in 10th"
        );
        assert!((o.record.score - 0.5).abs() < EPS);
    }

    #[test]
    fn business_or_job() {
        let c = mesha_chart(&[(Graha::Shukra, 190.0, false)]);
        let ctx = RuleContext::new(&c, &c, &c);
        let o = BusinessVsJob.evaluate(&ctx).unwrap();
        assert_eq!(o.factors[0], "business_vs_job_Business_Entrepreneurship");
        assert!((o.record.score - 0.7).abs() < EPS);

        let c = mesha_chart(&[]);
        let ctx = RuleContext::new(&c, &c, &c);
        let o = BusinessVsJob.evaluate(&ctx).unwrap();
        assert_eq!(o.factors[0], "business_vs_job_Flexible");
    }

    #[test]
    fn second_house_lord() {
        // Saturn, lord of the 10th, in the 3rd house
        let c = mesha_chart(&[(Graha::Shani, 70.0, false)]);
        let ctx = RuleContext::new(&c, &c, &c);
        let o = TenthLordInSecondOrThird.evaluate(&ctx).unwrap();
        assert_eq!(o.scores, vec![("d1_10th_lord_2nd_3rd", 0.8)]);
    }

    #[test]
    fn indicators_merge_reasons() {
        // Saturn in the 10th is also its lord; Moon in Karka aspects it
        let c = mesha_chart(&[(Graha::Shani, 280.0, false), (Graha::Chandra, 100.0, false)]);
        let ctx = RuleContext::new(&c, &c, &c);
        let o = PlanetaryIndicators.evaluate(&ctx).unwrap();
        assert_eq!(o.factors[0], "planetary_career_indicators_Saturn,Moon");
        assert!((o.record.score - 0.6).abs() < EPS);
        assert!(o.record.explanation.contains("Saturn (in 10th house, 10th lord)"));
        assert!(o.record.explanation.contains("Moon (aspects 10th)"));
    }
}
