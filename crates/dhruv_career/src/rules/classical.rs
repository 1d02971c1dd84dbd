//! Classical supporting rules: dispositors, Moon-based houses, karakas,
//! upachaya and eighth-house readings.

use dhruv_vedic_base::{CharaKaraka, ChartPoint, Graha, chara_karakas, navamsha_deity};

use super::{
    CareerRule, RuleContext, RuleOutcome, UPACHAYAS, join_names, join_tag, or_none,
};

/// D1 house tenth from the Moon's house.
fn tenth_from_moon(ctx: &RuleContext<'_>) -> Option<u8> {
    let moon_house = ctx.d1.house_of(Graha::Chandra)?;
    Some((moon_house + 8) % 12 + 1)
}

pub struct NavamshaDispositor;

impl CareerRule for NavamshaDispositor {
    fn id(&self) -> &'static str {
        "D9_dispositor_10th_lord"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let dispositor = ctx.d9.rashi_of(ctx.tenth_lord())?.lord();
        Some(
            RuleOutcome::new("D9_dispositor_10th_lord", 0.6)
                .factor(format!("D9_dispositor_10th_lord_{dispositor}"))
                .score("d9_dispositor_10th_lord", 0.6)
                .detail(format!("Dispositor: {dispositor}.")),
        )
    }
}

pub struct ChandraLagna;

impl CareerRule for ChandraLagna {
    fn id(&self) -> &'static str {
        "chandra_lagna_10th"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let house = tenth_from_moon(ctx)?;
        let lord = ctx.d1.house_lord(house);
        let occupants = ctx.d1.occupants(house);
        Some(
            RuleOutcome::new("chandra_lagna_10th", 0.5)
                .factor(format!("chandra_lagna_10th_house_{house}_lord_{lord}"))
                .score("chandra_lagna_10th", 0.5)
                .detail(format!(
                    "House {house}, lord {lord}, occupants: {}.",
                    or_none(join_names(&occupants))
                )),
        )
    }
}

pub struct MoonTenth;

impl CareerRule for MoonTenth {
    fn id(&self) -> &'static str {
        "moon_10th_career"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let house = tenth_from_moon(ctx)?;
        let rashi = ctx.d1.cusp_rashi(house);
        let occupants = ctx.d1.occupants(house);
        let score = (0.2 * occupants.len() as f64 + 0.3).min(1.0);
        Some(
            RuleOutcome::new("moon_10th_career", score)
                .factor(format!("moon_10th_career_{rashi}"))
                .score("moon_10th_career", score)
                .detail(format!(
                    "10th from Moon: {rashi} (lord: {}). Planets: {}.",
                    rashi.lord(),
                    or_none(join_names(&occupants))
                )),
        )
    }
}

pub struct CharaKarakas;

impl CareerRule for CharaKarakas {
    fn id(&self) -> &'static str {
        "chara_karakas"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let karakas = chara_karakas(ctx.d1);
        if karakas.is_empty() {
            return None;
        }
        let holder = |role: CharaKaraka| {
            karakas
                .iter()
                .find(|(k, _)| *k == role)
                .map_or_else(|| "None".to_string(), |(_, g)| g.to_string())
        };
        let amk = holder(CharaKaraka::Amatyakaraka);
        let dk = holder(CharaKaraka::Darakaraka);
        Some(
            RuleOutcome::new("chara_karakas", 0.5)
                .factor(format!("chara_karakas_AmK_{amk}_DK_{dk}"))
                .score("chara_karakas", 0.5)
                .detail(format!("Amatyakaraka: {amk}; Darakaraka: {dk}.")),
        )
    }
}

pub struct UpachayaSunSaturn;

impl CareerRule for UpachayaSunSaturn {
    fn id(&self) -> &'static str {
        "upachaya_sun_saturn"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        for (label, chart) in [("D1", ctx.d1), ("D10", ctx.d10)] {
            let upachaya = |g: Graha| -> Vec<u8> {
                chart
                    .house_of(g)
                    .filter(|h| UPACHAYAS.contains(h))
                    .into_iter()
                    .collect()
            };
            let sun = upachaya(Graha::Surya);
            let saturn = upachaya(Graha::Shani);
            let count = sun.len() + saturn.len();
            if count == 0 {
                continue;
            }
            let score = (0.2 * count as f64 + 0.2).min(1.0);
            return Some(
                RuleOutcome::new("upachaya_sun_saturn", score)
                    .factor(format!("upachaya_{label}_Sun_{sun:?}_Sat_{saturn:?}"))
                    .score("upachaya_sun_saturn", score)
                    .detail(format!(
                        "In {label}: Sun in houses {sun:?}, Saturn in {saturn:?}."
                    )),
            );
        }
        None
    }
}

pub struct EighthHouse;

impl CareerRule for EighthHouse {
    fn id(&self) -> &'static str {
        "eighth_house"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        if ctx.d1.is_empty() {
            return None;
        }
        let lord = ctx.d1.house_lord(8);
        let occupants: Vec<ChartPoint> = ctx.d1.occupants(8);
        Some(
            RuleOutcome::new("eighth_house", 0.4)
                .factor(format!("8th_house_lord_{lord}_occ_{}", join_tag(&occupants)))
                .score("eighth_house", 0.4)
                .detail(format!(
                    "Lord: {lord}; occupants: {}.",
                    or_none(join_names(&occupants))
                )),
        )
    }
}

pub struct AmsaDeity;

impl CareerRule for AmsaDeity {
    fn id(&self) -> &'static str {
        "amsa_deities"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let deity = navamsha_deity(ctx.d1.longitude(ctx.tenth_lord())?);
        Some(
            RuleOutcome::new("amsa_deities", 0.35)
                .factor(format!("amsa_deity_10th_lord_{deity}"))
                .score("amsa_deities", 0.35)
                .detail(format!("10th lord's Navamsha deity: {deity}.")),
        )
    }
}
