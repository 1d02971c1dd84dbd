//! Known rule ids with display names, base explanations and categories.

use serde::Serialize;

/// Display group of a checklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    D1TenthHouse,
    D10CareerChart,
    SpecialYogas,
    DashaTiming,
    Ashtakavarga,
    Advanced,
}

/// Categories in display order.
pub const CATEGORY_ORDER: [RuleCategory; 6] = [
    RuleCategory::D1TenthHouse,
    RuleCategory::D10CareerChart,
    RuleCategory::SpecialYogas,
    RuleCategory::DashaTiming,
    RuleCategory::Ashtakavarga,
    RuleCategory::Advanced,
];

impl RuleCategory {
    pub const fn key(self) -> &'static str {
        match self {
            Self::D1TenthHouse => "d1_tenth_house",
            Self::D10CareerChart => "d10_career_chart",
            Self::SpecialYogas => "special_yogas",
            Self::DashaTiming => "dasha_timing",
            Self::Ashtakavarga => "ashtakavarga",
            Self::Advanced => "advanced",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::D1TenthHouse => "D1 (Birth Chart) - 10th House Analysis",
            Self::D10CareerChart => "D10 (Career Chart) Analysis",
            Self::SpecialYogas => "Special Yogas (Combinations)",
            Self::DashaTiming => "Dasha (Planetary Periods)",
            Self::Ashtakavarga => "Ashtakavarga (Point System)",
            Self::Advanced => "Advanced Analysis",
        }
    }

    /// Category of a rule id; unlisted ids are advanced.
    pub fn of(rule_id: &str) -> Self {
        use RuleCategory::*;
        match rule_id {
            "D1_10th_lord_in_10th"
            | "D1_10th_lord_in_own_sign"
            | "D1_10th_lord_exalted"
            | "d1_10th_lord_placement"
            | "D1_planets_in_10th"
            | "d1_10th_benefics"
            | "d1_10th_malefics"
            | "D1_10th_lord_in_2nd_3rd"
            | "aspects_to_10th_house"
            | "aspects_to_10th_lord" => D1TenthHouse,
            "D10_10th_rasi"
            | "D10_10th_lord_transposition"
            | "D10_10th_lord_weak"
            | "D10_Kendra_benefics"
            | "D10_Kendra_malefics"
            | "D10_sign_nature_10th"
            | "Vargottama"
            | "raja_yoga_in_D10" => D10CareerChart,
            "current_dasa_lord_is_10th_lord"
            | "current_bhukti_lord_is_10th_lord"
            | "dasha_10th_link"
            | "bhukti_10th_link" => DashaTiming,
            "SAV_10th_house_bindus" | "sav_10th" => Ashtakavarga,
            "yogakaraka_in_10th"
            | "parivartana_yoga_10th"
            | "neechabhanga_10th"
            | "dharma_karma_yoga"
            | "sun_in_10th"
            | "exalted_in_10th"
            | "rahu_ketu_in_10th"
            | "combust_in_10th" => SpecialYogas,
            _ => Advanced,
        }
    }
}

/// Static description of one checklist rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub explanation: &'static str,
}

const fn meta(id: &'static str, name: &'static str, explanation: &'static str) -> RuleMeta {
    RuleMeta {
        id,
        name,
        explanation,
    }
}

/// Every rule id the checklist reports, in display order.
pub const RULE_META: [RuleMeta; 59] = [
    meta(
        "D1_10th_lord_in_10th",
        "10th lord in 10th house (D1)",
        "The lord of the 10th house (career) placed in the 10th house in the birth chart. This is a strong Parasara combination for career and authority.",
    ),
    meta(
        "D1_10th_lord_in_own_sign",
        "10th lord in own sign (D1)",
        "The 10th house lord is in its own rasi in D1, strengthening career significations.",
    ),
    meta(
        "D1_10th_lord_exalted",
        "10th lord exalted (D1)",
        "The 10th house lord is in its exaltation sign in the birth chart, indicating strong career potential.",
    ),
    meta(
        "d1_10th_lord_placement",
        "10th lord placement score",
        "Composite score for where the 10th lord is placed (own house, own sign, or exaltation).",
    ),
    meta(
        "D1_planets_in_10th",
        "Planets in 10th house (D1)",
        "Planets occupying the 10th house influence career. Benefics (Jupiter, Venus, Mercury, Moon) support; malefics (Saturn, Mars, Rahu, Ketu) can create challenges or drive ambition.",
    ),
    meta(
        "d1_10th_benefics",
        "Benefics in 10th house",
        "Number of benefic planets (Jupiter, Venus, Mercury, Moon) in the 10th house. More benefics generally support reputation and career growth.",
    ),
    meta(
        "d1_10th_malefics",
        "Malefics in 10th house",
        "Number of malefic planets (Saturn, Mars, Rahu, Ketu) in the 10th. Can indicate drive and authority or obstacles depending on dignity.",
    ),
    meta(
        "D10_10th_rasi",
        "D10 (Dasamsa) 10th house",
        "The 10th house of the career divisional chart (D10) shows profession and status. Its sign is evaluated for strength.",
    ),
    meta(
        "current_dasa_lord_is_10th_lord",
        "Current Dasha lord is 10th lord",
        "The running major period (Mahadasha) is of the planet that rules the 10th house. Career matters are highlighted in this period.",
    ),
    meta(
        "current_bhukti_lord_is_10th_lord",
        "Current Bhukti lord is 10th lord",
        "The running sub-period (Antardasha) is of the 10th lord. Strong timing for career events.",
    ),
    meta(
        "dasha_10th_link",
        "Dasha-10th link",
        "Major period lord connected to career (10th house).",
    ),
    meta(
        "bhukti_10th_link",
        "Bhukti-10th link",
        "Sub-period lord connected to career (10th house).",
    ),
    meta(
        "SAV_10th_house_bindus",
        "SAV (Ashtakavarga) 10th house",
        "Sodhya Pindas (bindus) in the 10th house from Ashtakavarga. 30+ bindus indicate strong career support; 26+ good; below 26 moderate.",
    ),
    meta(
        "sav_10th",
        "SAV 10th house score",
        "Strength of the 10th house from the Ashtakavarga SAV chart. Higher score means better planetary support for career.",
    ),
    meta(
        "D10_10th_lord_transposition",
        "10th lord transposition (D1 to D10)",
        "The 10th lord from D1 is located in D10. If strong and well-placed in D10, success in profession is likely (Parasara interactive rule).",
    ),
    meta(
        "D10_10th_lord_weak",
        "10th lord weak in D10",
        "Contradictory strength: 10th lord strong in D1 but weak in D10 can indicate gifted ability with vacillating public status or success.",
    ),
    meta(
        "Vargottama",
        "Vargottama (same sign in D1 and D10)",
        "Planets in the same sign in Rashi and Dashamsha are exceptionally powerful for professional talents.",
    ),
    meta(
        "D10_Kendra_benefics",
        "Benefics in Kendra in D10",
        "Benefics in Kendra (1, 4, 7, 10) in D10 promise promotions and success during their Dasha periods.",
    ),
    meta(
        "D10_Kendra_malefics",
        "Malefics in Kendra in D10",
        "Malefics in Kendra in D10 may cause setbacks; their Dashas need care.",
    ),
    meta(
        "D10_sign_nature_10th",
        "Sign nature (Tatwa) of 10th house in D10",
        "The element (fire/earth/air/water) of the sign in the 10th house in D10 gives clues to the type of profession.",
    ),
    meta(
        "D1_10th_lord_in_2nd_3rd",
        "10th lord in 2nd or 3rd house",
        "10th lord in 2nd (speech) or 3rd (travel) often indicates sales, marketing, or communication-related profession.",
    ),
    meta(
        "aspects_to_10th_house",
        "Aspects to 10th house",
        "Planets aspecting the 10th house (Karma house) influence the profession (Vedic drishti).",
    ),
    meta(
        "aspects_to_10th_lord",
        "Aspects to 10th lord",
        "Planets aspecting the 10th lord influence career and authority.",
    ),
    meta(
        "D9_dispositor_10th_lord",
        "D9 (Navamsha) dispositor of 10th lord",
        "The dispositor of the 10th lord in D9 refines the profession indication.",
    ),
    meta(
        "house_connections_10_11_lagna",
        "House connections (10th, 11th, Ascendant)",
        "Connections between 10th (career), 11th (gains), and Ascendant (self) strengthen professional promise.",
    ),
    meta(
        "chandra_lagna_10th",
        "10th from Moon (Chandra Lagna)",
        "Profession should also be analyzed from the 10th house relative to the Moon.",
    ),
    meta(
        "chara_karakas",
        "Chara Karakas (AmK, DK, etc.)",
        "Amatyakaraka indicates nature of work; Darakaraka can show financial position.",
    ),
    meta(
        "raja_yoga_in_D10",
        "Raja Yogas in D1 and strength in D10",
        "Raja Yogas in D1 must be checked for their strength and placement in D10.",
    ),
    meta(
        "upachaya_sun_saturn",
        "Upachaya (Sun/Saturn in 3,6,10,11)",
        "Sun or Saturn in Upachaya houses (3, 6, 10, 11) indicates good job and capacity for hard labor.",
    ),
    meta(
        "eighth_house",
        "8th house (transformations / retirement)",
        "8th house shows sudden transformations, setbacks, or retirement; strong 8th can also give sudden professional boost.",
    ),
    meta(
        "amsa_deities",
        "Amsa deities (Navamsha)",
        "The presiding deity of a planet's Navamsha division gives the flavor of professional success (e.g. Indra for power, Kubera for wealth).",
    ),
    meta(
        "yogakaraka_in_10th",
        "Yogakaraka planet in 10th house",
        "Yogakaraka (planet ruling both kendra and trikona for the lagna) in 10th house is extremely auspicious for career success and authority.",
    ),
    meta(
        "parivartana_yoga_10th",
        "Parivartana Yoga involving 10th",
        "Exchange (Parivartana) between 10th lord and another planet creates special career combinations. Maha Parivartana (between kendras/trikonas) is best.",
    ),
    meta(
        "neechabhanga_10th",
        "Neechabhanga Raja Yoga in 10th",
        "Debilitated planet in 10th with cancellation (Neechabhanga) creates powerful rags-to-riches career effect.",
    ),
    meta(
        "sun_in_10th",
        "Sun in 10th house",
        "Sun is the natural karaka (significator) for authority and government. In 10th, strongly indicates leadership/government career.",
    ),
    meta(
        "dharma_karma_yoga",
        "9th-10th lord connection (Dharma-Karma Yoga)",
        "Connection between 9th lord (fortune, dharma) and 10th lord (career, karma) creates fortunate career opportunities.",
    ),
    meta(
        "exalted_in_10th",
        "Exalted planets in 10th",
        "Exalted planets in 10th house are extremely powerful and give excellent career results in their respective domains.",
    ),
    meta(
        "rahu_ketu_in_10th",
        "Rahu or Ketu in 10th house",
        "Rahu in 10th indicates foreign/unconventional career. Ketu in 10th indicates spiritual/research career with detachment from worldly success.",
    ),
    meta(
        "combust_in_10th",
        "Combust planets in 10th",
        "Planets combust (too close to Sun) in 10th house are weakened and may indicate career obstacles or delayed success.",
    ),
    meta(
        "d10_lagna_strength",
        "D10 Lagna (Ascendant) strength",
        "The D10 Ascendant sign and its lord show the native's professional personality and approach to career. Strong placement indicates confidence and capability.",
    ),
    meta(
        "d10_lagna_lord_placement",
        "D10 Lagna lord placement",
        "D10 Lagna lord in Kendra (1,4,7,10) or Trikona (1,5,9) houses shows strong professional foundation and positive approach to work.",
    ),
    meta(
        "d10_10th_lord_placement",
        "D10 10th lord placement",
        "The lord of the 10th house in D10 chart shows career actions and professional achievements. Strong placement brings success.",
    ),
    meta(
        "big_three_lords",
        "Big Three Lords (D10 Lagna + D10 10th + D1 10th)",
        "Combined strength of the three most important career lords: D10 Lagna lord (personality), D10 10th lord (career actions), D1 10th lord (life purpose).",
    ),
    meta(
        "artha_trikona",
        "Artha Trikona (2nd, 6th, 10th houses)",
        "The wealth triangle houses. Strong 2nd (income), 6th (service), and 10th (career) houses indicate financial success through profession.",
    ),
    meta(
        "business_vs_job",
        "Business vs. Job indicator",
        "6th house strength (service/job) vs. 7th house strength (business/partnerships). Stronger 7th indicates entrepreneurial path.",
    ),
    meta(
        "saturn_in_d10",
        "Saturn placement in D10",
        "Saturn's position in D10 shows obstacles, discipline requirements, and delayed but lasting success. Favorable placement in 3,6,10,11 (Upachaya) is beneficial.",
    ),
    meta(
        "planetary_career_indicators",
        "Planetary Career Type Indicators",
        "Strong planets in 10th house or as 10th lord indicate specific career fields: Sun=Government/Authority, Moon=Healthcare/Public, Mars=Military/Technical, Mercury=Communication/Business, Jupiter=Teaching/Finance, Venus=Arts/Luxury, Saturn=Labor/Service.",
    ),
    meta(
        "d10_2nd_house",
        "D10 2nd house (Speech & Finance)",
        "The 2nd house in D10 shows income from profession, speech/communication in career, and financial gains. Strong 2nd house indicates good earning potential.",
    ),
    meta(
        "d10_4th_house",
        "D10 4th house (Assets & Peace)",
        "The 4th house in D10 shows assets through career, workplace environment, and inner peace in profession. Benefics here indicate comfortable work conditions.",
    ),
    meta(
        "d10_8th_house",
        "D10 8th house (Research & Transformation)",
        "The 8th house in D10 indicates research-oriented career, sudden changes, inheritance, and transformation through profession. Strong 8th can give occult/mystical careers.",
    ),
    meta(
        "d10_9th_house",
        "D10 9th house (Fortune & Teaching)",
        "The 9th house in D10 shows fortune in career, higher learning, teaching, philosophy, and long-distance work. Benefics bring luck and recognition.",
    ),
    meta(
        "dasha_career_timing",
        "Dasha periods for career timing",
        "Current and upcoming Dasha periods show timing for career events. Dasha of 10th lord, planets in 10th, or planets aspecting 10th bring career opportunities.",
    ),
    meta(
        "d1_d10_strength_comparison",
        "D1 vs D10 strength comparison",
        "Comparing planet strength in D1 (birth chart) and D10 (career chart). Planets strong in both give consistent success; strong in D10 only gives career-specific talent.",
    ),
    meta(
        "moon_10th_career",
        "10th house from Moon (Chandra Lagna)",
        "The 10th house counted from Moon shows emotional satisfaction in career and public perception. Should align with 10th from Ascendant for fulfillment.",
    ),
    meta(
        "d10_benefic_malefic_ratio",
        "Benefics vs Malefics ratio in D10",
        "The ratio of benefic to malefic planets in D10 shows overall career environment. More benefics indicate smooth progress; more malefics indicate struggle and effort.",
    ),
    meta(
        "exalted_in_both_d1_d10",
        "Planets exalted in both D1 and D10",
        "Planets exalted in both birth chart and career chart show exceptional, consistent talent that manifests strongly in profession. These are rare and highly auspicious.",
    ),
    meta(
        "jupiter_aspects_d10",
        "Jupiter aspects in D10",
        "Jupiter's aspects in D10 bring wisdom, expansion, opportunities, and protection to the aspected houses/planets. Jupiter's 5th, 7th, and 9th aspects are particularly beneficial.",
    ),
    meta(
        "saturn_aspects_d10",
        "Saturn aspects in D10",
        "Saturn's aspects in D10 bring discipline, structure, delays, and responsibility to aspected houses/planets. Can indicate areas requiring patience and systematic effort.",
    ),
    meta(
        "retrograde_planets_d10",
        "Retrograde planets in D10",
        "Retrograde planets in D10 indicate unconventional career approaches, unique methods, and non-traditional paths. Can show genius in specialized fields or alternative career trajectories.",
    ),
];

/// Metadata of a known id.
pub fn rule_meta(id: &str) -> Option<&'static RuleMeta> {
    RULE_META.iter().find(|m| m.id == id)
}
