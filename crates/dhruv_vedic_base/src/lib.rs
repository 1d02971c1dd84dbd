//! Vedic chart primitives and the pure engines built on them.
//!
//! This crate provides:
//! - Graha, rashi and nakshatra reference tables
//! - An immutable [`Chart`] model with cusp-based and whole-sign houses
//! - The [`PositionProvider`] seam for external ephemeris sources
//! - Navamsha (D9) and Dasamsa (D10) divisional transforms
//! - Bhinna and Sarva Ashtakavarga
//! - Vimshottari Mahadasha/Bhukti timelines
//! - Whole-sign graha drishti, dignity tables and combustion
//!
//! Every computation is a synchronous function of its inputs. Sidereal
//! longitudes are consumed, never computed.

pub mod amsha;
pub mod ashtakavarga;
pub mod chart;
pub mod combustion;
pub mod dasha;
pub mod dignity;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod provider;
pub mod rashi;
pub mod util;

pub use amsha::{
    Amsha, amsha_longitude, dasamsa_longitude, derive_chart, division_index, navamsha_longitude,
    navamsha_part,
};
pub use ashtakavarga::{
    AshtakavargaGrid, BAV_TOTALS, BhinnaAshtakavarga, LAGNA_BAV_TOTAL, SAV_TOTAL, SavStrength,
    ashtakavarga, calculate_bav,
};
pub use chart::{
    ALL_POINTS, Chart, ChartBuilder, ChartKind, ChartMeta, ChartPoint, DEFAULT_CUSPS,
    PlanetPosition, YogaInput, equal_cusps, which_house,
};
pub use combustion::{combust_grahas, combustion_threshold, is_combust, is_combust_in};
pub use dasha::{
    BhuktiPeriod, CurrentDasha, DashaPeriod, DashaTable, bhukti_table, current_dasa_bhukti,
    current_dasha, vimshottari_table, vimshottari_table_from_jd,
};
pub use dignity::{
    CharaKaraka, Dignity, chara_karakas, dignity_in_rashi, exaltation_rashi, is_benefic,
    is_debilitated, is_exalted, is_malefic, is_own_sign, is_strong, navamsha_deity, yogakaraka,
};
pub use drishti::{AspectHit, AspectKind, planets_aspecting_graha, planets_aspecting_house};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, nth_house_from, rashi_lord};
pub use nakshatra::{Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use provider::{BirthRequest, PositionProvider, StaticProvider, fetch_chart};
pub use rashi::{ALL_RASHIS, Element, MotionClass, Rashi, RashiInfo, rashi_from_longitude};
pub use util::{jd_to_datetime, normalize_360};
