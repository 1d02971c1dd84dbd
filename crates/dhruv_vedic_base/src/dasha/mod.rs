//! Vimshottari dasha (planetary period) calculations.
//!
//! Two levels are produced: the Mahadasha sequence from birth and the
//! Bhuktis (Antardashas) inside each Mahadasha. Period dates are derived
//! from ages with a 365.25-day year.

pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use subperiod::{proportional_children, snap_last_child_end};
pub use types::{
    BhuktiPeriod, CurrentDasha, DAYS_PER_YEAR, DEFAULT_TOTAL_YEARS, DashaPeriod, DashaTable,
    MAX_TOTAL_YEARS, vimshottari_years,
};
pub use vimshottari::{
    add_years, bhukti_table, current_dasa_bhukti, current_dasha, sequence_from,
    vimshottari_table, vimshottari_table_from_jd, years_between,
};
