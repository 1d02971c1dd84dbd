//! Core types for Vimshottari dasha (planetary period) calculations.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;

/// Year length constant for dasha period calculations.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Length of the full Vimshottari cycle in years.
pub const DEFAULT_TOTAL_YEARS: f64 = 120.0;

/// Largest span a table may cover (ten full cycles).
pub const MAX_TOTAL_YEARS: f64 = 1200.0;

/// Mahadasha years per graha.
pub const fn vimshottari_years(graha: Graha) -> f64 {
    match graha {
        Graha::Ketu => 7.0,
        Graha::Shukra => 20.0,
        Graha::Surya => 6.0,
        Graha::Chandra => 10.0,
        Graha::Mangal => 7.0,
        Graha::Rahu => 18.0,
        Graha::Guru => 16.0,
        Graha::Shani => 19.0,
        Graha::Buddh => 17.0,
    }
}

/// One Mahadasha.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaPeriod {
    pub planet: Graha,
    /// Age in years at the start, inclusive.
    pub start_age: f64,
    /// Age in years at the end, exclusive.
    pub end_age: f64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    /// Length in years.
    pub duration: f64,
}

impl DashaPeriod {
    pub fn contains_age(&self, age: f64) -> bool {
        self.start_age <= age && age < self.end_age
    }
}

/// One Bhukti (Antardasha) inside a Mahadasha.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BhuktiPeriod {
    pub maha_dasa: Graha,
    pub bhukti: Graha,
    /// Index of the parent in [`DashaTable::periods`].
    pub maha_index: usize,
    pub start_age: f64,
    pub end_age: f64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    /// Length in years.
    pub duration: f64,
}

impl BhuktiPeriod {
    pub fn contains_date(&self, at: NaiveDateTime) -> bool {
        self.start_date <= at && at < self.end_date
    }
}

/// Mahadasha sequence from birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaTable {
    pub birth: NaiveDateTime,
    pub birth_nakshatra: Nakshatra,
    pub birth_pada: u8,
    pub total_years: f64,
    /// Consecutive periods partitioning [0, total_years).
    pub periods: Vec<DashaPeriod>,
}

/// Periods running at a query instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentDasha {
    pub current_dasa: Graha,
    pub current_bhukti: Option<Graha>,
    /// Start of the current Mahadasha.
    pub start_date: NaiveDateTime,
    /// End of the current Mahadasha.
    pub end_date: NaiveDateTime,
    /// Years left in the current Mahadasha, two decimals.
    pub remaining_years: f64,
    /// Age at the query instant, two decimals.
    pub age: f64,
}

impl fmt::Display for CurrentDasha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.current_bhukti {
            Some(b) => write!(f, "{} Mahadasha / {} Antardasha", self.current_dasa, b),
            None => write!(f, "{} Mahadasha / Unknown Antardasha", self.current_dasa),
        }
    }
}
