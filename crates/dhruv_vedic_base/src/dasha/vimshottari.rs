//! Vimshottari Mahadasha/Bhukti generation and current-period lookup.
//!
//! The starting lord is the Vimshottari lord of the Moon's nakshatra; its
//! first period is the unelapsed share of its full years. The sequence then
//! continues around the 9-lord cycle (the starting lord recurs after a full
//! turn) until `total_years` is covered, the last period clamped so the
//! table ends exactly at `total_years`.

use chrono::{NaiveDateTime, TimeDelta};

use super::subperiod::proportional_children;
use super::types::{
    BhuktiPeriod, CurrentDasha, DAYS_PER_YEAR, DashaPeriod, DashaTable, MAX_TOTAL_YEARS,
    vimshottari_years,
};
use crate::error::VedicError;
use crate::graha::Graha;
use crate::nakshatra::{VIMSHOTTARI_LORDS, nakshatra_from_longitude};
use crate::util::{jd_to_datetime, round_to};

const MILLIS_PER_YEAR: f64 = DAYS_PER_YEAR * 86_400_000.0;

/// `start` advanced by `years` of 365.25 days.
pub fn add_years(start: NaiveDateTime, years: f64) -> Result<NaiveDateTime, VedicError> {
    TimeDelta::try_milliseconds((years * MILLIS_PER_YEAR).round() as i64)
        .and_then(|d| start.checked_add_signed(d))
        .ok_or_else(|| VedicError::InvalidInput(format!("date overflow adding {years} years")))
}

/// Years between two instants, in 365.25-day years.
pub fn years_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLIS_PER_YEAR
}

/// The 9 lords in cycle order starting at `first`.
pub fn sequence_from(first: Graha) -> impl Iterator<Item = Graha> {
    let start = VIMSHOTTARI_LORDS
        .iter()
        .position(|g| *g == first)
        .unwrap_or(0);
    (0..9).map(move |i| VIMSHOTTARI_LORDS[(start + i) % 9])
}

/// Generate the Mahadasha table.
///
/// The start lord recurs after a full cycle and is clamped at `total_years`,
/// so a 120-year table holds ten entries.
///
/// `total_years` must be positive and at most [`MAX_TOTAL_YEARS`].
pub fn vimshottari_table(
    birth: NaiveDateTime,
    moon_longitude: f64,
    total_years: f64,
) -> Result<DashaTable, VedicError> {
    if !moon_longitude.is_finite() {
        return Err(VedicError::InvalidInput(
            "Moon longitude is not finite".into(),
        ));
    }
    if !(total_years > 0.0 && total_years <= MAX_TOTAL_YEARS) {
        return Err(VedicError::InvalidInput(format!(
            "total_years must be in (0, {MAX_TOTAL_YEARS}], got {total_years}"
        )));
    }

    let info = nakshatra_from_longitude(moon_longitude);
    let balance = vimshottari_years(info.lord) * (1.0 - info.fraction_elapsed);

    let mut periods = Vec::new();
    let mut age = 0.0;
    let mut first = true;
    'outer: loop {
        for planet in sequence_from(info.lord) {
            if age >= total_years {
                break 'outer;
            }
            let full = if first { balance } else { vimshottari_years(planet) };
            first = false;
            if full <= 0.0 {
                continue;
            }
            let (duration, end_age) = if age + full >= total_years {
                (total_years - age, total_years)
            } else {
                (full, age + full)
            };
            periods.push(DashaPeriod {
                planet,
                start_age: age,
                end_age,
                start_date: add_years(birth, age)?,
                end_date: add_years(birth, end_age)?,
                duration,
            });
            age = end_age;
        }
    }

    log::debug!(
        "vimshottari: {} from {} ({} periods over {total_years} years)",
        info.lord,
        info.nakshatra,
        periods.len()
    );

    Ok(DashaTable {
        birth,
        birth_nakshatra: info.nakshatra,
        birth_pada: info.pada,
        total_years,
        periods,
    })
}

/// Same as [`vimshottari_table`] for a birth given as a Julian Day (UT).
pub fn vimshottari_table_from_jd(
    birth_jd: f64,
    moon_longitude: f64,
    total_years: f64,
) -> Result<DashaTable, VedicError> {
    let birth = jd_to_datetime(birth_jd)
        .ok_or_else(|| VedicError::InvalidInput(format!("unrepresentable JD {birth_jd}")))?;
    vimshottari_table(birth, moon_longitude, total_years)
}

/// Bhuktis of every Mahadasha, in order.
pub fn bhukti_table(table: &DashaTable) -> Result<Vec<BhuktiPeriod>, VedicError> {
    let mut out = Vec::with_capacity(table.periods.len() * 9);
    for (i, period) in table.periods.iter().enumerate() {
        out.extend(proportional_children(period, i, table.birth)?);
    }
    Ok(out)
}

/// Locate the Mahadasha and Bhukti running at `at`.
///
/// The Mahadasha is found by age, the Bhukti by date. Queries past the
/// table resolve to the last entries, queries before birth to the first.
/// Returns `None` only for an empty table.
pub fn current_dasa_bhukti(
    table: &DashaTable,
    bhuktis: &[BhuktiPeriod],
    at: NaiveDateTime,
) -> Option<CurrentDasha> {
    let age = years_between(table.birth, at);

    let (maha_index, maha) = if age < 0.0 {
        (0, table.periods.first()?)
    } else {
        table
            .periods
            .iter()
            .enumerate()
            .find(|(_, p)| p.contains_age(age))
            .or_else(|| table.periods.iter().enumerate().last())?
    };

    let mut children = bhuktis.iter().filter(|b| b.maha_index == maha_index);
    let bhukti = if age < 0.0 {
        children.next()
    } else {
        let own: Vec<&BhuktiPeriod> = children.collect();
        own.iter()
            .find(|b| b.contains_date(at))
            .or_else(|| own.last())
            .copied()
    };

    Some(CurrentDasha {
        current_dasa: maha.planet,
        current_bhukti: bhukti.map(|b| b.bhukti),
        start_date: maha.start_date,
        end_date: maha.end_date,
        remaining_years: round_to(years_between(at, maha.end_date), 2),
        age: round_to(age, 2),
    })
}

/// Generate the table and look up the periods running at `at`.
pub fn current_dasha(
    birth: NaiveDateTime,
    moon_longitude: f64,
    at: NaiveDateTime,
    total_years: f64,
) -> Result<CurrentDasha, VedicError> {
    let table = vimshottari_table(birth, moon_longitude, total_years)?;
    let bhuktis = bhukti_table(&table)?;
    current_dasa_bhukti(&table, &bhuktis, at)
        .ok_or(VedicError::InvalidInput("empty dasha table".into()))
}
