//! Proportional Bhukti generation.
//!
//! Child duration = (child_full_years / 120) * parent_duration, walking the
//! Vimshottari sequence from the parent's own lord.

use chrono::NaiveDateTime;

use super::types::{BhuktiPeriod, DashaPeriod, DEFAULT_TOTAL_YEARS, vimshottari_years};
use super::vimshottari::{add_years, sequence_from};
use crate::error::VedicError;

/// Snap the last child's end to the parent's end to absorb floating-point drift.
pub fn snap_last_child_end(children: &mut [BhuktiPeriod], parent: &DashaPeriod) {
    if let Some(last) = children.last_mut() {
        last.end_age = parent.end_age;
        last.end_date = parent.end_date;
        last.duration = parent.end_age - last.start_age;
    }
}

/// Bhuktis of one Mahadasha.
pub fn proportional_children(
    parent: &DashaPeriod,
    maha_index: usize,
    birth: NaiveDateTime,
) -> Result<Vec<BhuktiPeriod>, VedicError> {
    let mut children = Vec::with_capacity(9);
    let mut cursor = parent.start_age;
    let mut remaining = parent.duration;

    for sub in sequence_from(parent.planet) {
        if remaining <= 0.0 {
            break;
        }
        let duration =
            (vimshottari_years(sub) / DEFAULT_TOTAL_YEARS * parent.duration).min(remaining);
        let end = cursor + duration;
        children.push(BhuktiPeriod {
            maha_dasa: parent.planet,
            bhukti: sub,
            maha_index,
            start_age: cursor,
            end_age: end,
            start_date: add_years(birth, cursor)?,
            end_date: add_years(birth, end)?,
            duration,
        });
        cursor = end;
        remaining -= duration;
    }

    snap_last_child_end(&mut children, parent);
    Ok(children)
}
