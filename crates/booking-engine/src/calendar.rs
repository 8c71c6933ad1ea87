//! Date-level availability: which days are open for a professional selection.

use chrono::NaiveDate;

use crate::catalog::Professional;
use crate::schedule::weekday_index;
use crate::selection::ProfessionalSelection;

/// Whether at least one targeted professional works on `date`.
///
/// Only the open flag of the weekday's entry is consulted; a professional with
/// no entry for the weekday is closed that day. An empty professional list, or
/// a selection naming an unknown id, is closed on every date.
pub fn is_date_open(
    date: NaiveDate,
    professionals: &[Professional],
    selection: &ProfessionalSelection,
) -> bool {
    let weekday = weekday_index(date);
    selection
        .targets(professionals)
        .any(|p| p.schedule.is_open_on(weekday))
}

/// `horizon_days` consecutive dates starting at `from` (inclusive).
pub fn upcoming_dates(from: NaiveDate, horizon_days: u32) -> impl Iterator<Item = NaiveDate> {
    from.iter_days().take(horizon_days as usize)
}

/// Each date of the horizon paired with whether it is open.
pub fn open_dates(
    from: NaiveDate,
    horizon_days: u32,
    professionals: &[Professional],
    selection: &ProfessionalSelection,
) -> Vec<(NaiveDate, bool)> {
    upcoming_dates(from, horizon_days)
        .map(|date| (date, is_date_open(date, professionals, selection)))
        .collect()
}

/// First open date among `horizon_days` dates starting at `from`, if any.
pub fn next_available_date(
    from: NaiveDate,
    horizon_days: u32,
    professionals: &[Professional],
    selection: &ProfessionalSelection,
) -> Option<NaiveDate> {
    upcoming_dates(from, horizon_days).find(|&date| is_date_open(date, professionals, selection))
}
