//! Bookable start times for a service on a date.
//!
//! For every targeted professional working that weekday, candidate starts are
//! walked from opening time on a fixed grid (30 minutes by default, whatever
//! the service duration). A candidate survives if the service finishes by
//! closing time and does not touch the lunch break. Starts from several
//! professionals are merged into one ascending, duplicate-free list.
//!
//! Already-booked appointments are not consulted: every start that fits the
//! working hours is offered.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::warn;

use crate::catalog::{Professional, Service};
use crate::error::{BookingError, Result};
use crate::schedule::{weekday_index, WorkWindow};
use crate::selection::ProfessionalSelection;
use crate::time::TimeOfDay;

/// Distance between candidate start times, in minutes.
pub const SLOT_INTERVAL_MINUTES: u32 = 30;

/// Number of days scanned when looking for the next open date.
pub const DEFAULT_HORIZON_DAYS: u32 = 14;

/// Tunables for slot computation and date scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOptions {
    interval_minutes: u32,
    horizon_days: u32,
}

impl Default for SlotOptions {
    fn default() -> Self {
        Self {
            interval_minutes: SLOT_INTERVAL_MINUTES,
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

impl SlotOptions {
    /// # Errors
    /// Returns `BookingError::InvalidInterval` for a zero interval.
    pub fn new(interval_minutes: u32, horizon_days: u32) -> Result<Self> {
        if interval_minutes == 0 {
            return Err(BookingError::InvalidInterval(interval_minutes));
        }
        Ok(Self {
            interval_minutes,
            horizon_days,
        })
    }

    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }
}

/// Compute the bookable start times for `service` on `date`.
///
/// Uses the default 30-minute grid. See [`compute_available_slots_with`].
pub fn compute_available_slots(
    date: NaiveDate,
    service: &Service,
    professionals: &[Professional],
    selection: &ProfessionalSelection,
) -> Vec<TimeOfDay> {
    compute_available_slots_with(
        date,
        service.duration_min,
        professionals,
        selection,
        &SlotOptions::default(),
    )
}

/// Compute the bookable start times for a service of `duration_minutes` on `date`.
///
/// A professional without an entry for the weekday, or whose entry is closed,
/// contributes nothing. An open entry with unusable hours (missing bounds,
/// `end <= start`, lunch outside the working hours) is skipped with a warning
/// so other professionals still contribute.
///
/// Returns times in ascending order, each at most once.
pub fn compute_available_slots_with(
    date: NaiveDate,
    duration_minutes: u32,
    professionals: &[Professional],
    selection: &ProfessionalSelection,
    options: &SlotOptions,
) -> Vec<TimeOfDay> {
    let weekday = weekday_index(date);
    let mut slots = BTreeSet::new();

    for professional in selection.targets(professionals) {
        let Some(day) = professional.schedule.day(weekday) else {
            continue;
        };
        if !day.is_open {
            continue;
        }
        let Some(window) = day.window() else {
            warn!(
                professional = %professional.id,
                weekday,
                "skipping malformed work day"
            );
            continue;
        };

        slots.extend(window_slots(&window, duration_minutes, options.interval_minutes));
    }

    slots.into_iter().collect()
}

/// Grid starts within one working window that fit the service.
fn window_slots(
    window: &WorkWindow,
    duration: u32,
    interval: u32,
) -> impl Iterator<Item = TimeOfDay> + '_ {
    (window.start..window.end)
        .step_by(interval.max(1) as usize)
        .filter(move |&candidate| candidate.saturating_add(duration) <= window.end)
        .filter(move |&candidate| !window.overlaps_lunch(candidate, duration))
        .filter_map(|candidate| u16::try_from(candidate).ok().and_then(TimeOfDay::from_minutes))
}
