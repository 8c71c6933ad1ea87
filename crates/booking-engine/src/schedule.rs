//! Weekly working-hours rules for a single professional.
//!
//! A [`Schedule`] holds at most one [`WorkDay`] per weekday index
//! (0 = Sunday .. 6 = Saturday). A weekday without an entry is closed.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::time::TimeOfDay;

/// Weekday index of a date, 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// One weekday's rule for one professional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDay {
    pub day_of_week: u8,
    pub is_open: bool,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub start: Option<TimeOfDay>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub end: Option<TimeOfDay>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub lunch_start: Option<TimeOfDay>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub lunch_end: Option<TimeOfDay>,
}

/// Validated minute bounds of an open working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWindow {
    pub start: u32,
    pub end: u32,
    /// `(lunch_start, lunch_end)`, present only when both bounds are set.
    pub lunch: Option<(u32, u32)>,
}

impl WorkWindow {
    /// Whether `[candidate, candidate + duration)` collides with the lunch break.
    ///
    /// A slot ending exactly when lunch starts, or starting exactly when it
    /// ends, does not collide.
    pub fn overlaps_lunch(&self, candidate: u32, duration: u32) -> bool {
        let Some((lunch_start, lunch_end)) = self.lunch else {
            return false;
        };
        let slot_end = candidate.saturating_add(duration);

        let starts_in_lunch = candidate >= lunch_start && candidate < lunch_end;
        let ends_in_lunch = slot_end > lunch_start && slot_end <= lunch_end;
        let spans_lunch = candidate < lunch_start && slot_end > lunch_end;

        starts_in_lunch || ends_in_lunch || spans_lunch
    }
}

impl WorkDay {
    /// An open day with the given hours and no lunch break.
    pub fn open(day_of_week: u8, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            day_of_week,
            is_open: true,
            start: Some(start),
            end: Some(end),
            lunch_start: None,
            lunch_end: None,
        }
    }

    /// A closed day with no hours.
    pub fn closed(day_of_week: u8) -> Self {
        Self {
            day_of_week,
            is_open: false,
            start: None,
            end: None,
            lunch_start: None,
            lunch_end: None,
        }
    }

    pub fn with_lunch(mut self, lunch_start: TimeOfDay, lunch_end: TimeOfDay) -> Self {
        self.lunch_start = Some(lunch_start);
        self.lunch_end = Some(lunch_end);
        self
    }

    /// Minute bounds of this day, or `None` when the day is closed or malformed.
    ///
    /// Malformed means: an open day missing `start`/`end`, `end <= start`, or a
    /// lunch break (both bounds set) outside `start <= lunch_start <= lunch_end <= end`.
    /// With only one lunch bound set the day has no lunch constraint.
    pub fn window(&self) -> Option<WorkWindow> {
        if !self.is_open {
            return None;
        }
        let start = u32::from(self.start?.minutes());
        let end = u32::from(self.end?.minutes());
        if end <= start {
            return None;
        }

        let lunch = match (self.lunch_start, self.lunch_end) {
            (Some(ls), Some(le)) => {
                let (ls, le) = (u32::from(ls.minutes()), u32::from(le.minutes()));
                if !(start <= ls && ls <= le && le <= end) {
                    return None;
                }
                Some((ls, le))
            }
            _ => None,
        };

        Some(WorkWindow { start, end, lunch })
    }
}

/// A professional's weekly schedule.
///
/// Deserialization is lenient and lives with the catalog store boundary
/// (see [`crate::catalog`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    days: Vec<WorkDay>,
}

impl Schedule {
    pub fn new(days: Vec<WorkDay>) -> Self {
        Self { days }
    }

    /// The default week for a new professional: Monday to Saturday
    /// 09:00-18:00 with lunch 12:00-13:00, Sunday closed.
    pub fn standard_week() -> Self {
        const OPEN: TimeOfDay = TimeOfDay::at(9, 0);
        const CLOSE: TimeOfDay = TimeOfDay::at(18, 0);
        const LUNCH_START: TimeOfDay = TimeOfDay::at(12, 0);
        const LUNCH_END: TimeOfDay = TimeOfDay::at(13, 0);

        let weekdays =
            (1..7u8).map(|day| WorkDay::open(day, OPEN, CLOSE).with_lunch(LUNCH_START, LUNCH_END));
        std::iter::once(WorkDay::closed(0)).chain(weekdays).collect()
    }

    /// The rule for a weekday index. When several entries share the index the
    /// first one wins.
    pub fn day(&self, day_of_week: u8) -> Option<&WorkDay> {
        self.days.iter().find(|d| d.day_of_week == day_of_week)
    }

    /// Whether the weekday has an entry flagged open.
    pub fn is_open_on(&self, day_of_week: u8) -> bool {
        self.day(day_of_week).is_some_and(|d| d.is_open)
    }

    /// Replace the entry for `day.day_of_week`, or append it.
    pub fn upsert(&mut self, day: WorkDay) {
        match self
            .days
            .iter_mut()
            .find(|d| d.day_of_week == day.day_of_week)
        {
            Some(existing) => *existing = day,
            None => self.days.push(day),
        }
    }

    /// Number of distinct weekdays flagged open.
    pub fn open_days(&self) -> usize {
        (0..7u8).filter(|&d| self.is_open_on(d)).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkDay> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl From<Vec<WorkDay>> for Schedule {
    fn from(days: Vec<WorkDay>) -> Self {
        Self::new(days)
    }
}

impl FromIterator<WorkDay> for Schedule {
    fn from_iter<I: IntoIterator<Item = WorkDay>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Admin forms save an empty string for a cleared time field.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<TimeOfDay>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.parse().map(Some).map_err(serde::de::Error::custom)
        }
        _ => Ok(None),
    }
}
