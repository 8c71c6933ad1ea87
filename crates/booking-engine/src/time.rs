//! Wall-clock time of day at minute resolution.
//!
//! Times cross every boundary of the engine as `"HH:MM"` strings with no
//! seconds and no timezone. Internally they are minutes since midnight, which
//! keeps the slot arithmetic integer-only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{BookingError, Result};

/// Minutes in a day. `24:00` is accepted as an end-of-day bound.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day, stored as minutes since midnight.
///
/// Ordering follows the clock, which is also the lexicographic order of the
/// zero-padded `"HH:MM"` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY);

    /// Build a time from a literal known to be in range.
    ///
    /// Intended for constants; panics (at compile time in a `const`) when out of range.
    pub const fn at(hours: u16, minutes: u16) -> Self {
        assert!(
            minutes < 60 && hours * 60 + minutes <= MINUTES_PER_DAY,
            "time of day out of range"
        );
        Self(hours * 60 + minutes)
    }

    /// Build a time from hours and minutes.
    ///
    /// Returns `None` for anything past `24:00`.
    pub fn from_hm(hours: u16, minutes: u16) -> Option<Self> {
        if minutes >= 60 {
            return None;
        }
        Self::from_minutes(hours.checked_mul(60)?.checked_add(minutes)?)
    }

    /// Build a time from minutes since midnight (`0..=1440`).
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = BookingError;

    /// Parse `"HH:MM"` (a single-digit hour such as `"9:00"` is also accepted).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || BookingError::InvalidTime(s.to_string());

        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(invalid());
        }
        if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hours: u16 = h.parse().map_err(|_| invalid())?;
        let minutes: u16 = m.parse().map_err(|_| invalid())?;
        TimeOfDay::from_hm(hours, minutes).ok_or_else(invalid)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
