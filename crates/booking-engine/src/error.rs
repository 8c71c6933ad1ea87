//! Error types for booking-engine operations.
//!
//! The slot engine itself never fails for well-formed schedule data; these
//! errors come from parsing at the store boundary and from booking-flow
//! transitions that the controller refuses.

use chrono::NaiveDate;
use thiserror::Error;

use crate::booking::BookingStep;
use crate::time::TimeOfDay;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid professional selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid slot interval: {0} minutes")]
    InvalidInterval(u32),

    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("No professional is working on {0}")]
    DateClosed(NaiveDate),

    #[error("{time} is not an available slot on {date}")]
    SlotUnavailable { date: NaiveDate, time: TimeOfDay },

    #[error("Operation not allowed in step {actual:?} (expected {expected:?})")]
    WrongStep {
        expected: BookingStep,
        actual: BookingStep,
    },

    #[error("No time selected")]
    NoTimeSelected,

    #[error("No service selected")]
    NoServiceSelected,
}

pub type Result<T> = std::result::Result<T, BookingError>;
