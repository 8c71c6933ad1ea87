//! # booking-engine
//!
//! Deterministic appointment slot computation for a multi-location barbershop.
//!
//! Given a service duration, a professional selection (one professional or
//! "any" at the location) and a calendar date, the engine returns the start
//! times a client may book, honoring each professional's weekly hours and
//! lunch break. Every engine call is a pure function of its arguments.
//!
//! ## Modules
//!
//! - [`time`] — `"HH:MM"` time of day at minute resolution
//! - [`schedule`] — per-weekday working hours and lunch breaks
//! - [`catalog`] — locations, services, professionals; store-boundary normalization
//! - [`selection`] — one professional or "any"
//! - [`slots`] — bookable start times for a service on a date
//! - [`calendar`] — open/closed dates and next-open-date scan
//! - [`booking`] — booking-flow controller (service → date/time → confirm)
//! - [`cart`] — cart of confirmed booking candidates
//! - [`error`] — Error types

pub mod booking;
pub mod calendar;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod schedule;
pub mod selection;
pub mod slots;
pub mod time;

pub use booking::{BookingFlow, BookingStep};
pub use calendar::{is_date_open, next_available_date, open_dates, upcoming_dates};
pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, Location, Professional, Service};
pub use error::BookingError;
pub use schedule::{Schedule, WorkDay};
pub use selection::ProfessionalSelection;
pub use slots::{compute_available_slots, compute_available_slots_with, SlotOptions};
pub use time::TimeOfDay;
