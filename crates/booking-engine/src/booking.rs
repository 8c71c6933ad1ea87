//! Booking-flow controller for one location.
//!
//! Holds the client's in-progress choices and walks them through
//! `ServiceList -> DateTime -> Confirm`. Availability is never cached: every
//! query recomputes from the current state through the pure functions in
//! [`crate::slots`] and [`crate::calendar`].
//!
//! The professional selection can only change while picking a date and time.
//! Each change runs a guard right after the mutation: a selected date that is no longer open is
//! replaced by the next open date within the horizon (counted from today) and
//! the chosen time is cleared.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::calendar::{is_date_open, next_available_date, open_dates};
use crate::cart::CartItem;
use crate::catalog::{Location, Service};
use crate::error::{BookingError, Result};
use crate::selection::ProfessionalSelection;
use crate::slots::{compute_available_slots_with, SlotOptions};
use crate::time::TimeOfDay;

/// Where the client is in the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BookingStep {
    /// Browsing the location's services.
    ServiceList,
    /// A service is chosen; picking date, professional and time.
    DateTime,
    /// Reviewing the chosen slot before it becomes a cart item.
    Confirm,
}

#[derive(Debug, Clone)]
pub struct BookingFlow<'a> {
    location: &'a Location,
    options: SlotOptions,
    today: NaiveDate,
    step: BookingStep,
    service: Option<&'a Service>,
    date: NaiveDate,
    selection: ProfessionalSelection,
    time: Option<TimeOfDay>,
    notes: String,
    silent_mode: bool,
}

impl<'a> BookingFlow<'a> {
    /// Start a flow at the service list with `today` selected and no
    /// professional preference.
    pub fn new(location: &'a Location, today: NaiveDate) -> Self {
        Self::with_options(location, today, SlotOptions::default())
    }

    pub fn with_options(location: &'a Location, today: NaiveDate, options: SlotOptions) -> Self {
        Self {
            location,
            options,
            today,
            step: BookingStep::ServiceList,
            service: None,
            date: today,
            selection: ProfessionalSelection::Any,
            time: None,
            notes: String::new(),
            silent_mode: false,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn service(&self) -> Option<&'a Service> {
        self.service
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn selection(&self) -> &ProfessionalSelection {
        &self.selection
    }

    pub fn time(&self) -> Option<TimeOfDay> {
        self.time
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn silent_mode(&self) -> bool {
        self.silent_mode
    }

    /// Choose a service and move to date/time selection.
    ///
    /// Clears the chosen time, notes and silent mode.
    pub fn start(&mut self, service_id: &str) -> Result<()> {
        self.expect_step(BookingStep::ServiceList)?;
        let location = self.location;
        let service = location.service(service_id)?;

        self.service = Some(service);
        self.time = None;
        self.notes.clear();
        self.silent_mode = false;
        self.step = BookingStep::DateTime;
        debug!(service = %service.id, location = %self.location.id, "booking started");

        self.revalidate_date();
        Ok(())
    }

    /// Pick a date. Closed dates are refused; the chosen time is cleared.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<()> {
        self.expect_step(BookingStep::DateTime)?;
        if !self.is_date_open(date) {
            return Err(BookingError::DateClosed(date));
        }
        self.date = date;
        self.time = None;
        Ok(())
    }

    /// Change the professional selection, then re-check the selected date.
    ///
    /// Only allowed while picking a date and time. A chosen time the new
    /// selection does not offer is cleared.
    pub fn select_professional(&mut self, selection: ProfessionalSelection) -> Result<()> {
        self.expect_step(BookingStep::DateTime)?;
        debug!(%selection, "professional selection changed");
        self.selection = selection;
        self.revalidate_date();

        if let Some(time) = self.time {
            if !self.available_slots().contains(&time) {
                self.time = None;
            }
        }
        Ok(())
    }

    /// Pick one of the currently offered start times.
    pub fn select_time(&mut self, time: TimeOfDay) -> Result<()> {
        self.expect_step(BookingStep::DateTime)?;
        self.ensure_offered(time)?;
        self.time = Some(time);
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn set_silent_mode(&mut self, silent: bool) {
        self.silent_mode = silent;
    }

    /// Move from date/time selection to confirmation. Requires a chosen time
    /// that is still offered.
    pub fn proceed(&mut self) -> Result<()> {
        self.expect_step(BookingStep::DateTime)?;
        let time = self.time.ok_or(BookingError::NoTimeSelected)?;
        self.ensure_offered(time)?;
        self.step = BookingStep::Confirm;
        Ok(())
    }

    /// Step back once. Returns the new step, or `None` when already at the
    /// service list and the caller should leave the location view.
    pub fn back(&mut self) -> Option<BookingStep> {
        match self.step {
            BookingStep::Confirm => {
                self.step = BookingStep::DateTime;
                self.revalidate_date();
            }
            BookingStep::DateTime => {
                self.step = BookingStep::ServiceList;
                self.service = None;
                self.time = None;
            }
            BookingStep::ServiceList => return None,
        }
        Some(self.step)
    }

    /// Start times offered for the current service, date and selection.
    ///
    /// Empty when no service is chosen.
    pub fn available_slots(&self) -> Vec<TimeOfDay> {
        let Some(service) = self.service else {
            return Vec::new();
        };
        compute_available_slots_with(
            self.date,
            service.duration_min,
            &self.location.professionals,
            &self.selection,
            &self.options,
        )
    }

    pub fn is_date_open(&self, date: NaiveDate) -> bool {
        is_date_open(date, &self.location.professionals, &self.selection)
    }

    /// The date picker's strip: each date of the horizon from today, with
    /// whether it can be picked.
    pub fn date_strip(&self) -> Vec<(NaiveDate, bool)> {
        open_dates(
            self.today,
            self.options.horizon_days(),
            &self.location.professionals,
            &self.selection,
        )
    }

    /// Build the cart record for the confirmed slot.
    pub fn booking_candidate(&self) -> Result<CartItem> {
        self.expect_step(BookingStep::Confirm)?;
        let service = self.service.ok_or(BookingError::NoServiceSelected)?;
        let time = self.time.ok_or(BookingError::NoTimeSelected)?;

        let professional = match &self.selection {
            ProfessionalSelection::Any => None,
            ProfessionalSelection::Professional(id) => self.location.professional(id).cloned(),
        };

        Ok(CartItem::new(
            service.clone(),
            professional,
            self.date,
            time,
            self.location.name.clone(),
        ))
    }

    fn revalidate_date(&mut self) {
        if self.step != BookingStep::DateTime || self.is_date_open(self.date) {
            return;
        }
        if let Some(next) = next_available_date(
            self.today,
            self.options.horizon_days(),
            &self.location.professionals,
            &self.selection,
        ) {
            debug!(from = %self.date, to = %next, "selected date closed, moved to next open date");
            self.date = next;
            self.time = None;
        }
    }

    fn ensure_offered(&self, time: TimeOfDay) -> Result<()> {
        if self.available_slots().contains(&time) {
            Ok(())
        } else {
            Err(BookingError::SlotUnavailable {
                date: self.date,
                time,
            })
        }
    }

    fn expect_step(&self, expected: BookingStep) -> Result<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(BookingError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }
}
