//! WASM bindings for booking-engine.
//!
//! Exposes the open-date check, slot computation and next-open-date scan to
//! the browser booking page via `wasm-bindgen`. Professionals are passed as a
//! JSON array string in the catalog wire format (camelCase, schedule as an
//! array or as serialized text); dates are `YYYY-MM-DD`; the selection is a
//! professional id or `"any"`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p booking-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg/ \
//!   target/wasm32-unknown-unknown/release/booking_engine_wasm.wasm
//! ```

use booking_engine::catalog::Professional;
use booking_engine::selection::ProfessionalSelection;
use booking_engine::slots::{SlotOptions, DEFAULT_HORIZON_DAYS};
use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DateAvailabilityDto {
    date: String,
    open: bool,
}

// ---------------------------------------------------------------------------
// Helpers: parse boundary inputs
// ---------------------------------------------------------------------------

fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

fn parse_professionals_json(json: &str) -> Result<Vec<Professional>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid professionals JSON: {}", e)))
}

fn parse_selection(s: &str) -> Result<ProfessionalSelection, JsValue> {
    s.parse().map_err(|e| JsValue::from_str(&format!("{}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Whether any targeted professional works on `date`.
#[wasm_bindgen(js_name = "isDateOpen")]
pub fn is_date_open(
    date: &str,
    professionals_json: &str,
    selection: &str,
) -> Result<bool, JsValue> {
    let date = parse_date(date)?;
    let professionals = parse_professionals_json(professionals_json)?;
    let selection = parse_selection(selection)?;

    Ok(booking_engine::is_date_open(date, &professionals, &selection))
}

/// Bookable start times for a service of `duration_minutes` on `date`.
///
/// Returns a JSON array of `"HH:MM"` strings in ascending order. The grid is
/// 30 minutes unless `interval_minutes` is given.
#[wasm_bindgen(js_name = "computeAvailableSlots")]
pub fn compute_available_slots(
    date: &str,
    duration_minutes: u32,
    professionals_json: &str,
    selection: &str,
    interval_minutes: Option<u32>,
) -> Result<String, JsValue> {
    let date = parse_date(date)?;
    let professionals = parse_professionals_json(professionals_json)?;
    let selection = parse_selection(selection)?;
    let options = match interval_minutes {
        Some(interval) => SlotOptions::new(interval, DEFAULT_HORIZON_DAYS)
            .map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => SlotOptions::default(),
    };

    let slots = booking_engine::compute_available_slots_with(
        date,
        duration_minutes,
        &professionals,
        &selection,
        &options,
    );

    to_json(&slots)
}

/// First open date among `horizon_days` dates starting at `from`
/// (14 when omitted), as `YYYY-MM-DD`, or `undefined` when none is open.
#[wasm_bindgen(js_name = "nextAvailableDate")]
pub fn next_available_date(
    from: &str,
    horizon_days: Option<u32>,
    professionals_json: &str,
    selection: &str,
) -> Result<Option<String>, JsValue> {
    let from = parse_date(from)?;
    let professionals = parse_professionals_json(professionals_json)?;
    let selection = parse_selection(selection)?;

    let next = booking_engine::next_available_date(
        from,
        horizon_days.unwrap_or(DEFAULT_HORIZON_DAYS),
        &professionals,
        &selection,
    );

    Ok(next.map(|d| d.format("%Y-%m-%d").to_string()))
}

/// The date-picker strip: a JSON array of `{date, open}` objects for
/// `horizon_days` dates starting at `from` (14 when omitted).
#[wasm_bindgen(js_name = "openDates")]
pub fn open_dates(
    from: &str,
    horizon_days: Option<u32>,
    professionals_json: &str,
    selection: &str,
) -> Result<String, JsValue> {
    let from = parse_date(from)?;
    let professionals = parse_professionals_json(professionals_json)?;
    let selection = parse_selection(selection)?;

    let dtos: Vec<DateAvailabilityDto> = booking_engine::open_dates(
        from,
        horizon_days.unwrap_or(DEFAULT_HORIZON_DAYS),
        &professionals,
        &selection,
    )
    .into_iter()
    .map(|(date, open)| DateAvailabilityDto {
        date: date.format("%Y-%m-%d").to_string(),
        open,
    })
    .collect();

    to_json(&dtos)
}
