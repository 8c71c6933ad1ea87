//! Catalog model and the store boundary that loads it.
//!
//! Locations own their services, professionals, subscription plans and
//! reviews. Everything here is read-only input to the slot engine.
//!
//! The backing store returns schedules either as a JSON array or as the same
//! array serialized into a text column. Both forms are normalized here, so the
//! engine only ever sees a structured [`Schedule`]. A schedule entry that
//! cannot be decoded is dropped on its own; the rest of the week survives.
//!
//! Optional fields may be missing or explicitly `null` (a freshly created
//! location has no professionals yet); both load as empty.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{BookingError, Result};
use crate::schedule::{Schedule, WorkDay};

/// A bookable service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Price in the location's currency unit.
    pub price: f64,
    pub duration_min: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// A professional working at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    pub id: String,
    /// Owning location. Filled from the enclosing location when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule: Schedule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, deserialize_with = "text_list")]
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub author: String,
    /// 1 to 5.
    pub rating: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A physical barbershop site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coordinates: Coordinates,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub opening_hours: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<Service>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub professionals: Vec<Professional>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subscriptions: Vec<Subscription>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviews: Vec<Review>,
}

impl Location {
    /// Look up a service offered here.
    pub fn service(&self, service_id: &str) -> Result<&Service> {
        self.services
            .iter()
            .find(|s| s.id == service_id)
            .ok_or_else(|| BookingError::UnknownService(service_id.to_string()))
    }

    pub fn professional(&self, professional_id: &str) -> Option<&Professional> {
        self.professionals.iter().find(|p| p.id == professional_id)
    }
}

/// All locations known to the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    locations: Vec<Location>,
}

impl Catalog {
    pub fn new(locations: Vec<Location>) -> Self {
        let mut catalog = Self { locations };
        catalog.assign_owners();
        catalog
    }

    /// Parse a catalog document: a JSON array of locations.
    ///
    /// # Errors
    /// Returns `BookingError::Catalog` when the document itself is not valid.
    /// Individual schedule entries that fail to decode are skipped, not reported.
    pub fn from_json(json: &str) -> Result<Self> {
        let locations: Vec<Location> = serde_json::from_str(json)?;
        Ok(Self::new(locations))
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, location_id: &str) -> Result<&Location> {
        self.locations
            .iter()
            .find(|l| l.id == location_id)
            .ok_or_else(|| BookingError::UnknownLocation(location_id.to_string()))
    }

    fn assign_owners(&mut self) {
        for location in &mut self.locations {
            for professional in &mut location.professionals {
                if professional.unit_id.is_none() {
                    professional.unit_id = Some(location.id.clone());
                }
            }
        }
    }
}

/// Normalize a raw schedule value from the store into a [`Schedule`].
///
/// Accepts an array of work-day objects, the same array serialized as text,
/// or null. Null entries, entries that fail to decode and entries whose
/// weekday index is outside 0..=6 are dropped.
pub fn normalize_schedule(raw: Value) -> Schedule {
    let entries = match raw {
        Value::Null => return Schedule::default(),
        Value::Array(items) => items,
        Value::String(text) if text.trim().is_empty() => return Schedule::default(),
        Value::String(text) => match serde_json::from_str::<Value>(&text) {
            Ok(Value::Array(items)) => items,
            Ok(Value::Null) => return Schedule::default(),
            Ok(other) => {
                warn!(kind = json_kind(&other), "discarding schedule text that is not an array");
                return Schedule::default();
            }
            Err(e) => {
                warn!(error = %e, "discarding unparseable schedule text");
                return Schedule::default();
            }
        },
        other => {
            warn!(kind = json_kind(&other), "discarding schedule that is not an array");
            return Schedule::default();
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter(|(_, entry)| !entry.is_null())
        .filter_map(|(index, entry)| match serde_json::from_value::<WorkDay>(entry) {
            Ok(day) if day.day_of_week > 6 => {
                warn!(
                    index,
                    day_of_week = day.day_of_week,
                    "skipping schedule entry with out-of-range weekday"
                );
                None
            }
            Ok(day) => Some(day),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed schedule entry");
                None
            }
        })
        .collect()
}

impl<'de> Deserialize<'de> for Schedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(normalize_schedule)
    }
}

/// Explicit `null` loads as the field's default, same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A list of strings stored either as a JSON array or as serialized text.
fn text_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let parse_items = |items: Vec<Value>| -> Vec<String> {
        items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect()
    };

    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(parse_items(items)),
        Value::String(text) if text.trim().is_empty() => Ok(Vec::new()),
        Value::String(text) => match serde_json::from_str::<Value>(&text) {
            Ok(Value::Array(items)) => Ok(parse_items(items)),
            _ => Err(serde::de::Error::custom(format!(
                "expected a JSON array of strings, got text {text:?}"
            ))),
        },
        _ => Ok(Vec::new()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
