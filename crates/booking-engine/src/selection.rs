//! Which professionals a booking query covers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::Professional;
use crate::error::{BookingError, Result};

/// Sentinel used on the wire for "no preference".
pub const ANY: &str = "any";

/// A specific professional, or any professional at the location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ProfessionalSelection {
    /// Union availability across every professional at the location.
    #[default]
    Any,
    /// Only the professional with this id.
    Professional(String),
}

impl ProfessionalSelection {
    pub fn professional(id: impl Into<String>) -> Self {
        Self::Professional(id.into())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Narrow `professionals` to the ones this selection covers.
    ///
    /// An id that matches nobody yields an empty iterator.
    pub fn targets<'a>(
        &'a self,
        professionals: &'a [Professional],
    ) -> impl Iterator<Item = &'a Professional> + 'a {
        professionals.iter().filter(move |p| match self {
            Self::Any => true,
            Self::Professional(id) => p.id == *id,
        })
    }
}

impl fmt::Display for ProfessionalSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(ANY),
            Self::Professional(id) => f.write_str(id),
        }
    }
}

impl FromStr for ProfessionalSelection {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" => Err(BookingError::InvalidSelection(s.to_string())),
            ANY => Ok(Self::Any),
            id => Ok(Self::Professional(id.to_string())),
        }
    }
}

impl Serialize for ProfessionalSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProfessionalSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
