//! Flight value.
//!
//! A flight is identified by value: its name and date. The airports it visits
//! are not part of the value; they live in the network that owns the edges.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::NonEmptyString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlightError {
    #[error("flight name must not be empty")]
    EmptyName,
    #[error("flight date must not be empty")]
    EmptyDate,
}

/// A scheduled flight.
///
/// Equality compares `name` and `date` only. Both are stored exactly as given;
/// the date is opaque and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flight {
    name: NonEmptyString,
    date: NonEmptyString,
}

impl Flight {
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Result<Self, FlightError> {
        let name = NonEmptyString::new(name).map_err(|_| FlightError::EmptyName)?;
        let date = NonEmptyString::new(date).map_err(|_| FlightError::EmptyDate)?;
        Ok(Self { name, date })
    }

    #[must_use]
    pub fn from_parts(name: NonEmptyString, date: NonEmptyString) -> Self {
        Self { name, date }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[must_use]
    pub fn date(&self) -> &str {
        self.date.as_str()
    }
}

/// Renders the `"<name>, <date>"` header line.
impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.date)
    }
}
