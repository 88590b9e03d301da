use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::NonEmptyString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AirportError {
    #[error("airport name must not be empty")]
    EmptyName,
}

/// An airport a flight can visit.
///
/// Carries only display data. Identity comes from the [`AirportId`](crate::AirportId)
/// a network assigns on registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Airport {
    name: NonEmptyString,
}

impl Airport {
    pub fn new(name: impl Into<String>) -> Result<Self, AirportError> {
        NonEmptyString::new(name)
            .map(Self::from_name)
            .map_err(|_| AirportError::EmptyName)
    }

    #[must_use]
    pub fn from_name(name: NonEmptyString) -> Self {
        Self { name }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
