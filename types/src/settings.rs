//! Resolved link settings shared across crates.
//!
//! These types represent fully-validated configuration state. The raw TOML
//! structs (with `Option` fields) live in `airlink-config`, which resolves
//! them into these types at the parse boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What linking does when a flight already lists the airport.
///
/// The reverse side never holds duplicates; this only governs the forward
/// list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForwardDuplicates {
    /// Append on every link, so repeated links show up repeatedly.
    #[default]
    Preserve,
    /// Append only if the airport is not listed yet.
    Collapse,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown forward duplicate policy `{0}` (expected `preserve` or `collapse`)")]
pub struct UnknownForwardDuplicates(pub String);

impl ForwardDuplicates {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preserve => "preserve",
            Self::Collapse => "collapse",
        }
    }
}

impl FromStr for ForwardDuplicates {
    type Err = UnknownForwardDuplicates;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "collapse" => Ok(Self::Collapse),
            _ => Err(UnknownForwardDuplicates(s.to_owned())),
        }
    }
}

impl fmt::Display for ForwardDuplicates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policies applied by a network when linking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkSettings {
    forward_duplicates: ForwardDuplicates,
}

impl LinkSettings {
    #[must_use]
    pub const fn new(forward_duplicates: ForwardDuplicates) -> Self {
        Self { forward_duplicates }
    }

    #[must_use]
    pub const fn forward_duplicates(self) -> ForwardDuplicates {
        self.forward_duplicates
    }

    #[must_use]
    pub const fn with_forward_duplicates(mut self, policy: ForwardDuplicates) -> Self {
        self.forward_duplicates = policy;
        self
    }
}
