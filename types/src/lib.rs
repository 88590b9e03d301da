//! Core domain values for airlink.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! The flight/airport association itself lives in `airlink-core`; everything here is
//! plain data that any layer can hold.

mod airport;
mod flight;
mod ids;
mod proofs;
pub mod settings;

pub use airport::{Airport, AirportError};
pub use flight::{Flight, FlightError};
pub use ids::{AirportId, FlightId};
pub use proofs::{EmptyStringError, NonEmptyString};
pub use settings::{ForwardDuplicates, LinkSettings, UnknownForwardDuplicates};
