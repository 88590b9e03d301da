//! Flight/airport association for airlink.
//!
//! [`FlightNetwork`] owns flights, airports, and both directions of the edges
//! between them. [`FlightNetwork::link`] is the only way to add an edge and it
//! always completes the back-edge, so every airport a flight lists also lists
//! that flight. [`SharedNetwork`] puts the same network behind a lock for use
//! across threads.

pub mod errors;
mod network;
mod shared;
mod view;

pub use errors::{ConsistencyError, LinkError};
pub use network::{EdgeChange, FlightNetwork, LinkOutcome};
pub use shared::SharedNetwork;
pub use view::{AirportView, FlightView};

pub use airlink_types::{
    Airport, AirportError, AirportId, Flight, FlightError, FlightId, ForwardDuplicates,
    LinkSettings, NonEmptyString,
};
