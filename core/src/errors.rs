//! Errors raised by the association.

use thiserror::Error;

use airlink_types::{AirportId, FlightId};

/// A link request named something the network never registered.
///
/// Returned before any edge is touched, so a failed link leaves both sides
/// exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("unknown flight {id}")]
    UnknownFlight { id: FlightId },
    #[error("unknown airport {id}")]
    UnknownAirport { id: AirportId },
}

/// First violation found by [`FlightNetwork::verify`](crate::FlightNetwork::verify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    #[error("{flight} lists {airport}, which does not exist")]
    DanglingAirport { flight: FlightId, airport: AirportId },
    #[error("{airport} lists {flight}, which does not exist")]
    DanglingFlight { airport: AirportId, flight: FlightId },
    #[error("{flight} lists {airport}, but {airport} does not list an equal flight")]
    MissingReverseEdge { flight: FlightId, airport: AirportId },
    #[error("{airport} lists a flight equal to {flight} more than once")]
    DuplicateReverseEdge { airport: AirportId, flight: FlightId },
    #[error("{airport} lists {flight}, but no equal flight lists {airport}")]
    UnbackedReverseEdge { airport: AirportId, flight: FlightId },
}
