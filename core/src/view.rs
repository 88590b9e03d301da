//! Read-only views into a [`FlightNetwork`].
//!
//! Views borrow the network, so edges can be read but never changed through
//! them. Use the `*_snapshot` methods for an owned copy that outlives the
//! borrow.

use std::fmt;

use airlink_types::{Airport, AirportId, Flight, FlightId};

use crate::network::{AirportNode, FlightNetwork, FlightNode};

/// A registered flight together with its airports.
#[derive(Clone, Copy)]
pub struct FlightView<'a> {
    network: &'a FlightNetwork,
    id: FlightId,
    node: &'a FlightNode,
}

impl<'a> FlightView<'a> {
    pub(crate) fn new(network: &'a FlightNetwork, id: FlightId, node: &'a FlightNode) -> Self {
        Self { network, id, node }
    }

    #[must_use]
    pub fn id(&self) -> FlightId {
        self.id
    }

    #[must_use]
    pub fn flight(&self) -> &'a Flight {
        &self.node.flight
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        self.node.flight.name()
    }

    #[must_use]
    pub fn date(&self) -> &'a str {
        self.node.flight.date()
    }

    /// Forward edges in link order. May repeat an id when the network keeps
    /// duplicate forward edges.
    #[must_use]
    pub fn airport_ids(&self) -> &'a [AirportId] {
        &self.node.airports
    }

    pub fn airports(&self) -> impl Iterator<Item = AirportView<'a>> + use<'a> {
        let (network, node) = (self.network, self.node);
        node.airports
            .iter()
            .filter_map(move |&id| network.airport(id))
    }

    /// Owned copy of the airports, in link order.
    #[must_use]
    pub fn airports_snapshot(&self) -> Vec<Airport> {
        self.airports().map(|view| view.airport().clone()).collect()
    }
}

impl fmt::Debug for FlightView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlightView")
            .field("id", &self.id)
            .field("flight", &self.node.flight)
            .field("airports", &self.node.airports)
            .finish()
    }
}

/// `"<name>, <date>"` followed by one line per airport name, in link order.
/// No trailing newline.
impl fmt::Display for FlightView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.node.flight)?;
        for airport in self.airports() {
            write!(f, "\n{}", airport.name())?;
        }
        Ok(())
    }
}

/// A registered airport together with the flights listing it.
#[derive(Clone, Copy)]
pub struct AirportView<'a> {
    network: &'a FlightNetwork,
    id: AirportId,
    node: &'a AirportNode,
}

impl<'a> AirportView<'a> {
    pub(crate) fn new(network: &'a FlightNetwork, id: AirportId, node: &'a AirportNode) -> Self {
        Self { network, id, node }
    }

    #[must_use]
    pub fn id(&self) -> AirportId {
        self.id
    }

    #[must_use]
    pub fn airport(&self) -> &'a Airport {
        &self.node.airport
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        self.node.airport.name()
    }

    /// Back-edges in the order they were completed.
    #[must_use]
    pub fn flight_ids(&self) -> &'a [FlightId] {
        &self.node.flights
    }

    pub fn flights(&self) -> impl Iterator<Item = FlightView<'a>> + use<'a> {
        let (network, node) = (self.network, self.node);
        node.flights
            .iter()
            .filter_map(move |&id| network.flight(id))
    }

    #[must_use]
    pub fn flights_snapshot(&self) -> Vec<Flight> {
        self.flights().map(|view| view.flight().clone()).collect()
    }

    /// Whether a flight equal to `flight` (same name and date) is listed.
    #[must_use]
    pub fn contains(&self, flight: &Flight) -> bool {
        self.network.lists_equal_flight(self.id, flight)
    }
}

impl fmt::Debug for AirportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirportView")
            .field("id", &self.id)
            .field("airport", &self.node.airport)
            .field("flights", &self.node.flights)
            .finish()
    }
}

impl fmt::Display for AirportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
