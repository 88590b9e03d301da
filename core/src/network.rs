//! The flight/airport association.
//!
//! [`FlightNetwork`] is the single owner of both edge collections. Flights and
//! airports never hold their own mutable lists; callers read them through
//! [`FlightView`] and [`AirportView`] and change them only through
//! [`FlightNetwork::link`], which updates both sides in one call. A one-sided
//! edge is therefore never observable.
//!
//! The network is append-only: there is no unlink.

use tracing::{debug, trace};

use airlink_types::{Airport, AirportId, Flight, FlightId, ForwardDuplicates, LinkSettings};

use crate::errors::{ConsistencyError, LinkError};
use crate::view::{AirportView, FlightView};

#[derive(Debug, Clone)]
pub(crate) struct FlightNode {
    pub(crate) flight: Flight,
    pub(crate) airports: Vec<AirportId>,
}

#[derive(Debug, Clone)]
pub(crate) struct AirportNode {
    pub(crate) airport: Airport,
    pub(crate) flights: Vec<FlightId>,
}

impl AirportNode {
    /// Terminal append of a back-edge. Never reaches into the forward side.
    fn add_flight(&mut self, flight: FlightId) {
        self.flights.push(flight);
    }
}

/// What a link did to one side of the association.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeChange {
    Appended,
    AlreadyPresent,
}

impl EdgeChange {
    #[must_use]
    pub const fn is_appended(self) -> bool {
        matches!(self, Self::Appended)
    }
}

/// Result of [`FlightNetwork::link`], one entry per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkOutcome {
    pub forward: EdgeChange,
    pub reverse: EdgeChange,
}

/// Owner of every registered flight and airport and of the edges between them.
///
/// Invariant: for every airport `a` in a flight's forward list, `a`'s reverse
/// list contains a flight equal (by name and date) to that flight, exactly once.
///
/// The `revision` counter is bumped on every mutation, so it can serve as a
/// cache key for anything derived from the network.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    flights: Vec<FlightNode>,
    airports: Vec<AirportNode>,
    settings: LinkSettings,
    revision: usize,
}

impl FlightNetwork {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: LinkSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn settings(&self) -> LinkSettings {
        self.settings
    }

    #[inline]
    #[must_use]
    pub fn revision(&self) -> usize {
        self.revision
    }

    /// Register a flight with an empty airport list.
    ///
    /// Flights equal by value may be registered more than once; each gets its
    /// own id and forward list, but they share back-edges (see [`Self::link`]).
    pub fn add_flight(&mut self, flight: Flight) -> FlightId {
        let id = FlightId::new(self.flights.len() as u64);
        trace!(%id, %flight, "Registered flight");
        self.flights.push(FlightNode {
            flight,
            airports: Vec::new(),
        });
        self.bump();
        id
    }

    pub fn add_airport(&mut self, airport: Airport) -> AirportId {
        let id = AirportId::new(self.airports.len() as u64);
        trace!(%id, %airport, "Registered airport");
        self.airports.push(AirportNode {
            airport,
            flights: Vec::new(),
        });
        self.bump();
        id
    }

    /// Link `flight` to `airport`, completing the back-edge if needed.
    ///
    /// The forward edge follows [`LinkSettings::forward_duplicates`]: under
    /// [`ForwardDuplicates::Preserve`] it is appended on every call, under
    /// [`ForwardDuplicates::Collapse`] only the first time.
    ///
    /// The back-edge is appended only when the airport does not already list a
    /// flight *equal* to this one. Membership is by value, not by id, so linking
    /// a second flight with the same name and date to the same airport adds a
    /// forward edge but no new back-edge.
    ///
    /// Both ids are checked before anything is written; on error neither side
    /// changes.
    pub fn link(
        &mut self,
        flight: FlightId,
        airport: AirportId,
    ) -> Result<LinkOutcome, LinkError> {
        let Some(flight_index) = self.flight_index(flight) else {
            return Err(LinkError::UnknownFlight { id: flight });
        };
        let Some(airport_index) = self.airport_index(airport) else {
            return Err(LinkError::UnknownAirport { id: airport });
        };

        let policy = self.settings.forward_duplicates();
        let node = &mut self.flights[flight_index];
        let collapse = policy == ForwardDuplicates::Collapse;
        let forward = if collapse && node.airports.contains(&airport) {
            EdgeChange::AlreadyPresent
        } else {
            node.airports.push(airport);
            EdgeChange::Appended
        };

        let reverse = if self.lists_equal_flight(airport, &self.flights[flight_index].flight) {
            EdgeChange::AlreadyPresent
        } else {
            self.airports[airport_index].add_flight(flight);
            EdgeChange::Appended
        };

        if forward.is_appended() || reverse.is_appended() {
            self.bump();
        }

        debug!(
            %flight,
            %airport,
            ?forward,
            ?reverse,
            revision = self.revision,
            "Linked flight to airport"
        );
        debug_assert!(
            self.lists_equal_flight(airport, &self.flights[flight_index].flight),
            "link left {airport} without a back-edge to {flight}"
        );

        Ok(LinkOutcome { forward, reverse })
    }

    #[must_use]
    pub fn flight(&self, id: FlightId) -> Option<FlightView<'_>> {
        self.flight_node(id)
            .map(|node| FlightView::new(self, id, node))
    }

    #[must_use]
    pub fn airport(&self, id: AirportId) -> Option<AirportView<'_>> {
        self.airport_node(id)
            .map(|node| AirportView::new(self, id, node))
    }

    /// All flights in registration order.
    pub fn flights(&self) -> impl Iterator<Item = FlightView<'_>> + '_ {
        self.flights
            .iter()
            .enumerate()
            .map(|(index, node)| FlightView::new(self, FlightId::new(index as u64), node))
    }

    /// All airports in registration order.
    pub fn airports(&self) -> impl Iterator<Item = AirportView<'_>> + '_ {
        self.airports
            .iter()
            .enumerate()
            .map(|(index, node)| AirportView::new(self, AirportId::new(index as u64), node))
    }

    /// Registered flights equal by value to `flight`.
    pub fn find_flights<'a>(
        &'a self,
        flight: &'a Flight,
    ) -> impl Iterator<Item = FlightView<'a>> + 'a {
        self.flights().filter(move |view| view.flight() == flight)
    }

    #[must_use]
    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    #[must_use]
    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    /// Number of forward edges, duplicates included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.flights.iter().map(|node| node.airports.len()).sum()
    }

    /// Check both directions of the association.
    ///
    /// Every forward edge must have a back-edge to an equal flight; every
    /// back-edge must point at an existing flight, appear once per flight value,
    /// and be backed by a forward edge of an equal flight.
    pub fn verify(&self) -> Result<(), ConsistencyError> {
        for (index, node) in self.flights.iter().enumerate() {
            let flight = FlightId::new(index as u64);
            for &airport in &node.airports {
                if self.airport_node(airport).is_none() {
                    return Err(ConsistencyError::DanglingAirport { flight, airport });
                }
                if !self.lists_equal_flight(airport, &node.flight) {
                    return Err(ConsistencyError::MissingReverseEdge { flight, airport });
                }
            }
        }

        for (index, node) in self.airports.iter().enumerate() {
            let airport = AirportId::new(index as u64);
            let mut seen: Vec<&Flight> = Vec::with_capacity(node.flights.len());
            for &flight in &node.flights {
                let Some(listed) = self.flight_node(flight) else {
                    return Err(ConsistencyError::DanglingFlight { airport, flight });
                };
                if seen.contains(&&listed.flight) {
                    return Err(ConsistencyError::DuplicateReverseEdge { airport, flight });
                }
                seen.push(&listed.flight);

                let backed = self.flights.iter().any(|other| {
                    other.flight == listed.flight && other.airports.contains(&airport)
                });
                if !backed {
                    return Err(ConsistencyError::UnbackedReverseEdge { airport, flight });
                }
            }
        }

        Ok(())
    }

    fn flight_index(&self, id: FlightId) -> Option<usize> {
        id.index().filter(|&index| index < self.flights.len())
    }

    fn airport_index(&self, id: AirportId) -> Option<usize> {
        id.index().filter(|&index| index < self.airports.len())
    }

    fn flight_node(&self, id: FlightId) -> Option<&FlightNode> {
        self.flight_index(id).map(|index| &self.flights[index])
    }

    fn airport_node(&self, id: AirportId) -> Option<&AirportNode> {
        self.airport_index(id).map(|index| &self.airports[index])
    }

    /// Membership predicate of the reverse side, by value.
    pub(crate) fn lists_equal_flight(&self, airport: AirportId, flight: &Flight) -> bool {
        self.airport_node(airport).is_some_and(|node| {
            node.flights.iter().any(|&listed| {
                self.flight_node(listed)
                    .is_some_and(|node| node.flight == *flight)
            })
        })
    }

    #[inline]
    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
