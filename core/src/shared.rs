//! Thread-safe handle to a [`FlightNetwork`].
//!
//! Each mutating call takes the lock exactly once, so a link's forward and
//! back-edge land together: readers see either neither or both.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use airlink_types::{Airport, AirportId, Flight, FlightId};

use crate::errors::LinkError;
use crate::network::{FlightNetwork, LinkOutcome};

#[derive(Debug, Clone, Default)]
pub struct SharedNetwork {
    inner: Arc<Mutex<FlightNetwork>>,
}

impl SharedNetwork {
    #[must_use]
    pub fn new(network: FlightNetwork) -> Self {
        Self {
            inner: Arc::new(Mutex::new(network)),
        }
    }

    pub fn add_flight(&self, flight: Flight) -> FlightId {
        self.lock().add_flight(flight)
    }

    pub fn add_airport(&self, airport: Airport) -> AirportId {
        self.lock().add_airport(airport)
    }

    pub fn link(&self, flight: FlightId, airport: AirportId) -> Result<LinkOutcome, LinkError> {
        self.lock().link(flight, airport)
    }

    /// Run `f` against a consistent view of the network.
    pub fn read<R>(&self, f: impl FnOnce(&FlightNetwork) -> R) -> R {
        f(&self.lock())
    }

    /// Owned copy of the current network.
    #[must_use]
    pub fn snapshot(&self) -> FlightNetwork {
        self.lock().clone()
    }

    /// Unwrap the network if this is the last handle.
    pub fn try_into_inner(self) -> Result<FlightNetwork, Self> {
        Arc::try_unwrap(self.inner)
            .map(|mutex| mutex.into_inner().unwrap_or_else(PoisonError::into_inner))
            .map_err(|inner| Self { inner })
    }

    // `link` validates before it writes, so a panicking holder cannot leave a
    // half-applied link behind.
    fn lock(&self) -> MutexGuard<'_, FlightNetwork> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<FlightNetwork> for SharedNetwork {
    fn from(network: FlightNetwork) -> Self {
        Self::new(network)
    }
}
