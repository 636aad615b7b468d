//! Refresh controller
//!
//! Owns the current location, search radius and result set. Every distinct
//! location or radius change issues a new fetch tagged with a monotonically
//! increasing generation. A completed fetch is committed only if its
//! generation is still the latest one issued, so an older request that
//! resolves late can never overwrite newer data. Failures are logged and
//! recorded, and the previous result set is kept.

use std::sync::Arc;

use domain::{Coordinate, RadiusMiles, Restaurant};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{LocationPort, LocationReading, PoiPort};

/// Message recorded when location access is refused
pub const LOCATION_DENIED_MESSAGE: &str = "Location permission denied.";

/// A fetch issued by the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchTicket {
    generation: u64,
    location: Coordinate,
    radius: RadiusMiles,
}

impl FetchTicket {
    /// Generation this fetch was issued under
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Center of the search
    #[must_use]
    pub const fn location(&self) -> Coordinate {
        self.location
    }

    /// Radius of the search
    #[must_use]
    pub const fn radius(&self) -> RadiusMiles {
        self.radius
    }
}

/// Point-in-time view of the controller state
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshSnapshot {
    /// Current location, if one has been obtained
    pub location: Option<Coordinate>,
    /// Current search radius
    pub radius: RadiusMiles,
    /// Latest committed result set
    pub results: Vec<Restaurant>,
    /// Most recent failure of the latest fetch, or the location denial
    pub last_error: Option<String>,
    /// Whether the latest issued fetch has not resolved yet
    pub in_flight: bool,
    /// Generation of the committed result set (`None` before the first commit)
    pub committed_generation: Option<u64>,
}

#[derive(Debug)]
struct RefreshState {
    location: Option<Coordinate>,
    radius: RadiusMiles,
    results: Vec<Restaurant>,
    last_error: Option<String>,
    /// Last generation handed out; 0 means nothing issued yet
    latest_generation: u64,
    /// Last generation that resolved while still being the latest
    settled_generation: u64,
    committed_generation: Option<u64>,
}

impl RefreshState {
    fn issue(&mut self) -> Option<FetchTicket> {
        let location = self.location?;
        self.latest_generation += 1;
        Some(FetchTicket {
            generation: self.latest_generation,
            location,
            radius: self.radius,
        })
    }
}

/// Keeps the nearby result set in sync with location and radius changes
#[derive(Clone)]
pub struct RefreshController {
    poi: Arc<dyn PoiPort>,
    state: Arc<Mutex<RefreshState>>,
}

impl std::fmt::Debug for RefreshController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshController")
            .field("poi", &"dyn PoiPort")
            .field("state", &*self.state.lock())
            .finish()
    }
}

impl RefreshController {
    /// Create a controller with the default radius and no location
    #[must_use]
    pub fn new(poi: Arc<dyn PoiPort>) -> Self {
        Self::with_radius(poi, RadiusMiles::default())
    }

    /// Create a controller with an initial radius and no location
    #[must_use]
    pub fn with_radius(poi: Arc<dyn PoiPort>, radius: RadiusMiles) -> Self {
        Self {
            poi,
            state: Arc::new(Mutex::new(RefreshState {
                location: None,
                radius,
                results: Vec::new(),
                last_error: None,
                latest_generation: 0,
                settled_generation: 0,
                committed_generation: None,
            })),
        }
    }

    /// Set the current location, issuing a fetch if it changed
    ///
    /// Returns the ticket of the issued fetch. The caller is responsible for
    /// running it (see [`Self::run`]); [`Self::set_location`] does both.
    pub fn update_location(&self, location: Coordinate) -> Option<FetchTicket> {
        let mut state = self.state.lock();
        if state.location == Some(location) {
            debug!(%location, "Location unchanged, not refreshing");
            return None;
        }
        state.location = Some(location);
        state.last_error = None;
        state.issue()
    }

    /// Set the search radius, issuing a fetch if it changed and a location is known
    pub fn update_radius(&self, radius: RadiusMiles) -> Option<FetchTicket> {
        let mut state = self.state.lock();
        if state.radius == radius {
            debug!(%radius, "Radius unchanged, not refreshing");
            return None;
        }
        state.radius = radius;
        let ticket = state.issue();
        if ticket.is_none() {
            debug!(%radius, "No location yet, radius stored without fetching");
        }
        ticket
    }

    /// Apply a location reading
    ///
    /// A denial is recorded and no fetch is issued.
    pub fn update_from_reading(&self, reading: LocationReading) -> Option<FetchTicket> {
        match reading {
            LocationReading::Available(location) => self.update_location(location),
            LocationReading::Denied => {
                warn!("Location permission denied, not fetching");
                self.state.lock().last_error = Some(LOCATION_DENIED_MESSAGE.to_string());
                None
            },
        }
    }

    /// Commit the outcome of a fetch
    ///
    /// Returns `true` if the outcome belonged to the latest issued fetch and
    /// was applied. Outcomes of superseded fetches are discarded.
    pub fn commit(
        &self,
        ticket: &FetchTicket,
        outcome: Result<Vec<Restaurant>, ApplicationError>,
    ) -> bool {
        let mut state = self.state.lock();
        if ticket.generation != state.latest_generation {
            debug!(
                generation = ticket.generation,
                latest = state.latest_generation,
                "Discarding stale fetch result"
            );
            return false;
        }

        state.settled_generation = ticket.generation;
        match outcome {
            Ok(results) => {
                info!(
                    generation = ticket.generation,
                    count = results.len(),
                    radius = %ticket.radius,
                    "Committed nearby restaurants"
                );
                state.results = results;
                state.committed_generation = Some(ticket.generation);
                state.last_error = None;
            },
            Err(e) => {
                warn!(
                    generation = ticket.generation,
                    error = %e,
                    "Refresh failed, keeping previous results"
                );
                state.last_error = Some(e.to_string());
            },
        }
        true
    }

    /// Perform the fetch described by `ticket` and commit its outcome
    #[instrument(skip(self), fields(generation = ticket.generation))]
    pub async fn run(&self, ticket: FetchTicket) -> bool {
        let outcome = self
            .poi
            .fetch_nearby(ticket.location, ticket.radius.meters())
            .await;
        self.commit(&ticket, outcome)
    }

    /// Set the current location and spawn the resulting fetch
    ///
    /// Must be called from within a Tokio runtime. The handle resolves to
    /// whether the fetch was committed.
    pub fn set_location(&self, location: Coordinate) -> Option<JoinHandle<bool>> {
        self.update_location(location).map(|t| self.spawn(t))
    }

    /// Set the search radius and spawn the resulting fetch
    ///
    /// Must be called from within a Tokio runtime.
    pub fn set_radius(&self, radius: RadiusMiles) -> Option<JoinHandle<bool>> {
        self.update_radius(radius).map(|t| self.spawn(t))
    }

    /// Read the location once from `provider` and apply it
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn acquire_location(&self, provider: &dyn LocationPort) -> Option<JoinHandle<bool>> {
        let reading = provider.current_location().await;
        self.update_from_reading(reading).map(|t| self.spawn(t))
    }

    fn spawn(&self, ticket: FetchTicket) -> JoinHandle<bool> {
        let controller = self.clone();
        tokio::spawn(async move { controller.run(ticket).await })
    }

    /// Latest committed result set
    #[must_use]
    pub fn results(&self) -> Vec<Restaurant> {
        self.state.lock().results.clone()
    }

    /// Current location, if known
    #[must_use]
    pub fn location(&self) -> Option<Coordinate> {
        self.state.lock().location
    }

    /// Current search radius
    #[must_use]
    pub fn radius(&self) -> RadiusMiles {
        self.state.lock().radius
    }

    /// Most recent recorded failure
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.state.lock().last_error.clone()
    }

    /// Capture the full state at once
    #[must_use]
    pub fn snapshot(&self) -> RefreshSnapshot {
        let state = self.state.lock();
        RefreshSnapshot {
            location: state.location,
            radius: state.radius,
            results: state.results.clone(),
            last_error: state.last_error.clone(),
            in_flight: state.latest_generation != state.settled_generation,
            committed_generation: state.committed_generation,
        }
    }
}
