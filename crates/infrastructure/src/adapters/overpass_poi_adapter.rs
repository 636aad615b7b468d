//! Overpass adapter - Implements PoiPort using integration_overpass

use application::error::ApplicationError;
use application::ports::PoiPort;
use async_trait::async_trait;
use domain::{Coordinate, Restaurant};
use integration_overpass::{OverpassClient, OverpassConfig, OverpassError, PoiClient};
use tracing::{debug, instrument};

/// Adapter for nearby restaurant lookups using the Overpass API
pub struct OverpassPoiAdapter {
    client: Box<dyn PoiClient>,
}

impl std::fmt::Debug for OverpassPoiAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverpassPoiAdapter")
            .field("client", &"dyn PoiClient")
            .finish()
    }
}

impl OverpassPoiAdapter {
    /// Create an adapter backed by an [`OverpassClient`]
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: &OverpassConfig) -> Result<Self, ApplicationError> {
        let client = OverpassClient::new(config).map_err(Self::map_error)?;
        Ok(Self::new(Box::new(client)))
    }

    /// Create an adapter around any [`PoiClient`]
    #[must_use]
    pub fn new(client: Box<dyn PoiClient>) -> Self {
        Self { client }
    }

    /// Map integration error to application error
    fn map_error(err: OverpassError) -> ApplicationError {
        if err.is_network() {
            return ApplicationError::Network(err.to_string());
        }
        match err {
            e @ (OverpassError::ParseError(_) | OverpassError::MalformedElement { .. }) => {
                ApplicationError::Parse(e.to_string())
            },
            OverpassError::ConfigurationError(e) => ApplicationError::Configuration(e),
            e => ApplicationError::Internal(e.to_string()),
        }
    }
}

#[async_trait]
impl PoiPort for OverpassPoiAdapter {
    #[instrument(skip(self))]
    async fn fetch_nearby(
        &self,
        center: Coordinate,
        radius_meters: f64,
    ) -> Result<Vec<Restaurant>, ApplicationError> {
        let restaurants = self
            .client
            .fetch_nearby(center, radius_meters)
            .await
            .map_err(Self::map_error)?;

        debug!(count = restaurants.len(), "Fetched restaurants via Overpass");
        Ok(restaurants)
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
