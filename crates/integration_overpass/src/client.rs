//! Overpass API client
//!
//! Issues one GET request per lookup against the `/interpreter` endpoint,
//! with the query text URL-encoded into the `data` parameter.

use std::time::Duration;

use async_trait::async_trait;
use domain::{Coordinate, Restaurant};
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::config::OverpassConfig;
use crate::error::OverpassError;
use crate::models::parse_restaurants;
use crate::query::OverpassQuery;

/// Trait for nearby point-of-interest lookups
#[async_trait]
pub trait PoiClient: Send + Sync {
    /// Find restaurants within `radius_meters` of `center`
    async fn fetch_nearby(
        &self,
        center: Coordinate,
        radius_meters: f64,
    ) -> Result<Vec<Restaurant>, OverpassError>;

    /// Check if the service is reachable
    async fn is_healthy(&self) -> bool;
}

/// Overpass-based restaurant lookup client
#[derive(Debug)]
pub struct OverpassClient {
    client: Client,
    config: OverpassConfig,
}

impl OverpassClient {
    /// Create a new Overpass client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &OverpassConfig) -> Result<Self, OverpassError> {
        config
            .validate()
            .map_err(OverpassError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| OverpassError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build the query text sent for a lookup
    fn query_for(&self, center: Coordinate, radius_meters: f64) -> String {
        OverpassQuery::new(center, radius_meters)
            .with_timeout_secs(self.config.query_timeout_secs)
            .to_string()
    }

    /// Map a transport-level failure
    fn map_send_error(&self, e: &reqwest::Error) -> OverpassError {
        if e.is_timeout() {
            OverpassError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            OverpassError::ConnectionFailed(e.to_string())
        }
    }
}

#[async_trait]
impl PoiClient for OverpassClient {
    #[instrument(skip(self), fields(center = %center))]
    async fn fetch_nearby(
        &self,
        center: Coordinate,
        radius_meters: f64,
    ) -> Result<Vec<Restaurant>, OverpassError> {
        if !radius_meters.is_finite() || radius_meters <= 0.0 {
            return Err(OverpassError::InvalidRadius(radius_meters));
        }

        let url = self.config.interpreter_url();
        let query = self.query_for(center, radius_meters);

        debug!(?url, radius_meters, "Querying nearby restaurants");

        let response = self
            .client
            .get(&url)
            .query(&[("data", query.as_str())])
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(OverpassError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if status == StatusCode::SERVICE_UNAVAILABLE || status == StatusCode::GATEWAY_TIMEOUT {
            return Err(OverpassError::ServiceUnavailable(format!("HTTP {status}")));
        }

        if !status.is_success() {
            return Err(OverpassError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let restaurants = parse_restaurants(&body)?;

        debug!(count = restaurants.len(), "Restaurants found");
        Ok(restaurants)
    }

    async fn is_healthy(&self) -> bool {
        let url = format!("{}/status", self.config.base_url.trim_end_matches('/'));
        self.client
            .get(&url)
            .send()
            .await
            .is_ok_and(|r| r.status().is_success())
    }
}
