//! Upstream operations and their wire types.

use std::future::Future;

use serde::Deserialize;
use tracing::warn;

use crate::error::UpstreamError;
use crate::models::{AddressComponent, BoundingBox, Category, Place, SamplePoint};

/// Nearby-search radius around each sample point
pub const SEARCH_RADIUS: u32 = 1000;

/// Envelope shared by all mapping-service JSON responses
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// `OK` and `ZERO_RESULTS` carry results; any other status is an error
    pub fn into_results(self, operation: &'static str) -> Result<Vec<T>, UpstreamError> {
        match self.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(self.results),
            _ => {
                warn!(
                    "{} returned status {}: {}",
                    operation,
                    self.status,
                    self.error_message.as_deref().unwrap_or("no message")
                );
                Err(UpstreamError::Status {
                    operation,
                    status: self.status,
                    message: self.error_message,
                })
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeGeometry {
    #[serde(default)]
    pub bounds: Option<BoundingBox>,
    #[serde(default)]
    pub viewport: Option<BoundingBox>,
}

/// One geocode / reverse-geocode match
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub formatted_address: Option<String>,
    pub geometry: GeocodeGeometry,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

impl GeocodeResult {
    /// Area bounds, falling back to the viewport for point-like matches
    pub fn area_bounds(&self) -> Option<BoundingBox> {
        self.geometry.bounds.or(self.geometry.viewport)
    }
}

/// Parameters of a single nearby search
#[derive(Debug, Clone)]
pub struct NearbyRequest<'a> {
    pub location: &'a SamplePoint,
    pub radius: u32,
    pub language: &'a str,
    pub category: &'a Category,
}

/// The three mapping-service operations the pipeline consumes.
///
/// Implementations hold no per-call state and are shared by every
/// concurrent request of a pipeline run.
pub trait MapsApi: Send + Sync {
    fn geocode(
        &self,
        address: &str,
        language: &str,
    ) -> impl Future<Output = Result<Vec<GeocodeResult>, UpstreamError>> + Send;

    fn places_nearby(
        &self,
        request: &NearbyRequest<'_>,
    ) -> impl Future<Output = Result<Vec<Place>, UpstreamError>> + Send;

    fn reverse_geocode(
        &self,
        place_id: &str,
    ) -> impl Future<Output = Result<Vec<GeocodeResult>, UpstreamError>> + Send;
}
