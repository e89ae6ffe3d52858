//! Mapping-service access: the `MapsApi` seam and its HTTP client.

mod api;
mod client;

pub use api::{ApiResponse, GeocodeGeometry, GeocodeResult, MapsApi, NearbyRequest, SEARCH_RADIUS};
pub use client::GoogleMapsClient;

#[cfg(test)]
pub(crate) mod testing;
