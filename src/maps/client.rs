//! Google Maps web-service client.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::api::{ApiResponse, GeocodeResult, MapsApi, NearbyRequest};
use crate::config::Config;
use crate::error::UpstreamError;
use crate::models::Place;

const GEOCODE_PATH: &str = "maps/api/geocode/json";
const NEARBY_SEARCH_PATH: &str = "maps/api/place/nearbysearch/json";

/// Mapping-service client. Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct GoogleMapsClient {
    client: Client,
    api_key: String,
    geocode_url: Url,
    nearby_url: Url,
}

impl GoogleMapsClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let mut base = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid base URL '{}'", config.base_url))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            geocode_url: base.join(GEOCODE_PATH)?,
            nearby_url: base.join(NEARBY_SEARCH_PATH)?,
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: &Url,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>, UpstreamError> {
        let transport = move |source: reqwest::Error| UpstreamError::Transport { operation, source };

        debug!("{} {:?}", operation, params);

        let response = self
            .client
            .get(url.clone())
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?;

        let body: ApiResponse<T> = response.json().await.map_err(transport)?;
        body.into_results(operation)
    }
}

impl MapsApi for GoogleMapsClient {
    async fn geocode(
        &self,
        address: &str,
        language: &str,
    ) -> Result<Vec<GeocodeResult>, UpstreamError> {
        self.fetch(
            "geocode",
            &self.geocode_url,
            &[("address", address), ("language", language)],
        )
        .await
    }

    async fn places_nearby(&self, request: &NearbyRequest<'_>) -> Result<Vec<Place>, UpstreamError> {
        let location = request.location.to_string();
        let radius = request.radius.to_string();
        let mut params = vec![
            ("language", request.language),
            ("location", location.as_str()),
            ("radius", radius.as_str()),
        ];
        if let Some(place_type) = request.category.as_type() {
            params.push(("type", place_type));
        }

        self.fetch("places_nearby", &self.nearby_url, &params).await
    }

    async fn reverse_geocode(&self, place_id: &str) -> Result<Vec<GeocodeResult>, UpstreamError> {
        self.fetch("reverse_geocode", &self.geocode_url, &[("place_id", place_id)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let client = GoogleMapsClient::new(&Config::default()).unwrap();
        assert_eq!(
            client.geocode_url.as_str(),
            "https://maps.googleapis.com/maps/api/geocode/json"
        );
        assert_eq!(
            client.nearby_url.as_str(),
            "https://maps.googleapis.com/maps/api/place/nearbysearch/json"
        );
    }

    #[test]
    fn test_base_url_with_prefix() {
        let config = Config {
            base_url: "http://localhost:8080/proxy".to_string(),
            ..Config::default()
        };
        let client = GoogleMapsClient::new(&config).unwrap();
        assert_eq!(
            client.geocode_url.as_str(),
            "http://localhost:8080/proxy/maps/api/geocode/json"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = Config {
            base_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(GoogleMapsClient::new(&config).is_err());
    }
}
