//! In-memory `MapsApi` used by pipeline tests.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{GeocodeGeometry, GeocodeResult, MapsApi, NearbyRequest};
use crate::error::UpstreamError;
use crate::models::{AddressComponent, BoundingBox, Place};

#[derive(Debug, Clone)]
pub struct NearbyCall {
    pub location: String,
    pub radius: u32,
    pub language: String,
    pub category: Option<String>,
}

#[derive(Default)]
pub struct FakeMaps {
    bounds: Option<BoundingBox>,
    geocode_fails: bool,
    nearby: HashMap<String, Vec<Place>>,
    nearby_failure: Option<String>,
    reverse: HashMap<String, Vec<AddressComponent>>,
    reverse_failure: Option<String>,
    geocode_log: Mutex<Vec<(String, String)>>,
    nearby_log: Mutex<Vec<NearbyCall>>,
    reverse_log: Mutex<Vec<String>>,
}

fn denied(operation: &'static str) -> UpstreamError {
    UpstreamError::Status {
        operation,
        status: "REQUEST_DENIED".to_string(),
        message: None,
    }
}

impl FakeMaps {
    pub fn with_bounds(bounds: BoundingBox) -> Self {
        Self {
            bounds: Some(bounds),
            ..Self::default()
        }
    }

    pub fn fail_geocode(&mut self) {
        self.geocode_fails = true;
    }

    pub fn add_nearby(&mut self, location: &str, places: Vec<Place>) {
        self.nearby.insert(location.to_string(), places);
    }

    pub fn fail_nearby_at(&mut self, location: &str) {
        self.nearby_failure = Some(location.to_string());
    }

    pub fn add_address(&mut self, place_id: &str, long_names: &[&str]) {
        let components = long_names
            .iter()
            .map(|name| AddressComponent {
                long_name: name.to_string(),
                short_name: name.to_string(),
                types: vec![],
            })
            .collect();
        self.reverse.insert(place_id.to_string(), components);
    }

    pub fn fail_reverse_for(&mut self, place_id: &str) {
        self.reverse_failure = Some(place_id.to_string());
    }

    pub fn geocode_calls(&self) -> Vec<String> {
        let log = self.geocode_log.lock().unwrap();
        log.iter().map(|(address, _)| address.clone()).collect()
    }

    pub fn geocode_languages(&self) -> Vec<String> {
        let log = self.geocode_log.lock().unwrap();
        log.iter().map(|(_, language)| language.clone()).collect()
    }

    pub fn nearby_calls(&self) -> Vec<NearbyCall> {
        self.nearby_log.lock().unwrap().clone()
    }

    pub fn reverse_calls(&self) -> Vec<String> {
        self.reverse_log.lock().unwrap().clone()
    }
}

impl MapsApi for FakeMaps {
    async fn geocode(
        &self,
        address: &str,
        language: &str,
    ) -> Result<Vec<GeocodeResult>, UpstreamError> {
        self.geocode_log
            .lock()
            .unwrap()
            .push((address.to_string(), language.to_string()));

        if self.geocode_fails {
            return Err(denied("geocode"));
        }

        Ok(self
            .bounds
            .iter()
            .map(|bounds| GeocodeResult {
                formatted_address: Some(address.to_string()),
                geometry: GeocodeGeometry {
                    bounds: Some(*bounds),
                    viewport: None,
                },
                address_components: vec![],
            })
            .collect())
    }

    async fn places_nearby(&self, request: &NearbyRequest<'_>) -> Result<Vec<Place>, UpstreamError> {
        let location = request.location.to_string();
        self.nearby_log.lock().unwrap().push(NearbyCall {
            location: location.clone(),
            radius: request.radius,
            language: request.language.to_string(),
            category: request.category.as_type().map(String::from),
        });

        if self.nearby_failure.as_deref() == Some(location.as_str()) {
            return Err(denied("places_nearby"));
        }

        Ok(self.nearby.get(&location).cloned().unwrap_or_default())
    }

    async fn reverse_geocode(&self, place_id: &str) -> Result<Vec<GeocodeResult>, UpstreamError> {
        self.reverse_log.lock().unwrap().push(place_id.to_string());

        if self.reverse_failure.as_deref() == Some(place_id) {
            return Err(denied("reverse_geocode"));
        }

        Ok(self
            .reverse
            .get(place_id)
            .map(|components| GeocodeResult {
                formatted_address: None,
                geometry: GeocodeGeometry {
                    bounds: None,
                    viewport: None,
                },
                address_components: components.clone(),
            })
            .into_iter()
            .collect())
    }
}
