//! Placegrid - find the places of a category inside a named area
//!
//! Resolves the area to a bounding box, samples it with a fixed grid of
//! nearby searches, and reduces the combined results. An optional second
//! pass confirms each place against its reverse-geocoded address.

pub mod config;
pub mod confirm;
pub mod error;
pub mod grid;
pub mod maps;
pub mod models;
pub mod reduce;
pub mod search;

pub use config::Config;
pub use confirm::confirm_places;
pub use error::{Error, Result, UpstreamError};
pub use maps::{GoogleMapsClient, MapsApi};
pub use models::{BoundingBox, Category, ConfirmedPlace, LatLng, Place, SamplePoint};
pub use search::{get_places_by_type, PlaceFinder};
