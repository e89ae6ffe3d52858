//! Core data models for area place discovery.

pub mod area;
pub mod place;

pub use area::{BoundingBox, LatLng, SamplePoint};
pub use place::{AddressComponent, Category, ConfirmedPlace, Geometry, Place};
