//! Place records returned by the mapping service.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::str::FromStr;

use super::LatLng;

/// Location block of a place record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub location: LatLng,

    /// Viewport and any other geometry fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Point of interest from a nearby search.
///
/// Only the fields the pipeline reads are typed; everything else the
/// service sends is preserved in `extra` so the record re-serializes intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Legacy identifier, used for deduplication when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub place_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub geometry: Geometry,

    /// Average user rating. The outer `Option` records whether the key was
    /// sent at all, so `"rating": null` is `Some(None)`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<Option<f64>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Place {
    /// Create a place with minimal required fields
    pub fn new(place_id: &str, location: LatLng) -> Self {
        Self {
            id: None,
            place_id: place_id.to_string(),
            name: None,
            geometry: Geometry {
                location,
                extra: Map::new(),
            },
            rating: None,
            extra: Map::new(),
        }
    }

    /// Identifier that collapses duplicates: `id`, falling back to `place_id`
    pub fn dedup_key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.place_id)
    }

    pub fn location(&self) -> &LatLng {
        &self.geometry.location
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating.flatten()
    }

    pub fn set_rating(&mut self, rating: f64) {
        self.rating = Some(Some(rating));
    }

    /// Whether the record carries a `rating` key, whatever its value
    pub fn has_rating(&self) -> bool {
        self.rating.is_some()
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// One component of a reverse-geocoded address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// A place plus the address components that confirmed it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmedPlace {
    #[serde(flatten)]
    pub place: Place,
    pub addresses: Vec<AddressComponent>,
}

impl ConfirmedPlace {
    /// Exact, case-sensitive match of `area_name` against any long name
    pub fn names_area(&self, area_name: &str) -> bool {
        self.addresses
            .iter()
            .any(|component| component.long_name == area_name)
    }
}

/// Place category filter for nearby searches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Category {
    /// No type restriction
    #[default]
    Any,
    /// An upstream place type such as `restaurant`
    Type(String),
}

impl Category {
    /// The upstream `type` parameter, if any
    pub fn as_type(&self) -> Option<&str> {
        match self {
            Category::Any => None,
            Category::Type(t) => Some(t),
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "*" || s.eq_ignore_ascii_case("any") {
            Ok(Category::Any)
        } else {
            Ok(Category::Type(s.to_string()))
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Any => write!(f, "*"),
            Category::Type(t) => write!(f, "{}", t),
        }
    }
}
