//! Geographic primitives: coordinates, area bounds and grid sample points.

use geo::{Contains, Coord, LineString, Point, Polygon};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Fractional digits kept when a coordinate is sent upstream
pub const COORD_DECIMALS: u32 = 7;

/// Geographic point as returned by the mapping service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Rectangular area envelope (southwest and northeast corners)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub southwest: LatLng,
    pub northeast: LatLng,
}

impl BoundingBox {
    pub fn new(southwest: LatLng, northeast: LatLng) -> Self {
        Self {
            southwest,
            northeast,
        }
    }

    /// The box as a closed polygon in (lat, lng) axis order.
    ///
    /// Ring order: sw, (ne.lat, sw.lng), ne, (sw.lat, ne.lng).
    pub fn to_polygon(&self) -> Polygon<f64> {
        let sw = self.southwest;
        let ne = self.northeast;
        let ring = vec![
            Coord { x: sw.lat, y: sw.lng },
            Coord { x: ne.lat, y: sw.lng },
            Coord { x: ne.lat, y: ne.lng },
            Coord { x: sw.lat, y: ne.lng },
        ];
        Polygon::new(LineString::new(ring), vec![])
    }

    /// Point-in-polygon test. Points on the boundary are not contained.
    pub fn contains(&self, location: &LatLng) -> bool {
        self.to_polygon()
            .contains(&Point::new(location.lat, location.lng))
    }
}

/// One lattice coordinate used for a nearby search.
///
/// Both axes are fixed-point strings with exactly seven fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SamplePoint {
    pub lat: String,
    pub lng: String,
}

impl SamplePoint {
    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self {
            lat: to_fixed(lat, COORD_DECIMALS),
            lng: to_fixed(lng, COORD_DECIMALS),
        }
    }
}

impl std::fmt::Display for SamplePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Round the exact decimal value of `value` to `decimals` places
/// (ties away from zero) and render it with exactly that many digits.
///
/// Negative inputs keep their sign even when they round to zero.
pub fn to_fixed(value: f64, decimals: u32) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(decimals);
            let fixed = rounded.to_string();
            let digits = fixed.trim_start_matches('-');
            if value < 0.0 {
                format!("-{}", digits)
            } else {
                digits.to_string()
            }
        }
        // NaN and infinities have no decimal expansion
        None => format!("{:.*}", decimals as usize, value),
    }
}
