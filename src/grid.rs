//! Lattice of nearby-search sample points covering an area.

use crate::models::{BoundingBox, SamplePoint};

/// Intervals per axis; the lattice has `GRID_INCREMENTS + 1` points per side
pub const GRID_INCREMENTS: u32 = 5;

/// Number of sample points produced for any bounding box
pub const GRID_POINTS: usize = ((GRID_INCREMENTS + 1) * (GRID_INCREMENTS + 1)) as usize;

/// Tile `bbox` into a 6x6 lattice of sample points, corners included.
///
/// Traversal is `i` outer, `j` inner, with `j` stepping latitude and `i`
/// stepping longitude. Result ordering downstream depends on it.
pub fn sample_points(bbox: &BoundingBox) -> Vec<SamplePoint> {
    let increments = f64::from(GRID_INCREMENTS);
    let lat_step = (bbox.northeast.lat - bbox.southwest.lat).abs() / increments;
    let lng_step = (bbox.northeast.lng - bbox.southwest.lng).abs() / increments;

    let mut points = Vec::with_capacity(GRID_POINTS);
    for i in 0..=GRID_INCREMENTS {
        for j in 0..=GRID_INCREMENTS {
            points.push(SamplePoint::from_degrees(
                bbox.southwest.lat + lat_step * f64::from(j),
                bbox.southwest.lng + lng_step * f64::from(i),
            ));
        }
    }
    points
}
