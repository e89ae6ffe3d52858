//! Flatten, filter and deduplicate per-point nearby-search results.

use hashbrown::HashSet;
use tracing::debug;

use crate::models::{BoundingBox, Place};

/// Reduce per-point result lists to unique, in-area, rated places.
///
/// Steps run in a fixed order: flatten (point-major), keep places strictly
/// inside `bbox`, keep places with a rating, then drop repeated identifiers
/// keeping the first occurrence. Filters run before deduplication, so an
/// unrated first occurrence does not shadow a rated later one.
pub fn reduce_places<I>(per_point: I, bbox: &BoundingBox) -> Vec<Place>
where
    I: IntoIterator<Item = Vec<Place>>,
{
    let mut seen = HashSet::new();
    let mut total = 0usize;

    let places: Vec<Place> = per_point
        .into_iter()
        .flatten()
        .inspect(|_| total += 1)
        .filter(|place| bbox.contains(place.location()))
        .filter(Place::has_rating)
        .filter(|place| seen.insert(place.dedup_key().to_string()))
        .collect();

    debug!("Reduced {} fetched places to {}", total, places.len());
    places
}
