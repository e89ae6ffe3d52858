//! Area place discovery: resolve, sample, fetch and reduce.

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::confirm::confirm_places;
use crate::error::{Error, Result};
use crate::grid::sample_points;
use crate::maps::{GeocodeResult, MapsApi, NearbyRequest, SEARCH_RADIUS};
use crate::models::{BoundingBox, Category, ConfirmedPlace, Place, SamplePoint};
use crate::reduce::reduce_places;

/// Resolve an area name to the bounds of its first geocode match
pub async fn resolve_area<M: MapsApi>(
    maps: &M,
    area_name: &str,
    language: &str,
) -> Result<BoundingBox> {
    let results = maps.geocode(area_name, language).await?;

    let bbox = results
        .first()
        .and_then(GeocodeResult::area_bounds)
        .ok_or_else(|| Error::NotFound {
            area: area_name.to_string(),
        })?;

    info!(
        "Resolved '{}' to sw=({}, {}) ne=({}, {})",
        area_name, bbox.southwest.lat, bbox.southwest.lng, bbox.northeast.lat, bbox.northeast.lng
    );
    Ok(bbox)
}

/// Places reported within the search radius of one sample point
pub async fn fetch_nearby<M: MapsApi>(
    maps: &M,
    point: &SamplePoint,
    category: &Category,
    language: &str,
) -> Result<Vec<Place>> {
    let request = NearbyRequest {
        location: point,
        radius: SEARCH_RADIUS,
        language,
        category,
    };
    let places = maps.places_nearby(&request).await?;
    debug!("{} places near {}", places.len(), point);
    Ok(places)
}

/// Fetch every sample point concurrently.
///
/// Results come back in point order regardless of arrival order. The first
/// failing point fails the whole batch and the remaining requests are dropped.
pub async fn fetch_all<M: MapsApi>(
    maps: &M,
    points: &[SamplePoint],
    category: &Category,
    language: &str,
) -> Result<Vec<Vec<Place>>> {
    try_join_all(
        points
            .iter()
            .map(|point| fetch_nearby(maps, point, category, language)),
    )
    .await
}

/// Resolve, sample, fetch and reduce: unique, rated places of `category`
/// inside `area_name`
pub async fn get_places_by_type<M: MapsApi>(
    maps: &M,
    area_name: &str,
    category: &Category,
    language: &str,
) -> Result<Vec<Place>> {
    let bbox = resolve_area(maps, area_name, language).await?;
    let points = sample_points(&bbox);

    info!(
        "Searching {} sample points in '{}' for category {}",
        points.len(),
        area_name,
        category
    );

    let per_point = fetch_all(maps, &points, category, language).await?;
    let places = reduce_places(per_point, &bbox);

    info!("Found {} places in '{}'", places.len(), area_name);
    Ok(places)
}

/// Entry point holding the shared mapping-service handle
pub struct PlaceFinder<M> {
    maps: M,
    language: String,
}

impl<M: MapsApi> PlaceFinder<M> {
    pub fn new(maps: M, language: &str) -> Self {
        Self {
            maps,
            language: language.to_string(),
        }
    }

    pub fn maps(&self) -> &M {
        &self.maps
    }

    /// Unique, rated places of `category` inside the named area
    pub async fn places_by_type(&self, area_name: &str, category: &Category) -> Result<Vec<Place>> {
        get_places_by_type(&self.maps, area_name, category, &self.language).await
    }

    /// Keep only places whose reverse-geocoded address names the area
    pub async fn confirm_places<I>(&self, places: I, area_name: &str) -> Result<Vec<ConfirmedPlace>>
    where
        I: IntoIterator<Item = Place>,
    {
        confirm_places(&self.maps, places, area_name).await
    }
}
