//! Second-pass confirmation of place membership via reverse geocoding.

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::error::Result;
use crate::maps::MapsApi;
use crate::models::{ConfirmedPlace, Place};

/// Attach the first reverse-geocode match's address components to a place
pub async fn lookup_addresses<M: MapsApi>(maps: &M, mut place: Place) -> Result<ConfirmedPlace> {
    // addresses from an earlier confirmation are replaced, not duplicated
    place.extra.remove("addresses");

    let results = maps.reverse_geocode(&place.place_id).await?;
    let addresses = results
        .into_iter()
        .next()
        .map(|result| result.address_components)
        .unwrap_or_default();

    debug!("{} has {} address components", place.place_id, addresses.len());
    Ok(ConfirmedPlace { place, addresses })
}

/// Keep places whose address has a component named exactly `area_name`.
///
/// All lookups run concurrently; one failed lookup fails the batch.
pub async fn confirm_places<M, I>(maps: &M, places: I, area_name: &str) -> Result<Vec<ConfirmedPlace>>
where
    M: MapsApi,
    I: IntoIterator<Item = Place>,
{
    let looked_up: Vec<ConfirmedPlace> =
        try_join_all(places.into_iter().map(|place| lookup_addresses(maps, place)))
            .await?;
    let total = looked_up.len();

    let confirmed: Vec<ConfirmedPlace> = looked_up
        .into_iter()
        .filter(|place| place.names_area(area_name))
        .collect();

    info!(
        "Confirmed {} of {} places in '{}'",
        confirmed.len(),
        total,
        area_name
    );
    Ok(confirmed)
}
