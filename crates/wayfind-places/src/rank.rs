//! Rating-ordered ranking of nearby places.

use serde::Serialize;

use wayfind_core::geo::{haversine_km, round2, Coordinate};

use crate::client::{PlacesClient, SearchFilter};
use crate::error::PlacesError;
use crate::types::PlaceEntry;

/// Default search radius for ranking lookups, in meters.
pub const DEFAULT_RANK_RADIUS_M: u32 = 2000;

/// A place retained by the ranking filter, annotated with its distance
/// from the search center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlace {
    pub name: Option<String>,
    pub rating: f64,
    pub user_ratings_total: Option<u32>,
    pub address: Option<String>,
    pub price_level: Option<u8>,
    /// Great-circle distance from the search center in kilometers, rounded
    /// to two decimal places for display. Ordering never depends on it.
    pub distance_km: f64,
}

/// Ranks candidate places by rating.
///
/// Entries missing a rating or a usable coordinate cannot be ranked and are
/// dropped. Survivors are annotated with their distance from `center` and
/// stably sorted by rating descending, then review count descending (absent
/// counts sort as zero); remaining ties keep the order the source returned
/// them in.
#[must_use]
pub fn rank_by_rating(center: Coordinate, entries: Vec<PlaceEntry>) -> Vec<RankedPlace> {
    let mut ranked: Vec<RankedPlace> = entries
        .into_iter()
        .filter_map(|entry| {
            let rating = entry.rating?;
            let coordinate = entry.coordinate()?;
            Some(RankedPlace {
                name: entry.name,
                rating,
                user_ratings_total: entry.user_ratings_total,
                address: entry.vicinity,
                price_level: entry.price_level,
                distance_km: round2(haversine_km(center, coordinate)),
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.rating.total_cmp(&a.rating).then_with(|| {
            b.user_ratings_total
                .unwrap_or(0)
                .cmp(&a.user_ratings_total.unwrap_or(0))
        })
    });
    ranked
}

impl PlacesClient {
    /// Fetches places around `center` and returns them ranked by rating.
    ///
    /// The full sorted list is returned; truncating to a desired count is
    /// the caller's business. A lookup the service reports as failed yields
    /// an empty list — no partial results are fabricated.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError`] only for transport or decode failures.
    pub async fn top_rated_nearby(
        &self,
        center: Coordinate,
        radius_m: u32,
        filter: &SearchFilter,
    ) -> Result<Vec<RankedPlace>, PlacesError> {
        let Some(entries) = self.nearby_search(center, radius_m, filter).await? else {
            tracing::warn!(
                lat = center.lat,
                lng = center.lng,
                "places lookup failed; returning no ranked places"
            );
            return Ok(Vec::new());
        };
        Ok(rank_by_rating(center, entries))
    }
}
