//! Geocoding and places web-service response types.
//!
//! All types model the JSON envelopes the two endpoints return. Every
//! response carries a `status` string (`"OK"`, `"ZERO_RESULTS"`, or an
//! error code) and, on errors, an optional `error_message`. Fields the
//! service does not guarantee are `#[serde(default)]`.

use serde::Deserialize;

use wayfind_core::geo::Coordinate;

/// Envelope status for a successful lookup.
pub const STATUS_OK: &str = "OK";
/// Envelope status for a lookup that succeeded but matched nothing.
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

// ---------------------------------------------------------------------------
// geocode
// ---------------------------------------------------------------------------

/// Top-level envelope of a geocoding response.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// A single geocoding match. Only the coordinate is consumed.
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

/// Geometry wrapper shared by geocoding and nearby-search results.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

/// Raw latitude/longitude pair as it appears on the wire, unvalidated.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

// ---------------------------------------------------------------------------
// nearby search
// ---------------------------------------------------------------------------

/// Top-level envelope of a nearby-search response.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceEntry>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One point of interest as returned by the nearby-search endpoint.
///
/// Everything is optional: the source does not guarantee any field, and
/// downstream filters decide what an entry must carry to be usable.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    /// Short address text ("vicinity" in the wire format).
    #[serde(default)]
    pub vicinity: Option<String>,
    /// Price tier, 0 (free) to 4 (very expensive).
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

impl PlaceEntry {
    /// The entry's coordinate, when present and within valid ranges.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        let loc = self.geometry.as_ref()?.location;
        Coordinate::new(loc.lat, loc.lng)
    }
}
