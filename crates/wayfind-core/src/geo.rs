//! Great-circle geometry shared by the place-search operations.
//!
//! Distances use the haversine formula on a spherical Earth, which is
//! accurate to well under 1% for the city-scale radii the searches run at.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting latitudes outside [-90, 90] and
    /// longitudes outside [-180, 180] (NaN included).
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) {
            Some(Self { lat, lng })
        } else {
            None
        }
    }
}

/// Haversine great-circle distance between two points, in kilometers.
///
/// Symmetric in its arguments, zero for identical points, never negative,
/// and bounded by half the Earth's circumference (~20015 km).
#[must_use]
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Rounds a distance to two decimal places for display. The unrounded
/// value stays canonical for any comparison.
#[must_use]
pub fn round2(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
