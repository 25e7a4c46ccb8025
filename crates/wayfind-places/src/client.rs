//! HTTP client for the external geocoding and places web services.
//!
//! Wraps `reqwest` with API key management, typed response deserialization,
//! and the `"status"` envelope handling both endpoints share. Failures the
//! service itself reports (denied credential, unresolvable location) are
//! absorbed into "not found" values; only transport and decode problems
//! surface as [`PlacesError`].

use std::time::Duration;

use reqwest::{Client, Url};

use wayfind_core::geo::Coordinate;

use crate::error::PlacesError;
use crate::types::{
    GeocodeResponse, NearbySearchResponse, PlaceEntry, STATUS_OK, STATUS_ZERO_RESULTS,
};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/";
const GEOCODE_PATH: &str = "maps/api/geocode/json";
const NEARBY_SEARCH_PATH: &str = "maps/api/place/nearbysearch/json";

/// Category or keyword filter for a nearby search.
#[derive(Debug, Clone)]
pub enum SearchFilter {
    /// A place category, sent as the `type` parameter (e.g. `"lodging"`).
    Category(String),
    /// A free-text keyword, sent as the `keyword` parameter.
    Keyword(String),
}

impl SearchFilter {
    fn as_query_pair(&self) -> (&'static str, &str) {
        match self {
            SearchFilter::Category(t) => ("type", t.as_str()),
            SearchFilter::Keyword(k) => ("keyword", k.as_str()),
        }
    }
}

/// Client for the geocoding and nearby-search endpoints.
///
/// Manages the HTTP client, API key, and base URL. Use [`PlacesClient::new`]
/// for production or [`PlacesClient::with_base_url`] to point at a mock
/// server in tests. The key is passed in explicitly; the client never reads
/// process-global state.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("wayfind/0.1 (travel-planning)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining the endpoint paths appends rather than replaces.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Resolves a free-text location string to a coordinate.
    ///
    /// Issues exactly one outbound request, no retries. Any failure the
    /// service reports — `ZERO_RESULTS`, a denied or missing credential —
    /// yields `Ok(None)`; callers must check for absence before using the
    /// coordinate.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body is not the expected shape.
    pub async fn geocode(&self, location: &str) -> Result<Option<Coordinate>, PlacesError> {
        let url = self.build_url(GEOCODE_PATH, &[("address", location)])?;
        let body: GeocodeResponse = self
            .request_json(&url, &format!("geocode({location})"))
            .await?;

        if body.status != STATUS_OK {
            tracing::warn!(
                location,
                status = %body.status,
                error_message = body.error_message.as_deref().unwrap_or(""),
                "geocoding lookup failed"
            );
            return Ok(None);
        }

        let found = body
            .results
            .first()
            .and_then(|r| Coordinate::new(r.geometry.location.lat, r.geometry.location.lng));
        if found.is_none() {
            tracing::warn!(location, "geocoding returned no usable result");
        }
        Ok(found)
    }

    /// Looks up places around `center` within `radius_m` meters, filtered
    /// by category or keyword.
    ///
    /// Returns `Some` entries on success — `ZERO_RESULTS` is an empty
    /// success, not a failure — and `None` when the service reports a
    /// failure status. Callers decide whether `None` means "empty result"
    /// or "skip and continue".
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body is not the expected shape.
    pub async fn nearby_search(
        &self,
        center: Coordinate,
        radius_m: u32,
        filter: &SearchFilter,
    ) -> Result<Option<Vec<PlaceEntry>>, PlacesError> {
        let location = format!("{},{}", center.lat, center.lng);
        let radius = radius_m.to_string();
        let (param, value) = filter.as_query_pair();
        let url = self.build_url(
            NEARBY_SEARCH_PATH,
            &[("location", &location), ("radius", &radius), (param, value)],
        )?;
        let body: NearbySearchResponse = self
            .request_json(&url, &format!("nearby_search({param}={value})"))
            .await?;

        if body.status == STATUS_ZERO_RESULTS {
            return Ok(Some(Vec::new()));
        }
        if body.status != STATUS_OK {
            tracing::debug!(
                status = %body.status,
                error_message = body.error_message.as_deref().unwrap_or(""),
                filter = value,
                "places lookup reported failure"
            );
            return Ok(None);
        }
        Ok(Some(body.results))
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters; the API key is appended last.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body into `T`.
    async fn request_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<T, PlacesError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> PlacesClient {
        PlacesClient::with_base_url("test-key", 30, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_constructs_geocode_query() {
        let client = test_client("https://maps.googleapis.com");
        let url = client
            .build_url(GEOCODE_PATH, &[("address", "Columbia")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://maps.googleapis.com/maps/api/geocode/json?address=Columbia&key=test-key"
        );
    }

    #[test]
    fn build_url_strips_trailing_slash() {
        let client = test_client("https://maps.googleapis.com/");
        let url = client
            .build_url(NEARBY_SEARCH_PATH, &[("location", "0,0"), ("radius", "2000")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://maps.googleapis.com/maps/api/place/nearbysearch/json?location=0%2C0&radius=2000&key=test-key"
        );
    }

    #[test]
    fn build_url_encodes_special_characters() {
        let client = test_client("https://maps.googleapis.com");
        let url = client
            .build_url(GEOCODE_PATH, &[("address", "New York, NY")])
            .unwrap();
        assert!(
            url.as_str().contains("New+York%2C+NY") || url.as_str().contains("New%20York%2C%20NY"),
            "address param should be percent-encoded: {url}"
        );
    }

    #[test]
    fn search_filter_query_pairs() {
        let category = SearchFilter::Category("lodging".to_owned());
        assert_eq!(category.as_query_pair(), ("type", "lodging"));
        let keyword = SearchFilter::Keyword("hiking".to_owned());
        assert_eq!(keyword.as_query_pair(), ("keyword", "hiking"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = PlacesClient::with_base_url("test-key", 30, "not a url");
        assert!(matches!(result, Err(PlacesError::InvalidBaseUrl { .. })));
    }
}
