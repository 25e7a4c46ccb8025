/// Runtime configuration for the place-search stack.
///
/// The API credential lives here so the composition root can pass it into
/// each client explicitly; nothing reads it from process-global state.
#[derive(Clone)]
pub struct AppConfig {
    /// Credential for the geocoding/places services. Optional: without it
    /// the services answer with a denied status, which the client absorbs
    /// into "not found".
    pub google_maps_api_key: Option<String>,
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Default search radius for rating-ranked lookups, in meters.
    pub rank_radius_m: u32,
    /// Default search radius for keyword-tagged lookups, in meters.
    pub tag_radius_m: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "google_maps_api_key",
                &self.google_maps_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("rank_radius_m", &self.rank_radius_m)
            .field("tag_radius_m", &self.tag_radius_m)
            .finish()
    }
}
