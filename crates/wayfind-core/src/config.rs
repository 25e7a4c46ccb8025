use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let google_maps_api_key = lookup("GOOGLE_MAPS_API_KEY").ok();
    let log_level = or_default("WAYFIND_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("WAYFIND_REQUEST_TIMEOUT_SECS", "30")?;
    let rank_radius_m = parse_u32("WAYFIND_RANK_RADIUS_M", "2000")?;
    let tag_radius_m = parse_u32("WAYFIND_TAG_RADIUS_M", "5000")?;

    Ok(AppConfig {
        google_maps_api_key,
        log_level,
        request_timeout_secs,
        rank_radius_m,
        tag_radius_m,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.google_maps_api_key.is_none());
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.rank_radius_m, 2000);
        assert_eq!(cfg.tag_radius_m, 5000);
    }

    #[test]
    fn build_app_config_reads_api_key() {
        let mut map = HashMap::new();
        map.insert("GOOGLE_MAPS_API_KEY", "secret-key");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.google_maps_api_key.as_deref(), Some("secret-key"));
    }

    #[test]
    fn build_app_config_request_timeout_override() {
        let mut map = HashMap::new();
        map.insert("WAYFIND_REQUEST_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn build_app_config_request_timeout_invalid() {
        let mut map = HashMap::new();
        map.insert("WAYFIND_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WAYFIND_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(WAYFIND_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_radius_overrides() {
        let mut map = HashMap::new();
        map.insert("WAYFIND_RANK_RADIUS_M", "1500");
        map.insert("WAYFIND_TAG_RADIUS_M", "8000");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.rank_radius_m, 1500);
        assert_eq!(cfg.tag_radius_m, 8000);
    }

    #[test]
    fn build_app_config_radius_invalid() {
        let mut map = HashMap::new();
        map.insert("WAYFIND_RANK_RADIUS_M", "-5");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WAYFIND_RANK_RADIUS_M"),
            "expected InvalidEnvVar(WAYFIND_RANK_RADIUS_M), got: {result:?}"
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let mut map = HashMap::new();
        map.insert("GOOGLE_MAPS_API_KEY", "secret-key");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let printed = format!("{cfg:?}");
        assert!(printed.contains("[redacted]"), "got: {printed}");
        assert!(!printed.contains("secret-key"), "got: {printed}");
    }
}
