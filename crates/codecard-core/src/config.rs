use crate::app_config::{AppConfig, FetchConfig};

/// Errors produced while assembling [`AppConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The core parsing logic is decoupled from the actual environment so it can
/// be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
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

    let bind_addr = parse_addr("CODECARD_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("CODECARD_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("CODECARD_REQUEST_TIMEOUT_SECS", "30")?;

    let leetcode_base_url = or_default("CODECARD_LEETCODE_BASE_URL", "https://leetcode.com");
    let codechef_base_url = or_default("CODECARD_CODECHEF_BASE_URL", "https://api.codechef.com");

    // Missing keys stay empty; the upstream rejects them and the soft-failure
    // path takes over, matching the original behavior.
    let fetch = FetchConfig {
        leetcode_api_key: or_default("LEETCODE_API_KEY", ""),
        codechef_api_key: or_default("CODECHEF_API_KEY", ""),
    };

    Ok(AppConfig {
        bind_addr,
        log_level,
        request_timeout_secs,
        leetcode_base_url,
        codechef_base_url,
        fetch,
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
    fn defaults_apply_with_empty_environment() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:5000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.leetcode_base_url, "https://leetcode.com");
        assert_eq!(cfg.codechef_base_url, "https://api.codechef.com");
        assert_eq!(cfg.fetch.leetcode_api_key, "");
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let mut map = HashMap::new();
        map.insert("CODECARD_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CODECARD_BIND_ADDR"),
            "expected InvalidEnvVar(CODECARD_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let mut map = HashMap::new();
        map.insert("CODECARD_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CODECARD_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(CODECARD_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn api_keys_are_read_from_env() {
        let mut map = HashMap::new();
        map.insert("LEETCODE_API_KEY", "lc-key");
        map.insert("CODECHEF_API_KEY", "cc-key");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.fetch.api_key(crate::Platform::Leetcode), "lc-key");
        assert_eq!(cfg.fetch.api_key(crate::Platform::Codechef), "cc-key");
    }

    #[test]
    fn debug_redacts_credentials() {
        let mut map = HashMap::new();
        map.insert("LEETCODE_API_KEY", "secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("secret"), "debug output leaked a key");
        assert!(rendered.contains("[redacted]"));
    }
}
