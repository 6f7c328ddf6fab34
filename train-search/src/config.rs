//! Application configuration, read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TrainsApiConfig};
use crate::cache::CacheConfig;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Default station list file.
pub const DEFAULT_STATIONS_FILE: &str = "railwayStationsList.json";

/// Default recent-search file.
pub const DEFAULT_RECENT_FILE: &str = "recent_searches.json";

/// Default static assets directory.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Remote trains API.
    pub api: TrainsApiConfig,

    /// Directory of canned responses; when set the remote API is not used.
    pub mock_dir: Option<PathBuf>,

    pub stations_file: PathBuf,
    pub recent_file: PathBuf,
    pub static_dir: PathBuf,

    pub cache: CacheConfig,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a
    /// variable if set. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind_addr = parse_var(&get, "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let base_url = get("TRAINS_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs: u64 =
            parse_var(&get, "TRAINS_API_TIMEOUT_SECS", &DEFAULT_TIMEOUT_SECS.to_string())?;

        let defaults = CacheConfig::default();
        let ttl_secs: u64 =
            parse_var(&get, "CACHE_TTL_SECS", &defaults.ttl.as_secs().to_string())?;
        let max_capacity: u64 = parse_var(
            &get,
            "CACHE_MAX_CAPACITY",
            &defaults.max_capacity.to_string(),
        )?;

        let path = |var: &str, default: &str| {
            PathBuf::from(get(var).unwrap_or_else(|| default.to_string()))
        };

        Ok(Self {
            bind_addr,
            api: TrainsApiConfig::new(base_url).with_timeout(timeout_secs),
            mock_dir: get("TRAINS_MOCK_DIR").map(PathBuf::from),
            stations_file: path("STATIONS_FILE", DEFAULT_STATIONS_FILE),
            recent_file: path("RECENT_FILE", DEFAULT_RECENT_FILE),
            static_dir: path("STATIC_DIR", DEFAULT_STATIC_DIR),
            cache: CacheConfig {
                ttl: Duration::from_secs(ttl_secs),
                max_capacity,
            },
        })
    }
}

fn parse_var<T>(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = get(var).unwrap_or_else(|| default.to_string());
    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.mock_dir.is_none());
        assert_eq!(config.stations_file, PathBuf::from("railwayStationsList.json"));
        assert_eq!(config.recent_file, PathBuf::from("recent_searches.json"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.cache.ttl, Duration::from_secs(600));
        assert_eq!(config.cache.max_capacity, 500);
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("BIND_ADDR", "0.0.0.0:9000"),
            ("TRAINS_API_URL", "http://trains.internal/"),
            ("TRAINS_API_TIMEOUT_SECS", "5"),
            ("TRAINS_MOCK_DIR", "data/mock_trains"),
            ("CACHE_TTL_SECS", "60"),
            ("CACHE_MAX_CAPACITY", "10"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.api.base_url, "http://trains.internal/");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.mock_dir, Some(PathBuf::from("data/mock_trains")));
        assert_eq!(config.cache.ttl, Duration::from_secs(60));
        assert_eq!(config.cache.max_capacity, 10);
    }

    #[test]
    fn blank_values_use_defaults() {
        let config = config_from(&[("TRAINS_MOCK_DIR", "  "), ("BIND_ADDR", "")]).unwrap();
        assert!(config.mock_dir.is_none());
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn invalid_number_is_error() {
        let err = config_from(&[("CACHE_TTL_SECS", "ten")]).unwrap_err();
        let ConfigError::Invalid { var, value, .. } = err;
        assert_eq!(var, "CACHE_TTL_SECS");
        assert_eq!(value, "ten");
    }

    #[test]
    fn invalid_address_is_error() {
        assert!(config_from(&[("BIND_ADDR", "localhost")]).is_err());
    }
}
