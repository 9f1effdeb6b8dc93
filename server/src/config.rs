use std::{net::SocketAddr, str::FromStr};

use anyhow::Context;
use geo::GeolocationConfig;
use query_cache::MemoryConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cache: MemoryConfig,
    pub geolocation: GeolocationConfig,
    /// Start with the bundled sample venues instead of an empty store.
    pub seed_sample_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8880,
            cache: MemoryConfig::default(),
            geolocation: GeolocationConfig::default(),
            seed_sample_data: true,
        }
    }
}

impl AppConfig {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("SERVER_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "SERVER_PORT", defaults.port)?,
            cache: MemoryConfig {
                capacity: parse_or(
                    &lookup,
                    "CACHE_CAPACITY",
                    defaults.cache.capacity,
                )?,
                ttl_secs: parse_or(
                    &lookup,
                    "CACHE_TTL_SECS",
                    defaults.cache.ttl_secs,
                )?,
            },
            geolocation: GeolocationConfig {
                timeout_secs: parse_or(
                    &lookup,
                    "GEOLOCATION_TIMEOUT_SECS",
                    defaults.geolocation.timeout_secs,
                )?,
                default_lat: parse_or(
                    &lookup,
                    "DEFAULT_LAT",
                    defaults.geolocation.default_lat,
                )?,
                default_lng: parse_or(
                    &lookup,
                    "DEFAULT_LNG",
                    defaults.geolocation.default_lng,
                )?,
            },
            seed_sample_data: parse_or(
                &lookup,
                "SEED_SAMPLE_DATA",
                defaults.seed_sample_data,
            )?,
        })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| {
                format!("Invalid listen address {}:{}", self.host, self.port)
            })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => {
            raw.trim()
                .parse()
                .with_context(|| format!("Invalid value for {key}: {raw:?}"))
        }
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.port, 8880);
        assert_eq!(config.cache.ttl_secs, 300);
        assert_eq!(config.cache.capacity, 10_000);
        assert_eq!(config.geolocation.timeout_secs, 10);
        assert!(config.seed_sample_data);
        assert_eq!(config.socket_addr().unwrap().port(), 8880);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "9000"),
            ("CACHE_TTL_SECS", "60"),
            ("DEFAULT_LAT", "46.7712"),
            ("SEED_SAMPLE_DATA", "false"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9000");
        assert_eq!(config.cache.ttl_secs, 60);
        assert_eq!(config.geolocation.default_lat, 46.7712);
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[("SERVER_PORT", "eighty")]))
            .unwrap_err();

        assert!(err.to_string().contains("SERVER_PORT"));
    }
}
