use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Decimal places applied to suggestion figures.
    pub growth_precision: u32,
    /// Timeout for upstream fundamentals requests (seconds).
    pub fetch_timeout_secs: u64,
    /// How long fetched fundamentals stay cached per ticker (seconds).
    pub fundamentals_cache_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3001);

        Self {
            host,
            port,
            growth_precision: env::var("GROWTH_PRECISION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            fundamentals_cache_ttl_secs: env::var("FUNDAMENTALS_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(900),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            growth_precision: 2,
            fetch_timeout_secs: 30,
            fundamentals_cache_ttl_secs: 900,
        }
    }
}
