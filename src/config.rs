//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Upstream API ===
    /// Base URL of the upstream todo collection endpoint.
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,

    // === HTTP Client ===
    /// Outbound request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    /// Connection pool size per host.
    #[serde(default = "default_http_pool_size")]
    pub http_pool_size: usize,

    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,

    /// Expose Prometheus metrics on /metrics.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_upstream_url() -> String {
    "https://jsonplaceholder.typicode.com/todos".to_string()
}

fn default_http_timeout_ms() -> u64 {
    10_000
}

fn default_http_pool_size() -> usize {
    10
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.upstream_url.is_empty() {
            return Err("UPSTREAM_URL is required".to_string());
        }

        if !self.upstream_url.starts_with("http://") && !self.upstream_url.starts_with("https://") {
            return Err("UPSTREAM_URL must start with http:// or https://".to_string());
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Upstream base URL with any trailing slashes removed.
    pub fn upstream_base(&self) -> &str {
        self.upstream_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            upstream_url: default_upstream_url(),
            http_timeout_ms: default_http_timeout_ms(),
            http_pool_size: default_http_pool_size(),
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
            metrics_enabled: true,
        }
    }

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(
            default_upstream_url(),
            "https://jsonplaceholder.typicode.com/todos"
        );
        assert_eq!(default_port(), 8080);
        assert_eq!(default_http_timeout_ms(), 10_000);
        assert!(default_true());
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_upstream_url() {
        let mut config = test_config();
        config.upstream_url = "".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_upstream_url() {
        let mut config = test_config();
        config.upstream_url = "ftp://example.com/todos".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn upstream_base_strips_trailing_slash() {
        let mut config = test_config();
        config.upstream_url = "https://example.com/todos/".to_string();
        assert_eq!(config.upstream_base(), "https://example.com/todos");
    }
}
