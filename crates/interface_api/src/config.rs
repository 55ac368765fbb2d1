//! API configuration

use serde::Deserialize;

use core_kernel::{CoreError, Currency, Money};
use domain_rating::STANDARD_LEVY;

/// API server configuration
///
/// Read from `API_`-prefixed environment variables; anything unset falls
/// back to [`Default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// SQLite connection URL
    pub database_url: String,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// PNG printed in the quotation header; omitted when unset or unreadable
    pub logo_path: Option<String>,
    /// Fixed per-policy levy added to every charged premium, whole KES
    pub levy_amount: i64,
    /// Pool size
    pub max_connections: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_url: "sqlite://pacific.db".to_string(),
            log_level: "info".to_string(),
            logo_path: Some("logo.png".to_string()),
            levy_amount: STANDARD_LEVY,
            max_connections: 5,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?;

        config.try_deserialize()
    }

    /// Rejects settings the server cannot run with
    pub fn validated(self) -> Result<Self, CoreError> {
        if self.levy_amount < 0 {
            return Err(CoreError::configuration(format!(
                "API_LEVY_AMOUNT cannot be negative, got {}",
                self.levy_amount
            )));
        }
        if self.max_connections == 0 {
            return Err(CoreError::configuration("API_MAX_CONNECTIONS must be at least 1"));
        }
        Ok(self)
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Levy as money
    pub fn levy(&self) -> Money {
        Money::from_major(self.levy_amount, Currency::KES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8000");
        assert_eq!(config.levy_amount, 400);
        assert!(config.database_url.starts_with("sqlite:"));
    }

    #[test]
    fn test_rejects_negative_levy() {
        let config = ApiConfig {
            levy_amount: -1,
            ..ApiConfig::default()
        };
        assert!(matches!(config.validated(), Err(CoreError::Configuration(_))));
    }

    #[test]
    fn test_rejects_empty_pool() {
        let config = ApiConfig {
            max_connections: 0,
            ..ApiConfig::default()
        };
        assert!(config.validated().is_err());
    }

    #[test]
    fn test_levy_is_kes() {
        let config = ApiConfig {
            levy_amount: 650,
            ..ApiConfig::default()
        };
        assert_eq!(config.levy(), Money::from_major(650, Currency::KES));
    }
}
