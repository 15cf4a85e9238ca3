//! Application configuration loaded from environment variables.

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, ServiceError};

/// Prefix shared by every environment variable the service reads.
pub const ENV_PREFIX: &str = "GREETER_";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Host or IP address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP port. Zero binds an ephemeral port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Logging ===
    /// Log filter used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit log lines as JSON.
    #[serde(default)]
    pub log_json: bool,

    // === Optional Endpoints ===
    /// Install the Prometheus recorder and serve /metrics.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Serve /openapi.json, the Swagger UI at /docs and ReDoc at /redoc.
    #[serde(default = "default_true")]
    pub docs_enabled: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_json: false,
            metrics_enabled: true,
            docs_enabled: true,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Build configuration from `(name, value)` pairs; only `GREETER_` names are read.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ServiceError::InvalidConfig(
                "GREETER_HOST must not be empty".to_string(),
            ));
        }

        if EnvFilter::try_new(&self.log_level).is_err() {
            return Err(ServiceError::InvalidConfig(format!(
                "GREETER_LOG_LEVEL is not a valid filter: {}",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Address to hand to the listener.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
