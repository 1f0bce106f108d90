//! Resolved application configuration.

use crate::env::EnvSource;

/// Days of history kept in the local database. Fixed; no environment
/// variable overrides it.
pub const DATA_RETENTION_DAYS: u32 = 90;

/// Immutable startup configuration.
///
/// Produced once by [`crate::load`] and injected into whatever consumes it.
/// Missing credentials resolve to empty strings rather than errors; the
/// consumers decide whether an empty key is usable.
#[derive(Debug, Clone)]
pub struct Config {
    pub alpaca_api_key: String,
    pub alpaca_secret_key: String,
    pub alpaca_base_url: String,
    pub alpaca_paper: bool,
    pub gemini_api_key: String,
    pub database_path: String,
    pub server_port: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub data_retention_days: u32,
}

impl Config {
    /// Reads the fixed variable set from `env` and produces a complete
    /// configuration. Never fails: anything unset or empty falls back to its
    /// default, and boolean flags are the literal comparison against
    /// `"true"`.
    pub fn resolve(env: &impl EnvSource) -> Self {
        Self {
            alpaca_api_key: env.get("ALPACA_API_KEY").unwrap_or_default(),
            alpaca_secret_key: env.get("ALPACA_SECRET_KEY").unwrap_or_default(),
            alpaca_base_url: env
                .get_or_default("ALPACA_BASE_URL", "https://paper-api.alpaca.markets"),
            alpaca_paper: env.get_or_default("ALPACA_PAPER", "true") == "true",
            gemini_api_key: env.get("GEMINI_API_KEY").unwrap_or_default(),
            database_path: env.get_or_default("DATABASE_PATH", "./data/prophet_trader.db"),
            server_port: env.get_or_default("SERVER_PORT", "4534"),
            enable_logging: env.get_or_default("ENABLE_LOGGING", "true") == "true",
            log_level: env.get_or_default("LOG_LEVEL", "info"),
            data_retention_days: DATA_RETENTION_DAYS,
        }
    }
}
