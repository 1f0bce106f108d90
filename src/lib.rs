//! Startup configuration for the Prophet trading stack.
//!
//! Configuration is resolved once at startup by cascading over three
//! sources: an optional remote configuration service, the local `.env`
//! file, and built-in defaults. The remote service, when configured and
//! reachable, is authoritative; otherwise the `.env` file fills whatever
//! the environment does not already define, and defaults cover the rest.
//!
//! ```no_run
//! # async fn startup() {
//! let config = prophet_config::load_from_process_env().await;
//! assert_eq!(config.data_retention_days, 90);
//! # }
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod loader;
pub mod local;
pub mod remote;

pub use config::{Config, DATA_RETENTION_DAYS};
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use error::RemoteConfigError;
pub use loader::{CONFIG_SERVICE_URL, load, load_from_process_env};
pub use remote::{CONFIG_ACCESS_TOKEN, RemoteConfigPayload};
