//! Cascading configuration load.
//!
//! Precedence, highest first: values pushed by the remote configuration
//! service, values already present in the environment, values from the
//! local `.env` file, built-in defaults. A successful remote fetch is
//! authoritative and the `.env` file is not consulted at all in that case;
//! any remote failure is downgraded to a warning and the local path runs as
//! if no service were configured.

use tracing::warn;

use crate::config::Config;
use crate::env::{EnvSource, ProcessEnv};
use crate::{local, remote};

/// Variable naming the remote configuration service endpoint. When unset or
/// empty, no network I/O happens at all.
pub const CONFIG_SERVICE_URL: &str = "CONFIG_SERVICE_URL";

/// Resolves startup configuration from `env`.
///
/// Never fails: every external source is best-effort and defaults backfill
/// whatever remains. Remote-fetch problems are observable only as warnings,
/// so a mistyped service URL degrades to local configuration instead of
/// aborting startup.
pub async fn load(env: &mut impl EnvSource) -> Config {
    if let Some(service_url) = env.get(CONFIG_SERVICE_URL).filter(|url| !url.is_empty()) {
        match remote::fetch_remote(&service_url, env).await {
            Ok(()) => return Config::resolve(env),
            Err(e) => warn!("failed to load remote config ({e}), falling back to local .env"),
        }
    }

    local::load_env_file(env);
    Config::resolve(env)
}

/// [`load`] against the real process environment.
pub async fn load_from_process_env() -> Config {
    load(&mut ProcessEnv).await
}
