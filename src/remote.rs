//! Remote configuration fetch.
//!
//! A single authenticated POST to the configuration service. On success the
//! returned key/value pairs are written into the environment source,
//! overwriting whatever is already there; on any failure the source is left
//! untouched and the caller decides the fallback. One attempt, no retries.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::info;

use crate::env::EnvSource;
use crate::error::RemoteConfigError;

/// Variable holding the bearer token for the configuration service.
pub const CONFIG_ACCESS_TOKEN: &str = "CONFIG_ACCESS_TOKEN";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Key/value overrides returned by the configuration service.
///
/// Fully consumed inside [`fetch_remote`]: entries are copied into the
/// environment source and the payload is dropped.
#[derive(Debug, Deserialize)]
pub struct RemoteConfigPayload(HashMap<String, String>);

/// Fetches configuration from the service at `service_url` and applies it to
/// `env`.
///
/// Requires `CONFIG_ACCESS_TOKEN` in `env`; fails with
/// [`RemoteConfigError::MissingToken`] before any network I/O otherwise.
/// Expects status 200 with a JSON map of strings. Every entry with a
/// non-empty value overwrites the variable in `env`; empty values are
/// skipped rather than clearing a variable.
pub async fn fetch_remote(
    service_url: &str,
    env: &mut impl EnvSource,
) -> Result<(), RemoteConfigError> {
    let token = match env.get(CONFIG_ACCESS_TOKEN) {
        Some(token) if !token.is_empty() => token,
        _ => return Err(RemoteConfigError::MissingToken),
    };

    let url = Url::parse(service_url)?;

    let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let response = client
        .post(url)
        .bearer_auth(&token)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if status != StatusCode::OK {
        return Err(RemoteConfigError::BadStatus { status, body });
    }

    let payload: RemoteConfigPayload = serde_json::from_str(&body)?;
    for (key, value) in payload.0 {
        if !value.is_empty() {
            env.set(&key, &value);
        }
    }

    info!("loaded configuration from config service");
    Ok(())
}
