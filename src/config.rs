//! Configuration management for the Spotificity watch-list client.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage the
//! gateway endpoint the remote operations are invoked through, the optional API
//! key and the request timeout.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line overrides (highest priority, applied by the binary)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use thiserror::Error;

pub const GATEWAY_URL_VAR: &str = "SPOTIFICITY_GATEWAY_URL";
pub const API_KEY_VAR: &str = "SPOTIFICITY_API_KEY";
pub const TIMEOUT_VAR: &str = "SPOTIFICITY_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },

    #[error("Cannot prepare configuration directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything the HTTP gateway invoker needs to reach the backend.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Assembles the gateway configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None)
    }

    /// Like [`GatewayConfig::from_env`], but a non-empty `base_url` (e.g. a
    /// `--gateway-url` flag) wins over `SPOTIFICITY_GATEWAY_URL`.
    pub fn resolve(base_url: Option<&str>) -> Result<Self, ConfigError> {
        let base_url = match base_url.map(normalize_url).filter(|u| !u.is_empty()) {
            Some(url) => url.to_string(),
            None => gateway_url()?,
        };

        Ok(Self {
            base_url,
            api_key: api_key(),
            timeout: request_timeout()?,
        })
    }
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spotificity/.env`.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotificity/.env`
/// - macOS: `~/Library/Application Support/spotificity/.env`
/// - Windows: `%LOCALAPPDATA%/spotificity/.env`
///
/// A missing file is not an error; variables already present in the process
/// environment keep working on their own.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created.
pub async fn load_env() -> Result<(), ConfigError> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) => log::debug!("No environment file at {}: {}", path.display(), e),
    }
    Ok(())
}

/// Returns the base URL of the gateway that exposes the remote operations.
///
/// Retrieves the `SPOTIFICITY_GATEWAY_URL` environment variable. A trailing
/// slash is stripped so operation names can be appended directly.
///
/// # Example
///
/// ```
/// let url = gateway_url()?; // e.g., "https://abc123.execute-api.us-east-1.amazonaws.com/prod"
/// ```
pub fn gateway_url() -> Result<String, ConfigError> {
    let value = env::var(GATEWAY_URL_VAR).map_err(|_| ConfigError::Missing(GATEWAY_URL_VAR))?;
    let trimmed = normalize_url(&value);
    if trimmed.is_empty() {
        return Err(ConfigError::Missing(GATEWAY_URL_VAR));
    }
    Ok(trimmed.to_string())
}

/// Returns the optional API key sent as `x-api-key` with every call.
pub fn api_key() -> Option<String> {
    env::var(API_KEY_VAR)
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

/// Returns the upper bound for a single remote round trip.
///
/// Reads `SPOTIFICITY_TIMEOUT_SECS`, defaulting to 30 seconds. Zero is
/// rejected since it would fail every call.
pub fn request_timeout() -> Result<Duration, ConfigError> {
    match env::var(TIMEOUT_VAR) {
        Ok(value) => parse_timeout(&value),
        Err(_) => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Invalid {
            var: TIMEOUT_VAR,
            value: value.to_string(),
        }),
    }
}

fn normalize_url(url: &str) -> &str {
    url.trim().trim_end_matches('/')
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotificity/.env");
    path
}
