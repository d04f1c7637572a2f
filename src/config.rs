//! Configuration management for tracklift.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage the
//! Spotify client credentials, the second catalog's tokens and the endpoints
//! both services are reached at.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::error::IngestError;

const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_MARKET: &str = "US";
const DEFAULT_CATALOG_API_URL: &str = "https://api.music.apple.com/v1";
const DEFAULT_STOREFRONT: &str = "us";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `tracklift` directory if it doesn't exist. A missing `.env`
/// file is not an error since every value can also come from the process
/// environment.
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/tracklift/.env`
/// - macOS: `~/Library/Application Support/tracklift/.env`
/// - Windows: `%LOCALAPPDATA%/tracklift/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tracklift/.env");
    path
}

fn required(key: &str) -> Result<String, IngestError> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| IngestError::MissingConfig {
            key: key.to_string(),
        })
}

fn or_default(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub fn spotify_client_id() -> Result<String, IngestError> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

pub fn spotify_client_secret() -> Result<String, IngestError> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

pub fn spotify_apiurl() -> String {
    or_default("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
}

pub fn spotify_apitoken_url() -> String {
    or_default("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL)
}

pub fn spotify_market() -> String {
    or_default("SPOTIFY_MARKET", DEFAULT_MARKET)
}

pub fn catalog_apiurl() -> String {
    or_default("CATALOG_API_URL", DEFAULT_CATALOG_API_URL)
}

pub fn catalog_storefront() -> String {
    or_default("CATALOG_STOREFRONT", DEFAULT_STOREFRONT)
}

pub fn catalog_developer_token() -> Result<String, IngestError> {
    required("CATALOG_DEVELOPER_TOKEN")
}

/// Per-user token; only the library endpoints need it.
pub fn catalog_user_token() -> Option<String> {
    required("CATALOG_USER_TOKEN").ok()
}

/// Deadline the CLI puts around each remote operation.
pub fn request_timeout() -> Duration {
    let secs = env::var("REQUEST_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
