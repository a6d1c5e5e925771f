//! Configuration management for the Spotify proxy.
//!
//! Configuration is read once at startup into a [`Config`] value which is then
//! handed to the adapter. Values come from the process environment, optionally
//! seeded from a `.env` file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (for endpoints and the server address)

use std::{env, path::PathBuf};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives under `sporlproxy/.env` in the platform-specific local data
/// directory:
/// - Linux: `~/.local/share/sporlproxy/.env`
/// - macOS: `~/Library/Application Support/sporlproxy/.env`
/// - Windows: `%LOCALAPPDATA%/sporlproxy/.env`
///
/// Variables already present in the environment are not overwritten.
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created or the
/// `.env` file is missing or malformed. Callers treat this as non-fatal since
/// the environment may already carry every value.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporlproxy/.env");
    path
}

/// Process-wide, read-only settings for the Spotify adapter.
///
/// The three credentials are not validated. Missing values turn
/// into an empty string and surface later as an upstream authentication
/// failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    /// Base URL of the Web API, without trailing slash, e.g. `https://api.spotify.com/v1`.
    pub api_url: String,
    /// Full URL of the OAuth token endpoint.
    pub token_url: String,
    /// Address the HTTP server binds to, e.g. `127.0.0.1:3000`.
    pub server_addr: String,
}

impl Config {
    /// Builds the configuration from the current process environment.
    ///
    /// Reads `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET` and
    /// `SPOTIFY_REFRESH_TOKEN`, plus the optional overrides `SPOTIFY_API_URL`,
    /// `SPOTIFY_API_TOKEN_URL` and `SERVER_ADDRESS`.
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("SPOTIFY_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("SPOTIFY_CLIENT_SECRET").unwrap_or_default(),
            refresh_token: env::var("SPOTIFY_REFRESH_TOKEN").unwrap_or_default(),
            api_url: var_or("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL),
            token_url: var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_API_TOKEN_URL),
            server_addr: var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
        }
    }

    /// Joins an API path such as `/me/player/pause` onto the configured base URL.
    pub fn api_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), path)
    }
}

fn var_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}
