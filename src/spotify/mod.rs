//! # Spotify Integration Module
//!
//! This module is the adapter between the proxy and the Spotify Web API. It
//! covers token acquisition, authenticated requests, the three read operations
//! behind the aggregate overview, and the two playback commands.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handler / CLI command
//!          ↓
//! SpotifyClient
//!     ├── Authentication (refresh token grant, per call)
//!     ├── Authenticated fetch (bearer header, optional JSON body)
//!     ├── Player (now playing, pause, play)
//!     ├── Top tracks
//!     └── Followed artists
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! Every outbound call exchanges the configured refresh token for a fresh
//! bearer token first. Nothing is cached between calls, so the client holds no
//! mutable state and can be cloned into any number of concurrent handlers.
//!
//! ## Error Handling
//!
//! - Token failures surface as [`crate::error::AuthError`], wrapped in
//!   [`crate::error::SpotifyError::Auth`] by the authenticated fetch.
//! - Unexpected list payloads are not errors: the readers return
//!   [`crate::types::Section::Failed`] and the overview still succeeds.
//! - The now playing reader maps 204 and every status from 400 upwards to the
//!   "not playing" sentinel.
//! - There are no retries.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - refresh token exchange
//! - `GET /me/player/currently-playing`
//! - `GET /me/top/tracks?limit=10&time_range=short_term`
//! - `GET /me/following?type=artist&limit=20`
//! - `PUT /me/player/pause`
//! - `PUT /me/player/play`
//!
//! ## Usage
//!
//! ```rust,ignore
//! let client = SpotifyClient::new(Config::from_env());
//! let overview = client.overview().await?;
//! client.play("spotify:track:4uLU6hMCjMI75M1A2tKUQC").await?;
//! ```

use std::sync::Arc;

use reqwest::Client;

use crate::{config::Config, error::SpotifyError, types::AggregateResponse};

pub mod artists;
pub mod auth;
pub mod fetch;
pub mod player;
pub mod tracks;

pub const NOW_PLAYING_PATH: &str = "/me/player/currently-playing";
pub const TOP_TRACKS_PATH: &str = "/me/top/tracks?limit=10&time_range=short_term";
pub const FOLLOWED_ARTISTS_PATH: &str = "/me/following?type=artist&limit=20";
pub const PAUSE_PATH: &str = "/me/player/pause";
pub const PLAY_PATH: &str = "/me/player/play";

pub const TOP_TRACKS_LIMIT: usize = 10;
pub const FOLLOWED_ARTISTS_LIMIT: usize = 20;

/// Handle to the Spotify Web API for one configured account.
///
/// Cloning is cheap: the configuration is shared and `reqwest::Client` is
/// reference counted internally.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    config: Arc<Config>,
    http: Client,
}

impl SpotifyClient {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reads now playing, top tracks and followed artists concurrently.
    ///
    /// All three reads run to completion before the result is assembled. A
    /// malformed list payload only marks its own section as failed; an error
    /// propagated by any of the reads (authentication, network, undecodable
    /// body) fails the whole overview.
    pub async fn overview(&self) -> Result<AggregateResponse, SpotifyError> {
        let (now_playing, top_tracks, followed_artists) = tokio::join!(
            self.now_playing(),
            self.top_tracks(),
            self.followed_artists()
        );

        Ok(AggregateResponse {
            now_playing: now_playing?,
            top_tracks: top_tracks?,
            followed_artists: followed_artists?,
        })
    }
}

/// Joins artist names with `", "` in upstream order.
///
/// Falls back to `"Unknown Artist"` when the list is missing or empty.
pub fn join_artist_names(artists: Option<&[crate::types::ArtistRef]>) -> String {
    let joined = artists
        .unwrap_or_default()
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    if joined.is_empty() {
        "Unknown Artist".to_string()
    } else {
        joined
    }
}
