//! # API Module
//!
//! HTTP endpoints served by the proxy.
//!
//! ## Endpoints
//!
//! - [`spotify`] - `GET /api/spotify` dispatches on the `action` and `uri` query
//!   parameters:
//!   - `action=pause` pauses playback and answers `{"status":"paused"}`
//!   - `action=play&uri=<uri>` starts playback and answers `{"status":"playing","uri":...}`
//!   - anything else answers the aggregate of now playing, top tracks and
//!     followed artists, cacheable for 60 seconds
//! - [`health`] - `GET /health` returns status and version for monitoring.
//!
//! Failures escaping a handler are rendered by [`ApiError`] as `500` with a
//! JSON body carrying an `error` key.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use sporlproxy::api::{health, spotify};
//!
//! let app = Router::new()
//!     .route("/api/spotify", get(spotify))
//!     .route("/health", get(health))
//!     .layer(Extension(client));
//! ```

mod error;
mod health;
mod spotify;

pub use error::{ApiError, GENERIC_ERROR_MESSAGE};
pub use health::health;
pub use spotify::{Action, OVERVIEW_CACHE_CONTROL, SpotifyQuery, spotify};
