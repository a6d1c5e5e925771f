//! # CLI Module
//!
//! Command implementations for the `sporlproxy` binary. Every command builds a
//! [`crate::spotify::SpotifyClient`] from the startup [`crate::config::Config`]
//! and reports through the console macros (`info!`, `success!`, `warning!`,
//! `error!`).
//!
//! ## Commands
//!
//! - [`serve`] - Runs the HTTP proxy on `SERVER_ADDRESS`
//! - [`overview`] - Prints now playing, top tracks and followed artists
//! - [`pause`] - Pauses playback on the active device
//! - [`play`] - Plays a track or context uri on the active device
//!
//! ## Usage Patterns
//!
//! ```bash
//! sporlproxy serve                               # expose GET /api/spotify
//! sporlproxy overview                            # same data, as tables
//! sporlproxy play spotify:track:4uLU6hMCjMI75M1A2tKUQC
//! sporlproxy pause
//! ```
//!
//! Failures that leave nothing to show terminate through `error!` with exit
//! code 1. A failed list section only produces a warning; the rest of the
//! overview is still printed.

mod overview;
mod playback;
mod serve;

pub use overview::overview;
pub use playback::{pause, play};
pub use serve::serve;
