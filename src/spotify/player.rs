use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::SpotifyError,
    types::{CurrentlyPlayingResponse, NowPlaying, PlayRequest},
};

use super::{NOW_PLAYING_PATH, PAUSE_PATH, PLAY_PATH, SpotifyClient, join_artist_names};

pub const NOT_PLAYING_MESSAGE: &str = "Currently not playing.";
pub const DEVICE_INACTIVE_MESSAGE: &str = "Currently not playing (device inactive).";

impl SpotifyClient {
    /// Retrieves the track currently playing on the account.
    ///
    /// # Status Mapping
    ///
    /// - `204 No Content`, or any status from 400 upwards: "Currently not playing."
    ///   (this also hides genuine upstream failures behind the idle state)
    /// - `200` without an `item`: "Currently not playing (device inactive)."
    /// - `200` with an `item`: the shaped track, see [`shape_now_playing`]
    ///
    /// # Errors
    ///
    /// Authentication failures, network failures and a success body that is not
    /// JSON are propagated.
    pub async fn now_playing(&self) -> Result<NowPlaying, SpotifyError> {
        let endpoint = self.config().api_endpoint(NOW_PLAYING_PATH);
        let res = self.fetch(Method::GET, &endpoint).await?;

        let status = res.status();
        if status == StatusCode::NO_CONTENT || status.as_u16() >= 400 {
            return Ok(NowPlaying::idle(NOT_PLAYING_MESSAGE));
        }

        let payload: Value = res.json().await?;
        Ok(shape_now_playing(&payload))
    }

    /// Pauses playback. Returns `true` if Spotify answered `204 No Content`.
    pub async fn pause(&self) -> Result<bool, SpotifyError> {
        let endpoint = self.config().api_endpoint(PAUSE_PATH);
        let res = self.fetch(Method::PUT, &endpoint).await?;
        Ok(res.status() == StatusCode::NO_CONTENT)
    }

    /// Starts playback of `uri` on the active device.
    ///
    /// Sends `{"uris":[uri]}`. The uri is passed through unvalidated. Returns
    /// `true` if Spotify answered `204 No Content`.
    pub async fn play(&self, uri: &str) -> Result<bool, SpotifyError> {
        let endpoint = self.config().api_endpoint(PLAY_PATH);
        let body = PlayRequest {
            uris: vec![uri.to_string()],
        };
        let res = self.fetch_json(Method::PUT, &endpoint, &body).await?;
        Ok(res.status() == StatusCode::NO_CONTENT)
    }
}

/// Shapes a `200` currently-playing payload.
///
/// A payload that is `null`, lacks `item` or cannot be read as a playback
/// state yields the device-inactive sentinel. Otherwise `artist` joins all
/// artist names, and `album` / `albumImageUrl` (first image) are set when the
/// item has an album.
pub fn shape_now_playing(payload: &Value) -> NowPlaying {
    let Ok(current) = CurrentlyPlayingResponse::deserialize(payload) else {
        return NowPlaying::idle(DEVICE_INACTIVE_MESSAGE);
    };
    let Some(item) = current.item else {
        return NowPlaying::idle(DEVICE_INACTIVE_MESSAGE);
    };

    let album_name = item.album.as_ref().and_then(|album| album.name.clone());
    let album_image_url = item
        .album
        .as_ref()
        .and_then(|album| album.images.first())
        .map(|image| image.url.clone());

    NowPlaying {
        is_playing: current.is_playing,
        artist: Some(join_artist_names(item.artists.as_deref())),
        title: Some(item.name),
        album: album_name,
        album_image_url,
        song_url: item.external_urls.and_then(|urls| urls.spotify),
        message: None,
    }
}
