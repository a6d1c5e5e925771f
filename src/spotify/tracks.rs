use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::SpotifyError,
    types::{ErrorShape, Section, TopTrack, TopTracksResponse, TrackObject},
    warning,
};

use super::{SpotifyClient, TOP_TRACKS_LIMIT, TOP_TRACKS_PATH, join_artist_names};

pub const TOP_TRACKS_ERROR: &str = "Failed to fetch top tracks.";

impl SpotifyClient {
    /// Retrieves the user's short-term top tracks, at most ten, in ranking order.
    ///
    /// A payload without a usable `items` list is not an error: the result is
    /// [`Section::Failed`] carrying the raw payload as details. Authentication,
    /// network and JSON decoding failures are propagated.
    pub async fn top_tracks(&self) -> Result<Section<TopTrack>, SpotifyError> {
        let endpoint = self.config().api_endpoint(TOP_TRACKS_PATH);
        let res = self.fetch(Method::GET, &endpoint).await?;
        let payload: Value = res.json().await?;

        Ok(shape_top_tracks(payload))
    }
}

pub fn shape_top_tracks(payload: Value) -> Section<TopTrack> {
    match TopTracksResponse::deserialize(&payload) {
        Ok(res) => Section::Items(
            res.items
                .into_iter()
                .take(TOP_TRACKS_LIMIT)
                .map(to_top_track)
                .collect(),
        ),
        Err(_) => {
            warning!("Error fetching top tracks: {}", payload);
            Section::Failed(ErrorShape::new(TOP_TRACKS_ERROR, Some(payload)))
        }
    }
}

fn to_top_track(track: TrackObject) -> TopTrack {
    TopTrack {
        artist: join_artist_names(track.artists.as_deref()),
        title: track.name,
        song_url: track.external_urls.and_then(|urls| urls.spotify),
        uri: track.uri,
    }
}
