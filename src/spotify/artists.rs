use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::SpotifyError,
    types::{ArtistObject, ErrorShape, FollowedArtist, FollowedArtistsResponse, Section},
    warning,
};

use super::{FOLLOWED_ARTISTS_LIMIT, FOLLOWED_ARTISTS_PATH, SpotifyClient};

pub const FOLLOWED_ARTISTS_ERROR: &str = "Failed to fetch followed artists.";

impl SpotifyClient {
    /// Retrieves up to twenty artists the user follows, in the order Spotify
    /// returns them.
    ///
    /// Only the first page is read; there is no cursor pagination. Like
    /// [`SpotifyClient::top_tracks`], a payload without `artists.items` yields
    /// [`Section::Failed`] instead of an error.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// if let Some(artists) = client.followed_artists().await?.items() {
    ///     for artist in artists {
    ///         println!("{}", artist.name);
    ///     }
    /// }
    /// ```
    pub async fn followed_artists(&self) -> Result<Section<FollowedArtist>, SpotifyError> {
        let endpoint = self.config().api_endpoint(FOLLOWED_ARTISTS_PATH);
        let res = self.fetch(Method::GET, &endpoint).await?;
        let payload: Value = res.json().await?;

        Ok(shape_followed_artists(payload))
    }
}

pub fn shape_followed_artists(payload: Value) -> Section<FollowedArtist> {
    match FollowedArtistsResponse::deserialize(&payload) {
        Ok(res) => Section::Items(
            res.artists
                .items
                .into_iter()
                .take(FOLLOWED_ARTISTS_LIMIT)
                .map(to_followed_artist)
                .collect(),
        ),
        Err(_) => {
            warning!("Error fetching followed artists: {}", payload);
            Section::Failed(ErrorShape::new(FOLLOWED_ARTISTS_ERROR, Some(payload)))
        }
    }
}

fn to_followed_artist(artist: ArtistObject) -> FollowedArtist {
    FollowedArtist {
        name: artist.name,
        artist_url: artist.external_urls.and_then(|urls| urls.spotify),
        image_url: artist.images.into_iter().next().map(|image| image.url),
    }
}
