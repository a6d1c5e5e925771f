use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tabled::Tabled;

// Upstream payloads

/// Reads an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
    pub scope: Option<String>,
}

/// Error body returned by the token endpoint on a non-success status.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenErrorResponse {
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl TokenErrorResponse {
    pub fn reason(self) -> String {
        match (self.error, self.error_description) {
            (Some(error), Some(description)) => format!("{} ({})", error, description),
            (Some(error), None) => error,
            (None, Some(description)) => description,
            (None, None) => "Unknown error".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRef {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackObject {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub artists: Option<Vec<ArtistRef>>,
    pub album: Option<AlbumRef>,
    pub external_urls: Option<ExternalUrls>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentlyPlayingResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_playing: bool,
    pub item: Option<TrackObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<TrackObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FollowedArtistsResponse {
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistsContainer {
    pub items: Vec<ArtistObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistObject {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub external_urls: Option<ExternalUrls>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayRequest {
    pub uris: Vec<String>,
}

// Proxy responses

/// What the account is listening to right now.
///
/// When nothing is playing only `is_playing` and `message` are set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    pub is_playing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NowPlaying {
    pub fn idle(message: &str) -> Self {
        Self {
            is_playing: false,
            title: None,
            artist: None,
            album: None,
            album_image_url: None,
            song_url: None,
            message: Some(message.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopTrack {
    pub title: String,
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_url: Option<String>,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowedArtist {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorShape {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorShape {
    pub fn new(error: &str, details: Option<Value>) -> Self {
        Self {
            error: error.to_string(),
            details,
        }
    }
}

/// Result of a list reader: either every record shaped, or an error record.
///
/// Serializes untagged, so the wire form is a plain JSON array or an object
/// carrying an `error` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Section<T> {
    Items(Vec<T>),
    Failed(ErrorShape),
}

impl<T> Section<T> {
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Section::Items(items) => Some(items.as_slice()),
            Section::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Section::Failed(_))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResponse {
    pub now_playing: NowPlaying,
    pub top_tracks: Section<TopTrack>,
    pub followed_artists: Section<FollowedArtist>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ControlStatus {
    Paused,
    Playing { uri: String },
}

// Terminal output

#[derive(Tabled)]
pub struct TopTrackTableRow {
    pub rank: usize,
    pub title: String,
    pub artist: String,
    pub uri: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub url: String,
}
