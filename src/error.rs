use thiserror::Error;

/// Failure to exchange the refresh token for a bearer token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint answered with a non-success status.
    #[error("Failed to get access token: {0}")]
    Rejected(String),

    #[error("Failed to reach token endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success status whose body is not a token response.
    #[error("Failed to decode access token: {0}")]
    Decode(reqwest::Error),
}

/// Errors propagated out of the Spotify adapter.
///
/// Shape problems in list payloads never end up here; those are folded into
/// [`crate::types::Section::Failed`] by the readers themselves.
#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("Spotify Auth Error: {0}")]
    Auth(#[from] AuthError),

    /// Network failure or an undecodable response body.
    #[error("Spotify request failed: {0}")]
    Request(#[from] reqwest::Error),
}
