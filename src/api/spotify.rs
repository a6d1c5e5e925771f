use axum::{
    Extension, Json,
    extract::{Query, rejection::QueryRejection},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{spotify::SpotifyClient, types::ControlStatus, warning};

use super::ApiError;

pub const OVERVIEW_CACHE_CONTROL: &str = "s-maxage=60, stale-while-revalidate=30";

#[derive(Debug, Default, Deserialize)]
pub struct SpotifyQuery {
    pub action: Option<String>,
    pub uri: Option<String>,
}

/// What a request to the endpoint asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Pause,
    Play(String),
    Overview,
}

impl Action {
    /// `action=pause` pauses. `action=play` plays only when a non-empty `uri`
    /// is given too. Everything else, including `play` without a uri, falls
    /// through to the overview.
    pub fn from_query(query: &SpotifyQuery) -> Self {
        match (query.action.as_deref(), query.uri.as_deref()) {
            (Some("pause"), _) => Action::Pause,
            (Some("play"), Some(uri)) if !uri.is_empty() => Action::Play(uri.to_string()),
            _ => Action::Overview,
        }
    }
}

/// `GET /api/spotify`.
///
/// A query string that does not decode (a repeated `action`, say) is served
/// the overview.
pub async fn spotify(
    query: Result<Query<SpotifyQuery>, QueryRejection>,
    Extension(client): Extension<SpotifyClient>,
) -> Result<Response, ApiError> {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warning!("Ignoring query string: {}", rejection.body_text());
            SpotifyQuery::default()
        }
    };

    match Action::from_query(&query) {
        Action::Pause => {
            if !client.pause().await? {
                warning!("Spotify did not confirm pause");
            }
            Ok(Json(ControlStatus::Paused).into_response())
        }
        Action::Play(uri) => {
            if !client.play(&uri).await? {
                warning!("Spotify did not confirm playback of {}", uri);
            }
            Ok(Json(ControlStatus::Playing { uri }).into_response())
        }
        Action::Overview => {
            let overview = client.overview().await?;
            Ok((
                [(header::CACHE_CONTROL, OVERVIEW_CACHE_CONTROL)],
                Json(overview),
            )
                .into_response())
        }
    }
}
