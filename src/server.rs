use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr};

use crate::{Res, api, spotify::SpotifyClient};

pub fn router(client: SpotifyClient) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/spotify", get(api::spotify))
        .layer(Extension(client))
}

/// Binds the configured server address and serves [`router`] until the
/// process is stopped.
pub async fn start_api_server(client: SpotifyClient) -> Res<()> {
    let addr = SocketAddr::from_str(&client.config().server_addr)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(client)).await?;
    Ok(())
}
