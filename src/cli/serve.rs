use crate::{config::Config, error, info, server::start_api_server, spotify::SpotifyClient};

pub async fn serve(config: Config) {
    info!("Serving Spotify proxy on http://{}", config.server_addr);

    let client = SpotifyClient::new(config);
    if let Err(e) = start_api_server(client).await {
        error!("Server stopped. Err: {}", e);
    }
}
