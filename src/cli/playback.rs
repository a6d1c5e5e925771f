use crate::{config::Config, error, spotify::SpotifyClient, success, warning};

pub async fn pause(config: Config) {
    let client = SpotifyClient::new(config);
    match client.pause().await {
        Ok(true) => success!("Playback paused"),
        Ok(false) => warning!("Spotify did not confirm pause. Is a device active?"),
        Err(e) => error!("Cannot pause playback. Err: {}", e),
    }
}

pub async fn play(config: Config, uri: String) {
    let client = SpotifyClient::new(config);
    match client.play(&uri).await {
        Ok(true) => success!("Playing {}", uri),
        Ok(false) => warning!(
            "Spotify did not confirm playback of {}. Is a device active?",
            uri
        ),
        Err(e) => error!("Cannot start playback. Err: {}", e),
    }
}
