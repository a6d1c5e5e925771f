use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::Config,
    error, info,
    spotify::SpotifyClient,
    success,
    types::{ArtistTableRow, NowPlaying, Section, TopTrackTableRow},
    warning,
};

pub async fn overview(config: Config) {
    let client = SpotifyClient::new(config);

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching Spotify overview...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let overview = match client.overview().await {
        Ok(o) => o,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot fetch overview. Err: {}", e);
        }
    };
    pb.finish_and_clear();

    print_now_playing(&overview.now_playing);

    match overview.top_tracks {
        Section::Items(tracks) => {
            info!("Top tracks");
            let rows: Vec<TopTrackTableRow> = tracks
                .into_iter()
                .enumerate()
                .map(|(i, t)| TopTrackTableRow {
                    rank: i + 1,
                    title: t.title,
                    artist: t.artist,
                    uri: t.uri,
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        Section::Failed(e) => warning!("{}", e.error),
    }

    match overview.followed_artists {
        Section::Items(artists) => {
            info!("Followed artists");
            let rows: Vec<ArtistTableRow> = artists
                .into_iter()
                .map(|a| ArtistTableRow {
                    name: a.name,
                    url: a.artist_url.unwrap_or_default(),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        Section::Failed(e) => warning!("{}", e.error),
    }
}

fn print_now_playing(now_playing: &NowPlaying) {
    match (&now_playing.title, &now_playing.message) {
        (Some(title), _) => {
            let artist = now_playing.artist.as_deref().unwrap_or("Unknown Artist");
            if now_playing.is_playing {
                success!("Now playing: {} - {}", artist, title);
            } else {
                info!("Paused: {} - {}", artist, title);
            }
            if let Some(album) = &now_playing.album {
                info!("Album: {}", album);
            }
        }
        (None, Some(message)) => info!("{}", message),
        (None, None) => info!("Currently not playing."),
    }
}
