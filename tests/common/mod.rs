#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use sporlproxy::{config::Config, server, spotify::SpotifyClient};
use tokio::{net::TcpListener, sync::Mutex};

// Scripted answer for one fake endpoint
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: Option<Value>,
}

impl Reply {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap();
        match self.body {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

#[derive(Debug)]
pub struct FakeSpotify {
    pub token: Reply,
    pub now_playing: Reply,
    pub top_tracks: Reply,
    pub followed_artists: Reply,
    pub pause: Reply,
    pub play: Reply,
    pub requests: Vec<Recorded>,
}

impl Default for FakeSpotify {
    fn default() -> Self {
        Self {
            token: Reply::json(200, token_json("test-access-token")),
            now_playing: Reply::json(200, currently_playing_json(&["A", "B"])),
            top_tracks: Reply::json(200, top_tracks_json(10)),
            followed_artists: Reply::json(200, followed_artists_json(20)),
            pause: Reply::empty(204),
            play: Reply::empty(204),
            requests: Vec::new(),
        }
    }
}

impl FakeSpotify {
    pub fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }
}

pub type SharedFake = Arc<Mutex<FakeSpotify>>;

async fn handle(
    State(state): State<SharedFake>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let mut fake = state.lock().await;
    fake.requests.push(Recorded {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    });

    let reply = match uri.path() {
        "/api/token" => fake.token.clone(),
        "/v1/me/player/currently-playing" => fake.now_playing.clone(),
        "/v1/me/top/tracks" => fake.top_tracks.clone(),
        "/v1/me/following" => fake.followed_artists.clone(),
        "/v1/me/player/pause" => fake.pause.clone(),
        "/v1/me/player/play" => fake.play.clone(),
        _ => Reply::empty(404),
    };
    reply.into_response()
}

/// Starts a fake Spotify (accounts + Web API) and returns a config pointing at it.
pub async fn spawn_fake(fake: FakeSpotify) -> (SharedFake, Config) {
    let state: SharedFake = Arc::new(Mutex::new(fake));
    let app = Router::new().fallback(handle).with_state(Arc::clone(&state));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = Config {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        refresh_token: "refresh-token".to_string(),
        api_url: format!("http://{}/v1", addr),
        token_url: format!("http://{}/api/token", addr),
        server_addr: "127.0.0.1:0".to_string(),
    };

    (state, config)
}

/// Serves the proxy router on an ephemeral port and returns its base url.
pub async fn spawn_proxy(config: Config) -> String {
    let app = server::router(SpotifyClient::new(config));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

pub fn token_json(access_token: &str) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "Bearer",
        "expires_in": 3600,
        "scope": "user-read-currently-playing user-top-read user-follow-read"
    })
}

pub fn track_json(index: usize, artists: &[&str]) -> Value {
    let artists: Vec<Value> = artists.iter().map(|name| json!({ "name": name })).collect();
    json!({
        "name": format!("Track {}", index),
        "uri": format!("spotify:track:{}", index),
        "artists": artists,
        "album": {
            "name": format!("Album {}", index),
            "images": [
                { "url": format!("https://i.scdn.co/image/{}-large", index), "height": 640, "width": 640 },
                { "url": format!("https://i.scdn.co/image/{}-small", index), "height": 64, "width": 64 }
            ]
        },
        "external_urls": { "spotify": format!("https://open.spotify.com/track/{}", index) }
    })
}

pub fn currently_playing_json(artists: &[&str]) -> Value {
    json!({
        "is_playing": true,
        "currently_playing_type": "track",
        "item": track_json(0, artists)
    })
}

pub fn top_tracks_json(count: usize) -> Value {
    let items: Vec<Value> = (0..count)
        .map(|i| track_json(i, &["Artist One", "Artist Two"]))
        .collect();
    json!({ "items": items, "total": count, "limit": count, "offset": 0 })
}

pub fn artist_json(index: usize) -> Value {
    json!({
        "name": format!("Artist {}", index),
        "external_urls": { "spotify": format!("https://open.spotify.com/artist/{}", index) },
        "images": [
            { "url": format!("https://i.scdn.co/image/artist-{}", index), "height": 640, "width": 640 }
        ]
    })
}

pub fn followed_artists_json(count: usize) -> Value {
    let items: Vec<Value> = (0..count).map(artist_json).collect();
    json!({
        "artists": {
            "items": items,
            "next": null,
            "cursors": { "after": null },
            "total": count,
            "limit": 20
        }
    })
}
