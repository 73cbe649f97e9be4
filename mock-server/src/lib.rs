//! Fake Twitch Helix and BetaSeries endpoints for integration tests.
//!
//! Serves static fixtures with just enough behavior to exercise the
//! workflow binaries end-to-end: Helix routes demand the `Client-Id` and
//! `Authorization` headers and answer 401 with the real API's error shape
//! otherwise; `/streams` filters by `game_id` and optional `language`;
//! `/shows/search` matches titles case-insensitively and reports unknown
//! API keys through the `errors` array BetaSeries embeds in its payloads.

use std::collections::HashMap;

use axum::{
    extract::Query,
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const API_KEY: &str = "test-betaseries-key";

pub fn app() -> Router {
    Router::new()
        .route("/helix/users/follows", get(follows))
        .route("/helix/streams/followed", get(followed_streams))
        .route("/helix/streams", get(game_streams))
        .route("/shows/search", get(search_shows))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn authorized(headers: &HeaderMap) -> bool {
    headers.contains_key("client-id") && headers.contains_key("authorization")
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "Unauthorized",
            "status": 401,
            "message": "OAuth token is missing"
        })),
    )
}

async fn follows(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    if params.get("from_id").map_or(true, |id| id.is_empty()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Bad Request",
                "status": 400,
                "message": "Must provide from_id"
            })),
        );
    }

    let data = json!([
        {
            "from_id": "123",
            "from_login": "viewer",
            "to_id": "401",
            "to_login": "streamerone",
            "to_name": "StreamerOne",
            "followed_at": "2023-01-15T10:00:00Z"
        },
        {
            "from_id": "123",
            "from_login": "viewer",
            "to_id": "402",
            "to_login": "streamertwo",
            "to_name": "StreamerTwo",
            "followed_at": "2024-06-02T18:30:00Z"
        }
    ]);
    (
        StatusCode::OK,
        Json(json!({ "total": 2, "data": data, "pagination": { "cursor": "" } })),
    )
}

fn stream_fixtures() -> Vec<Value> {
    vec![
        json!({
            "id": "900001",
            "user_id": "401",
            "user_login": "streamerone",
            "user_name": "StreamerOne",
            "game_id": "33214",
            "game_name": "Fortnite",
            "type": "live",
            "title": "Friday squads",
            "viewer_count": 1234,
            "started_at": "2024-06-02T18:00:00Z",
            "language": "en",
            "thumbnail_url": "https://static.example.com/900001.jpg",
            "is_mature": false
        }),
        json!({
            "id": "900002",
            "user_id": "402",
            "user_login": "streamertwo",
            "user_name": "StreamerTwo",
            "game_id": "33214",
            "game_name": "Fortnite",
            "type": "live",
            "title": "Parties personnalisées",
            "viewer_count": 87,
            "started_at": "2024-06-02T19:00:00Z",
            "language": "fr",
            "thumbnail_url": "https://static.example.com/900002.jpg",
            "is_mature": false
        }),
    ]
}

async fn followed_streams(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!({ "data": stream_fixtures(), "pagination": { "cursor": "" } })),
    )
}

async fn game_streams(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }

    let game_id = params.get("game_id").cloned().unwrap_or_default();
    let language = params.get("language").cloned().unwrap_or_default();

    let data: Vec<Value> = stream_fixtures()
        .into_iter()
        .filter(|s| s["game_id"] == game_id.as_str())
        .filter(|s| language.is_empty() || s["language"] == language.as_str())
        .collect();

    (
        StatusCode::OK,
        Json(json!({ "data": data, "pagination": { "cursor": "" } })),
    )
}

async fn search_shows(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let key_ok = headers
        .get("x-betaseries-key")
        .and_then(|v| v.to_str().ok())
        .map_or(false, |v| v == API_KEY);
    if !key_ok {
        // BetaSeries reports auth problems inside a 200 payload.
        return Json(json!({
            "shows": [],
            "errors": [{ "code": 1001, "text": "Invalid API key" }]
        }));
    }

    let title = params.get("title").cloned().unwrap_or_default().to_lowercase();
    let shows: Vec<Value> = show_fixtures()
        .into_iter()
        .filter(|s| {
            s["title"]
                .as_str()
                .map_or(false, |t| t.to_lowercase().contains(&title))
        })
        .collect();

    Json(json!({ "shows": shows, "errors": [] }))
}

fn show_fixtures() -> Vec<Value> {
    vec![
        json!({
            "id": 1161,
            "thetvdb_id": 81189,
            "imdb_id": "tt0903747",
            "title": "Breaking Bad",
            "description": "A chemistry teacher turns to crime.",
            "seasons": "5",
            "episodes": "62",
            "followers": "120000",
            "creation": "2008",
            "network": "AMC",
            "status": "Ended",
            "notes": { "total": 45000, "mean": 4.6, "user": 0 },
            "resource_url": "https://www.betaseries.com/serie/breakingbad"
        }),
        json!({
            "id": 2152,
            "thetvdb_id": 121361,
            "imdb_id": "tt0944947",
            "title": "Game of Thrones",
            "description": "Noble families vie for the Iron Throne.",
            "seasons": "8",
            "episodes": "73",
            "followers": "200000",
            "creation": "2011",
            "network": "HBO",
            "status": "Ended",
            "notes": { "total": 61000, "mean": 4.5, "user": 0 },
            "resource_url": "https://www.betaseries.com/serie/gameofthrones"
        }),
    ]
}
