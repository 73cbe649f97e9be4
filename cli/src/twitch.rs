//! Twitch Helix schemas, fetch helpers, and launcher item mapping.
//!
//! The Helix API wraps every collection in a `data` envelope and reports
//! failures as a JSON object with `error`/`status`/`message`. Fetchers
//! check the status code themselves and surface that shape as a
//! `WorkflowError::Api`.

use serde::Deserialize;
use workflow_core::alfred::Item;
use workflow_core::{Client, Response};

use crate::WorkflowError;

#[derive(Debug, Clone, Deserialize)]
pub struct Follows {
    pub total: u32,
    pub data: Vec<Follow>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Follow {
    pub from_id: String,
    pub from_login: String,
    pub to_id: String,
    pub to_login: String,
    pub to_name: String,
    pub followed_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Streams {
    pub data: Vec<Stream>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stream {
    pub id: String,
    pub user_id: String,
    pub user_login: String,
    pub user_name: String,
    pub game_id: String,
    pub game_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub viewer_count: u64,
    pub started_at: String,
    pub language: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub is_mature: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub cursor: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub status: u16,
    pub message: String,
}

/// Channels the user follows, via `users/follows?from_id=`.
pub fn fetch_follows(client: &Client, user_id: &str) -> Result<Vec<Follow>, WorkflowError> {
    let res = client.get("users/follows", &[("from_id", user_id)])?;
    let follows: Follows = decode(&res)?;
    Ok(follows.data)
}

/// Live streams among the user's follows, via `streams/followed`.
pub fn fetch_followed_streams(
    client: &Client,
    user_id: &str,
) -> Result<Vec<Stream>, WorkflowError> {
    let res = client.get("streams/followed", &[("user_id", user_id)])?;
    let streams: Streams = decode(&res)?;
    Ok(streams.data)
}

/// Live streams for a game, optionally restricted to a language.
pub fn fetch_game_streams(
    client: &Client,
    game_id: &str,
    language: &str,
) -> Result<Vec<Stream>, WorkflowError> {
    let mut query = vec![("game_id", game_id)];
    if !language.is_empty() {
        query.push(("language", language));
    }
    let res = client.get("streams", &query)?;
    let streams: Streams = decode(&res)?;
    Ok(streams.data)
}

/// Decode a completed exchange, turning non-200 statuses into the Helix
/// error shape.
fn decode<T: serde::de::DeserializeOwned>(res: &Response) -> Result<T, WorkflowError> {
    if res.status != 200 {
        return Err(api_error(res));
    }
    serde_json::from_slice(&res.body).map_err(|e| WorkflowError::Decode(e.to_string()))
}

fn api_error(res: &Response) -> WorkflowError {
    let message = match serde_json::from_slice::<ApiError>(&res.body) {
        Ok(err) => err.message,
        Err(_) => String::from_utf8_lossy(&res.body).into_owned(),
    };
    WorkflowError::Api {
        status: res.status,
        message,
    }
}

fn channel_url(login: &str) -> String {
    format!("https://www.twitch.tv/{login}")
}

pub fn follow_items(follows: &[Follow]) -> Vec<Item> {
    follows
        .iter()
        .map(|follow| {
            let url = channel_url(&follow.to_login);
            Item::result(&follow.to_name, &url, &url)
        })
        .collect()
}

pub fn followed_stream_items(streams: &[Stream]) -> Vec<Item> {
    streams
        .iter()
        .map(|stream| {
            Item::result(
                &stream.user_name,
                format!(
                    "{} - {} viewers - {}",
                    stream.game_name, stream.viewer_count, stream.title
                ),
                channel_url(&stream.user_login),
            )
        })
        .collect()
}

pub fn game_stream_items(streams: &[Stream]) -> Vec<Item> {
    streams
        .iter()
        .map(|stream| {
            Item::result(
                &stream.user_name,
                format!("{} viewers - {}", stream.viewer_count, stream.title),
                channel_url(&stream.user_login),
            )
        })
        .collect()
}
