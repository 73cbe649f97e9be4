//! BetaSeries schemas, search helper, and launcher item mapping.
//!
//! BetaSeries is looser than Helix: errors ride inside the payload's
//! `errors` array, sometimes under a 200 status. A non-empty array is
//! treated as a failed call regardless of the status code.

use serde::Deserialize;
use workflow_core::alfred::Item;
use workflow_core::{Client, Response};

use crate::WorkflowError;

#[derive(Debug, Clone, Deserialize)]
pub struct Shows {
    #[serde(default)]
    pub shows: Vec<Show>,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

/// The slice of the BetaSeries show record the workflow renders.
#[derive(Debug, Clone, Deserialize)]
pub struct Show {
    pub id: u64,
    #[serde(default)]
    pub thetvdb_id: u64,
    #[serde(default)]
    pub imdb_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub seasons: String,
    #[serde(default)]
    pub episodes: String,
    #[serde(default)]
    pub followers: String,
    #[serde(default)]
    pub creation: String,
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub notes: Notes,
    pub resource_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Notes {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub mean: f64,
    #[serde(default)]
    pub user: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub text: String,
}

/// Search shows by title, via `shows/search?title=`.
pub fn search_shows(client: &Client, title: &str) -> Result<Vec<Show>, WorkflowError> {
    let res = client.get("shows/search", &[("title", title)])?;
    let shows = decode(&res)?;
    Ok(shows.shows)
}

fn decode(res: &Response) -> Result<Shows, WorkflowError> {
    if res.status != 200 {
        return Err(WorkflowError::Api {
            status: res.status,
            message: String::from_utf8_lossy(&res.body).into_owned(),
        });
    }
    let shows: Shows =
        serde_json::from_slice(&res.body).map_err(|e| WorkflowError::Decode(e.to_string()))?;
    if let Some(err) = shows.errors.first() {
        return Err(WorkflowError::Api {
            status: res.status,
            message: format!("{} (code {})", err.text, err.code),
        });
    }
    Ok(shows)
}

pub fn show_items(shows: &[Show]) -> Vec<Item> {
    shows
        .iter()
        .map(|show| Item::result(&show.title, &show.resource_url, &show.resource_url))
        .collect()
}
