//! Result list output for the launcher.
//!
//! # Design
//! The launcher reads a single JSON document from stdout: an object with an
//! `items` array. An `Item` is either a normal result (title, subtitle,
//! argument) or a non-actionable error entry carrying `"valid": false`;
//! the untagged enum folds both into one homogeneous list. `send_result`
//! and `send_error` are the only writers and each process calls exactly
//! one of them, once, at the end of its control flow.

use std::fmt;

use serde::Serialize;

const ERROR_TITLE: &str = "Something went wrong!";

/// One entry in the launcher's result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Result {
        title: String,
        subtitle: String,
        arg: String,
    },
    Error {
        title: String,
        subtitle: String,
        valid: bool,
    },
}

impl Item {
    pub fn result(title: impl Into<String>, subtitle: impl Into<String>, arg: impl Into<String>) -> Self {
        Item::Result {
            title: title.into(),
            subtitle: subtitle.into(),
            arg: arg.into(),
        }
    }
}

#[derive(Serialize)]
struct ResultList {
    items: Vec<Item>,
}

/// Serialize `items` as the launcher envelope. `fallback` stands in when
/// the list is empty so the launcher always has something to show.
fn render(items: Vec<Item>, fallback: Option<Item>) -> Result<String, serde_json::Error> {
    let items = if items.is_empty() {
        fallback.into_iter().collect()
    } else {
        items
    };
    serde_json::to_string(&ResultList { items })
}

fn emit(rendered: Result<String, serde_json::Error>) {
    match rendered {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to serialize result list: {e}"),
    }
}

/// Print the result list to stdout, substituting `fallback` when empty.
pub fn send_result(items: Vec<Item>, fallback: Item) {
    emit(render(items, Some(fallback)));
}

/// Print a single non-actionable error item to stdout, preserving the
/// error's message as the subtitle.
pub fn send_error(err: &dyn fmt::Display) {
    emit(render(
        vec![Item::Error {
            title: ERROR_TITLE.to_string(),
            subtitle: err.to_string(),
            valid: false,
        }],
        None,
    ));
}
