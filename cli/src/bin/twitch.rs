//! Launcher workflow entry point for Twitch queries.
//!
//! Picks one of three queries from the flags — streams for a game, live
//! followed streams, or the plain follow list — and prints the result
//! list as a single JSON document on stdout. Credentials come from the
//! launcher environment.

use clap::Parser;
use workflow_cli::{twitch, WorkflowError};
use workflow_core::alfred::{self, Item};
use workflow_core::Client;

const DIRECTORY_URL: &str = "https://www.twitch.tv/directory/following";

#[derive(Debug, Parser)]
#[command(about = "Query Twitch for the launcher")]
struct Args {
    /// Return only live follows.
    #[arg(long)]
    live: bool,

    /// Return only streams for the given game ID.
    #[arg(long)]
    game: Option<String>,

    /// Restrict game streams to an ISO 639-1 two-letter language code.
    #[arg(long = "game-lang", default_value = "")]
    game_lang: String,

    #[arg(long, env = "TWITCH_API_URL", default_value = "https://api.twitch.tv/helix/")]
    api_url: String,

    #[arg(long, env = "TWITCH_CLIENT_ID", hide_env_values = true)]
    client_id: String,

    #[arg(long, env = "TWITCH_TOKEN", hide_env_values = true)]
    token: String,

    #[arg(long, env = "TWITCH_USER_ID")]
    user_id: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(items) => alfred::send_result(
            items,
            Item::result("You're alone! ¯\\_(ツ)_/¯", "Try browsing Twitch…", DIRECTORY_URL),
        ),
        Err(err) => alfred::send_error(&err),
    }
}

fn run(args: &Args) -> Result<Vec<Item>, WorkflowError> {
    log::debug!("querying {}", args.api_url);
    let mut client = Client::new(&args.api_url)?;
    client.set_headers(vec![
        ("Client-Id".to_string(), args.client_id.clone()),
        ("Authorization".to_string(), format!("Bearer {}", args.token)),
    ]);

    if let Some(game_id) = &args.game {
        let streams = twitch::fetch_game_streams(&client, game_id, &args.game_lang)?;
        Ok(twitch::game_stream_items(&streams))
    } else if args.live {
        let streams = twitch::fetch_followed_streams(&client, &args.user_id)?;
        Ok(twitch::followed_stream_items(&streams))
    } else {
        let follows = twitch::fetch_follows(&client, &args.user_id)?;
        Ok(twitch::follow_items(&follows))
    }
}
