//! Launcher workflow entry point for BetaSeries show search.

use clap::Parser;
use workflow_cli::{betaseries, WorkflowError};
use workflow_core::alfred::{self, Item};
use workflow_core::Client;

const BROWSE_URL: &str = "https://www.betaseries.com/";
const API_VERSION: &str = "3.0";

#[derive(Debug, Parser)]
#[command(about = "Search BetaSeries shows for the launcher")]
struct Args {
    /// Show title to search for.
    query: String,

    #[arg(long, env = "BETASERIES_API_URL", default_value = "https://api.betaseries.com/")]
    api_url: String,

    #[arg(long, env = "BETASERIES_API_KEY", hide_env_values = true)]
    api_key: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(items) => alfred::send_result(
            items,
            Item::result("Nothing found!", "Try another search…", BROWSE_URL),
        ),
        Err(err) => alfred::send_error(&err),
    }
}

fn run(args: &Args) -> Result<Vec<Item>, WorkflowError> {
    log::debug!("querying {}", args.api_url);
    let mut client = Client::new(&args.api_url)?;
    client.set_headers(vec![
        ("X-BetaSeries-Key".to_string(), args.api_key.clone()),
        ("X-BetaSeries-Version".to_string(), API_VERSION.to_string()),
    ]);

    let shows = betaseries::search_shows(&client, &args.query)?;
    Ok(betaseries::show_items(&shows))
}
