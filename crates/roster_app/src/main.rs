mod logging;
mod render;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use roster_api::{ApiConfig, HttpClient, ProfileApi, RemoteProfileApi, BASE_URL_ENV};
use roster_core::{ProfileDetail, ProfileFeed};
use roster_logging::{roster_error, roster_info};

enum Command {
    More,
    Retry,
    Refresh,
    Show(String),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("more"), None) => Command::More,
        (Some("retry"), None) => Command::Retry,
        (Some("refresh"), None) => Command::Refresh,
        (Some("show"), Some(id)) => Command::Show(id.to_string()),
        (Some("quit"), None) | (Some("q"), None) => Command::Quit,
        _ => Command::Help,
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn main() {
    logging::initialize(logging::LogDestination::File);

    let Some(config) = ApiConfig::from_env() else {
        eprintln!("Set {BASE_URL_ENV} to the profile service address, e.g. http://localhost:3000");
        std::process::exit(1);
    };
    roster_info!("starting roster browser against {}", config.base_url);

    let http = match HttpClient::new(config) {
        Ok(http) => http,
        Err(err) => {
            roster_error!("could not build HTTP client: {err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let api: Arc<dyn ProfileApi> = Arc::new(RemoteProfileApi::new(http));
    let feed = ProfileFeed::new(api.clone());
    let detail = ProfileDetail::new(api);

    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");

    // List view mount: fetch the first page right away.
    runtime.block_on(feed.load_next_page());
    print!("{}", render::list_screen(&feed.view()));

    prompt();
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match parse_command(line.trim()) {
            Command::More | Command::Retry => {
                runtime.block_on(feed.load_next_page());
                print!("{}", render::list_screen(&feed.view()));
            }
            Command::Refresh => {
                runtime.block_on(feed.refresh());
                print!("{}", render::list_screen(&feed.view()));
            }
            Command::Show(id) => {
                runtime.block_on(detail.fetch(&id));
                print!("{}", render::detail_screen(&detail.view()));
            }
            Command::Help => print!("{}", render::help_screen()),
            Command::Quit => break,
        }
        prompt();
    }
}
