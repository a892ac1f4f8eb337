//! `leaderboard-client` -- terminal front end for the leaderboard.
//!
//! Reads commands from stdin, renders the submission form and the ranked
//! dashboard to stdout. Type `help` for the command list.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default                 |
//! |-----------------------|----------|-------------------------|
//! | `LEADERBOARD_API_URL` | no       | `http://localhost:5000` |

use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leaderboard_client::api::LeaderboardApi;
use leaderboard_client::app;
use leaderboard_client::config::ClientConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they do not interleave with the rendered screen.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leaderboard_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid client configuration");
        std::process::exit(1);
    });
    tracing::info!(api_url = %config.api_url, "Starting leaderboard-client");

    let api = LeaderboardApi::new(config.api_url);
    let stdin = BufReader::new(tokio::io::stdin());

    if let Err(e) = app::run(api, stdin, std::io::stdout()).await {
        tracing::error!(error = %e, "Terminal I/O failed");
        std::process::exit(1);
    }
}
