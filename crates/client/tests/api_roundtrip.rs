//! End-to-end tests: the real API router served on an ephemeral port,
//! driven through `LeaderboardApi` and the client event loop.

use assert_matches::assert_matches;
use leaderboard_api::config::ServerConfig;
use leaderboard_api::router::build_app_router;
use leaderboard_api::state::AppState;
use leaderboard_client::api::LeaderboardApi;
use leaderboard_client::app;
use leaderboard_client::dashboard::{Dashboard, DashboardView};
use leaderboard_client::error::ClientError;
use leaderboard_client::model::NewPlayer;
use leaderboard_client::roster::PlayerList;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Serve the full router on `127.0.0.1:0` and return its base URL.
async fn spawn_server(pool: PgPool) -> String {
    let config = ServerConfig::from_lookup(|_| None).unwrap();
    let router = build_app_router(AppState { pool }, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

fn new_player(name: &str, points: i32, color_tag: &str) -> NewPlayer {
    NewPlayer {
        name: name.to_string(),
        points,
        color_tag: color_tag.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Scenario: create two players, list, search, filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_list_search_and_filter(pool: PgPool) {
    let api = LeaderboardApi::new(spawn_server(pool).await);

    let alice = api
        .create_player(&new_player("Alice", 50, "#ff0000"))
        .await
        .unwrap();
    let bob = api
        .create_player(&new_player("Bob", 75, "#00ff00"))
        .await
        .unwrap();
    assert!(alice.id > 0);
    assert_eq!(bob.color_tag, "#00ff00");

    let listed = api.list_players().await.unwrap();
    let summary: Vec<(&str, i32)> = listed.iter().map(|p| (p.name.as_str(), p.points)).collect();
    assert_eq!(summary, vec![("Bob", 75), ("Alice", 50)]);

    assert_eq!(api.search_names("al").await.unwrap(), vec!["Alice"]);

    let mut all = api.search_names("").await.unwrap();
    all.sort();
    assert_eq!(all, vec!["Alice", "Bob"]);

    let mut players = PlayerList::new();
    players.replace_all(listed);
    let mut dashboard = Dashboard::new();
    dashboard.set_search("Bob");

    let DashboardView::Ranked(rows) = dashboard.view(&players) else {
        panic!("expected ranked rows");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].player.name, "Bob");
}

// ---------------------------------------------------------------------------
// Event loop: a scripted session stores exactly one record
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn scripted_session_submits_once(pool: PgPool) {
    let api = LeaderboardApi::new(spawn_server(pool).await);

    let script: &[u8] = b"name Alice\n\
        submit\n\
        points 50\n\
        color #FF0000\n\
        submit\n\
        submit\n\
        quit\n";
    let mut output = Vec::new();

    app::run(api.clone(), script, &mut output).await.unwrap();

    // The first submit lacks points; the third follows a reset draft.
    let listed = api.list_players().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Alice");
    assert_eq!(listed[0].color_tag, "#ff0000");

    let screen = String::from_utf8(output).unwrap();
    assert!(screen.contains("No player data available"));
    assert!(screen.contains("Alice"));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn store_failure_surfaces_as_api_error(pool: PgPool) {
    sqlx::query("DROP TABLE players")
        .execute(&pool)
        .await
        .unwrap();
    let api = LeaderboardApi::new(spawn_server(pool).await);

    let err = api.list_players().await.unwrap_err();
    assert_matches!(
        err,
        ClientError::Api { status: 500, ref body } if body == "Error fetching player data"
    );
}

#[tokio::test]
async fn unreachable_service_is_a_request_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = LeaderboardApi::new(format!("http://{addr}"));
    assert_matches!(api.list_players().await, Err(ClientError::Request(_)));
}
