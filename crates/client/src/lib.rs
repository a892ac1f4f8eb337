//! Leaderboard client library.
//!
//! Holds the client-side state (player cache, submission form, dashboard
//! view) and the HTTP client used to talk to the API service. The terminal
//! binary in `main.rs` drives it from a single-threaded event loop.

pub mod api;
pub mod app;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod model;
pub mod render;
pub mod roster;
