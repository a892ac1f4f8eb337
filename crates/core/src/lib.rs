//! Domain layer shared by the leaderboard API service and client.
//!
//! Has no internal dependencies so the Store, HTTP and client crates can all
//! build on it.

pub mod color;
pub mod error;
pub mod player;
pub mod search;
pub mod types;
