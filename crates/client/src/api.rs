//! REST client for the leaderboard API service.
//!
//! Wraps the three player endpoints using [`reqwest`]. No retries and no
//! timeouts beyond reqwest's defaults: a failed call is reported once.

use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::model::{NewPlayer, PlayerRecord};

/// HTTP client for one API service instance.
#[derive(Debug, Clone)]
pub struct LeaderboardApi {
    client: reqwest::Client,
    api_url: String,
}

impl LeaderboardApi {
    /// Create a client for the service at `api_url`, e.g. `http://host:5000`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    /// `GET /api/players` -- every record, highest score first.
    pub async fn list_players(&self) -> Result<Vec<PlayerRecord>, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/players", self.api_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `POST /api/players` -- store a record and return it as persisted.
    pub async fn create_player(&self, player: &NewPlayer) -> Result<PlayerRecord, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/players", self.api_url))
            .json(player)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `GET /api/players/names?name=` -- names matching a case-insensitive
    /// prefix. An empty prefix returns every name.
    pub async fn search_names(&self, prefix: &str) -> Result<Vec<String>, ClientError> {
        let mut request = self
            .client
            .get(format!("{}/api/players/names", self.api_url));
        if !prefix.is_empty() {
            request = request.query(&[("name", prefix)]);
        }

        let response = request.send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, otherwise capture the
    /// status and body text in a [`ClientError::Api`].
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
