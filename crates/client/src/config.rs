use crate::error::ClientError;

/// Default API service location.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Client configuration loaded from environment variables.
///
/// | Env Var               | Default                 |
/// |-----------------------|-------------------------|
/// | `LEADERBOARD_API_URL` | `http://localhost:5000` |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API service, without a trailing slash.
    pub api_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup("LEADERBOARD_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        let api_url = raw.trim().trim_end_matches('/').to_string();

        reqwest::Url::parse(&api_url).map_err(|e| ClientError::InvalidApiUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { api_url })
    }
}
