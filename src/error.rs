use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the Riot API layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP status error: {0}")]
    Status(StatusCode),

    #[error("rate limit still exceeded after {attempts} attempts")]
    RateLimitExceeded { attempts: u32 },

    #[error("decoding raw response failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("player not found: {game_name}#{tag_line}")]
    PlayerNotFound { game_name: String, tag_line: String },

    #[error("configuration error: {0}")]
    Config(String),
}

/// A call to the Riot API either succeeds with the typed payload or fails
/// with an [`ApiError`].
pub type ApiResult<T> = Result<T, ApiError>;
