use reqwest::StatusCode;

use crate::error::ApiError;

/// Coarse failure classification surfaced to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Decode,
    NotFound,
    RateLimit,
    Unknown,
}

/// A failure reduced to its kind plus a user-displayable message.
///
/// One report is kept per profile as the "current error" of the latest
/// aggregation session; each new load clears it before starting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ErrorReport {}

impl From<&ApiError> for ErrorReport {
    fn from(error: &ApiError) -> Self {
        let (kind, message) = match error {
            ApiError::Network(e) => (ErrorKind::Network, format!("Network error: {e}")),
            ApiError::Decode(e) => (ErrorKind::Decode, format!("Data error: {e}")),
            ApiError::PlayerNotFound {
                game_name,
                tag_line,
            } => (
                ErrorKind::NotFound,
                format!("Player not found: {game_name}#{tag_line}"),
            ),
            ApiError::Status(StatusCode::NOT_FOUND) => {
                (ErrorKind::NotFound, "Error: not found".to_string())
            }
            ApiError::RateLimitExceeded { .. } => (
                ErrorKind::RateLimit,
                "Rate limit exceeded, try again later".to_string(),
            ),
            other => (ErrorKind::Unknown, format!("Error: {other}")),
        };

        Self { kind, message }
    }
}
