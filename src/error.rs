//! Client error types with HTTP status code mapping

/// Errors returned by the API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 401 Unauthorized or 403 Forbidden.
    #[error("authentication error: {0}")]
    Auth(String),

    /// 404 Not Found.
    #[error("not found: {0}")]
    NotFound(String),

    /// 400 Bad Request.
    #[error("validation error: {0}")]
    Validation(String),

    /// Any other non-success status.
    #[error("server error: {0}")]
    Server(String),

    /// Network / connection error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Client could not be constructed from the given settings.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

/// Result alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Map an HTTP status + body to the appropriate error variant.
///
/// The message is taken from the envelope's `error.message` when the body
/// is a JSON envelope, otherwise the raw body is used.
#[must_use]
pub fn error_from_status(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message").or(Some(e)))
                .and_then(|m| m.as_str().map(String::from))
        })
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("HTTP {status}")
            } else {
                body.to_string()
            }
        });

    match status {
        400 => Error::Validation(message),
        401 | 403 => Error::Auth(message),
        404 => Error::NotFound(message),
        _ => Error::Server(message),
    }
}
