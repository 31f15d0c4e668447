//! Response envelope shared by every endpoint

use serde::{Deserialize, Serialize};

/// Error details inside a response envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiErrorBody {
    /// Human-readable message
    pub message: Option<String>,
}

/// Envelope wrapping every API result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the server reports success
    #[serde(default)]
    pub success: bool,
    /// Payload, when present
    pub data: Option<T>,
    /// Error details, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope around `data`
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed envelope with a message
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorBody {
                message: Some(message.into()),
            }),
        }
    }

    /// The payload, only when the envelope reports success
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }

    /// Error message, or a generic one when the server sent none
    #[must_use]
    pub fn error_message(&self) -> String {
        self.error
            .as_ref()
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}
