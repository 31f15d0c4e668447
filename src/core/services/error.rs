//! Errors raised by the orchestration services

use crate::error::Error;

/// Failure classes of the orchestration flows
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Identity check failed or returned no identity
    #[error("Your API key is not valid: {0}")]
    Authentication(String),

    /// A query the flow depends on returned nothing
    #[error("No records found matching this query.")]
    NoRecords,

    /// No project matched the given name, id or short id
    #[error(
        "No project found with ID, short ID, or name '{ident}'.{}",
        list_candidates(.candidates)
    )]
    ProjectNotFound {
        /// Identifier that was looked up
        ident: String,
        /// Available projects as `ShortId - Name (Id)`
        candidates: Vec<String>,
    },

    /// No task matched the given short id
    #[error("No task found with short ID '{0}'")]
    TaskNotFound(String),

    /// The server answered but reported failure
    #[error("{operation} failed: {message}")]
    Api {
        /// Operation that failed
        operation: &'static str,
        /// Server-provided message
        message: String,
    },

    /// Transport or HTTP-level failure from the client
    #[error(transparent)]
    Client(#[from] Error),

    /// Writing progress output failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

fn list_candidates(candidates: &[String]) -> String {
    if candidates.is_empty() {
        return " No projects are available.".to_string();
    }
    let mut text = String::from(" Available projects:");
    for candidate in candidates {
        text.push_str("\n  ");
        text.push_str(candidate);
    }
    text
}

impl FlowError {
    /// Server-reported failure for `operation`
    #[must_use]
    pub fn api(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Api {
            operation,
            message: message.into(),
        }
    }
}
