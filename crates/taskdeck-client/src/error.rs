//! Task API error types.

use reqwest::StatusCode;
use thiserror::Error;

/// The four CRUD operations, used to fix per-operation error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Add,
    Update,
    Delete,
}

impl Operation {
    /// The fixed user-facing message for a failed operation.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Fetch => "Failed to fetch tasks",
            Self::Add => "Failed to add task",
            Self::Update => "Failed to update task",
            Self::Delete => "Failed to delete task",
        }
    }
}

/// Errors from the task API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered, but with a non-success status.
    #[error("{}", .op.failure_message())]
    Fetch { op: Operation, status: StatusCode },

    /// The request never completed (connectivity, timeout, TLS).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered 2xx with a body we could not decode.
    #[error("Invalid response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ClientError {
    /// User-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> String {
        match self {
            Self::Fetch { op, .. } => op.failure_message().to_string(),
            Self::Transport(_) => "Network error. Check your connection.".to_string(),
            Self::Decode(_) => "Received an unexpected response. Please try again.".to_string(),
        }
    }

    /// The HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Fetch { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            Self::Decode(_) => None,
        }
    }
}
