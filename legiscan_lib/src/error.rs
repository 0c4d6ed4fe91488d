//! Error types for the research layer.

use std::fmt;

use legiscan_api::types::SessionID;

/// Errors produced by the research layer, wrapping upstream API errors
/// and adding input validation and session resolution failures.
///
/// Per-item fetch failures inside a batch are not represented here; they
/// degrade to the `errors` list of the operation's report instead.
#[derive(Debug)]
pub enum ResearchError {
    /// An error from the underlying API client, raised before any
    /// batched work began.
    Api(legiscan_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// A jurisdiction returned an empty session list.
    NoSessions(String),
    /// An explicitly requested session does not exist in the jurisdiction.
    SessionNotFound {
        session_id: SessionID,
        state: String,
    },
}

impl fmt::Display for ResearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NoSessions(state) => write!(f, "No sessions found for jurisdiction {}", state),
            Self::SessionNotFound { session_id, state } => {
                write!(f, "Session {} not found in jurisdiction {}", session_id, state)
            }
        }
    }
}

impl std::error::Error for ResearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<legiscan_api::Error> for ResearchError {
    fn from(e: legiscan_api::Error) -> Self {
        Self::Api(e)
    }
}
