use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;

/// Failures the filter and scroll features can run into.
///
/// None of these are fatal to the page: callers log them and degrade.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum SharedError {
    /// The request was rejected by the browser or answered with a non-2xx status.
    #[error("Network error: {0}")]
    Network(String),

    /// The body was not the JSON shape we expected.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A page element the widget depends on is absent.
    #[error("Missing page element: {0}")]
    DomMissing(String),
}

impl SharedError {
    pub fn network(status: u16, status_text: &str) -> Self {
        Self::Network(format!("{} {}", status, status_text).trim().to_string())
    }

    pub fn dom_missing(selector: &str) -> Self {
        Self::DomMissing(selector.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::MalformedResponse(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
