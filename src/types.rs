//! Request and response records for the extraction endpoint

use crate::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};

/// Body of a `POST /extract` request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractRequest {
    /// Free-form text to scan
    pub text: String,
}

impl ExtractRequest {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Return the text to scan, rejecting blank input.
    ///
    /// The text is handed back untrimmed.
    pub fn validated_text(&self) -> Result<&str> {
        if self.text.trim().is_empty() {
            return Err(ServiceError::EmptyText);
        }
        Ok(&self.text)
    }
}

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".into(),
        }
    }
}
