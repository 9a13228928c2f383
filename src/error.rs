//! Error types for the extraction service

use crate::types::ErrorBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Errors surfaced to callers of the extraction endpoint
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The request text was empty or whitespace only
    #[error("No text provided")]
    EmptyText,

    /// The request body could not be read as an extraction request
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyText => StatusCode::BAD_REQUEST,
            Self::InvalidPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.to_string(),
        })
    }
}

/// Result type for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;
