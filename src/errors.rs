use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::{models::dto::response::ErrorResponse, parsing::ParseError};

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    GenerationFailed(String),
}

impl AppError {
    fn error_label(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "Not found",
            AppError::ValidationError(_) => "Validation error",
            AppError::GenerationFailed(_) => "Generation failed",
        }
    }

    fn details(&self) -> &str {
        match self {
            AppError::NotFound(msg)
            | AppError::ValidationError(msg)
            | AppError::GenerationFailed(msg) => msg,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::GenerationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.error_label().to_string(),
            details: self.details().to_string(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        AppError::GenerationFailed(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure of the network round trip to the model provider.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected response envelope: {0}")]
    Envelope(String),
}

/// Failure of one generation request, by the stage that rejected it.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Transport(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid JSON structure: {0}")]
    Schema(String),
}
