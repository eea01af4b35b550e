//! HTTP error handling and response types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::validation::ValidationError;

/// Generic message returned for every field validation failure.
pub const VALIDATION_ERRORS: &str = "validation errors";

/// Body of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorsBody {
    /// Error messages.
    pub errors: Vec<String>,
}

/// Body of a 404 or 500 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error message.
    pub error: String,
}

/// A resource that can be looked up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// A camper.
    Camper,
    /// An activity.
    Activity,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Camper => write!(f, "Camper"),
            Self::Activity => write!(f, "Activity"),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// A record field failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The request body could not be read.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No row with the requested id.
    #[error("{0} not found")]
    NotFound(Resource),

    /// Storage or runtime failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<crate::Error> for AppError {
    fn from(err: crate::Error) -> Self {
        match err {
            crate::Error::Validation(err) => Self::Validation(err),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => {
                debug!(field = err.field(), "Rejected request: {}", err);
                errors_response(VALIDATION_ERRORS.to_string())
            }
            Self::BadRequest(message) => {
                debug!("Rejected request body: {}", message);
                errors_response(message)
            }
            Self::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: format!("{resource} not found"),
                }),
            )
                .into_response(),
            Self::Internal(message) => {
                error!("Request failed: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

fn errors_response(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorsBody {
            errors: vec![message],
        }),
    )
        .into_response()
}
