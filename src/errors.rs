use actix_web::http::StatusCode;
use actix_web::{error, HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Entity was not found.")]
    NotFound(String),

    #[error("Request is invalid.")]
    InvalidInput(Vec<String>),

    #[error("User is unauthorized for this resource.")]
    Unauthorized(String),

    #[error("Something went wrong.")]
    Internal(String),
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    pub status_code: u16,
    pub message: String,
    pub exception_message: String,
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::InvalidInput(errors) => AppError::InvalidInput(errors),
            DomainError::Unauthorized(msg) => AppError::Unauthorized(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl AppError {
    pub fn details(&self) -> ErrorDetails {
        let (message, exception_message) = match self {
            AppError::InvalidInput(errors) if errors.is_empty() => {
                (self.to_string(), String::new())
            }
            AppError::InvalidInput(errors) => {
                let joined = errors.join(", ");
                (format!("{} {}", self, joined), joined)
            }
            AppError::NotFound(detail)
            | AppError::Unauthorized(detail)
            | AppError::Internal(detail) => (self.to_string(), detail.clone()),
        };
        ErrorDetails {
            status_code: self.status_code().as_u16(),
            message,
            exception_message,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(detail) = self {
            log::error!("Request failed: {}", detail);
        }
        HttpResponse::build(self.status_code()).json(self.details())
    }
}

// ── Extractor rejections ─────────────────────────────────────────────────────
//
// Malformed bodies, query strings and path segments go through the same
// error body as domain validation failures.

pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidInput(vec![err.to_string()]).into()
}

pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidInput(vec![err.to_string()]).into()
}

pub fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidInput(vec![err.to_string()]).into()
}
