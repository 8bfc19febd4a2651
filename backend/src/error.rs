use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use shared::SharedError;
use std::fmt;

/// JSON error envelope returned by the HTTP surface
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ApiError {
    pub fn new(error: &str, message: &str, status_code: u16) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            status_code,
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BAD_REQUEST", message, 400)
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NOT_FOUND", message, 404)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("INTERNAL_ERROR", message, 500)
    }

    pub fn service_unavailable(message: &str) -> Self {
        Self::new("SERVICE_UNAVAILABLE", message, 503)
    }

    pub fn validation_error(message: &str) -> Self {
        Self::new("VALIDATION_ERROR", message, 400)
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let status = match actix_web::http::StatusCode::from_u16(self.status_code) {
            Ok(status) => status,
            Err(_) => {
                log::warn!("Invalid status code {}, defaulting to 500", self.status_code);
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        HttpResponse::build(status).json(self)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl From<SharedError> for ApiError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::NotFound(msg) => Self::not_found(&msg),
            SharedError::ServiceUnavailable(msg) => Self::service_unavailable(&msg),
            SharedError::Validation(msg) => Self::validation_error(&msg),
            SharedError::BadRequest(msg) | SharedError::Conversion(msg) => Self::bad_request(&msg),
            SharedError::Database(msg) | SharedError::Internal(msg) => Self::internal_error(&msg),
        }
    }
}

impl From<arangors::ClientError> for ApiError {
    fn from(err: arangors::ClientError) -> Self {
        Self::service_unavailable(&format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::bad_request(&format!("JSON error: {}", err))
    }
}
