//! HTTP error response body
//!
//! Successful responses are either plain confirmation text (save) or the
//! raw JSON record array (list); only failures get a structured body.

use actix_web::{HttpResponse, http::StatusCode};
use serde::{Deserialize, Serialize};

/// Error result for API error responses
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResult {
    pub timestamp: String,
    pub status: i32,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl ErrorResult {
    pub fn new(status: StatusCode, message: &str, path: &str) -> Self {
        ErrorResult {
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: status.as_u16() as i32,
            error: status.canonical_reason().unwrap_or_default().to_string(),
            message: message.to_string(),
            path: path.to_string(),
        }
    }

    pub fn bad_request(message: &str, path: &str) -> HttpResponse {
        HttpResponse::BadRequest().json(ErrorResult::new(StatusCode::BAD_REQUEST, message, path))
    }

    pub fn internal_error(message: &str, path: &str) -> HttpResponse {
        HttpResponse::InternalServerError().json(ErrorResult::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            message,
            path,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_result_fields() {
        let result = ErrorResult::new(StatusCode::BAD_REQUEST, "name is required", "/savedb1");
        assert_eq!(result.status, 400);
        assert_eq!(result.error, "Bad Request");
        assert_eq!(result.message, "name is required");
        assert_eq!(result.path, "/savedb1");
    }
}
