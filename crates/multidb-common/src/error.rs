//! Error types for the multidb service
//!
//! Three failure classes exist:
//! - `ConfigError`: startup-only, always fatal (bad settings, unreachable backend at boot)
//! - `BadRequest`: a write request missing its required field, surfaced as 4xx
//! - `StorageError`: a backend failing during a call, surfaced as 5xx with no retry

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum MultiDbError {
    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

impl MultiDbError {
    /// HTTP status this error maps to at the endpoint layer.
    pub fn status_code(&self) -> u16 {
        match self {
            MultiDbError::BadRequest(_) => 400,
            MultiDbError::ConfigError(_) | MultiDbError::StorageError(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MultiDbError::ConfigError("missing url for backend 'db1'".to_string());
        assert_eq!(
            format!("{}", err),
            "configuration error: missing url for backend 'db1'"
        );

        let err = MultiDbError::BadRequest("name is required".to_string());
        assert_eq!(format!("{}", err), "bad request: name is required");

        let err = MultiDbError::StorageError("connection refused".to_string());
        assert_eq!(format!("{}", err), "storage error: connection refused");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            MultiDbError::BadRequest("x".to_string()).status_code(),
            400
        );
        assert_eq!(
            MultiDbError::StorageError("x".to_string()).status_code(),
            500
        );
        assert_eq!(
            MultiDbError::ConfigError("x".to_string()).status_code(),
            500
        );
    }
}
