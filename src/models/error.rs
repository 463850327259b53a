#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("{status} {status_text}")]
    HttpError { status: u16, status_text: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Returns the HTTP status code when the server answered with a non-2xx status.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let error = AppError::HttpError {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };
        assert_eq!(error.to_string(), "503 Service Unavailable");
        assert_eq!(error.status(), Some(503));
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        let error = AppError::ParseError("expected value".to_string());
        assert_eq!(error.status(), None);
        assert_eq!(error.to_string(), "Parse error: expected value");
    }
}
