//! Error types for the portal server

/// Errors that can occur in the portal server
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for portal operations
pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let err: PortalError = std::io::Error::new(std::io::ErrorKind::AddrInUse, "busy").into();
        assert!(matches!(err, PortalError::Io(_)));
        assert_eq!(err.to_string(), "IO error: busy");
    }

    #[test]
    fn json_error_converts() {
        let err: PortalError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("JSON parse error:"));
    }

    #[test]
    fn config_message() {
        let err = PortalError::Config("bad".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad");
    }
}
