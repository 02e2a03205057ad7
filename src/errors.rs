//! Error types for Support Copilot
//!
//! The entity memory itself is total and never produces errors; these
//! variants cover configuration, the external collaborators, and the
//! terminal front end.

use thiserror::Error;

/// Main error type for the copilot
#[derive(Error, Debug)]
pub enum CopilotError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Auxiliary service (tool / resource / prompt) failures
    #[error("Backend error: {0}")]
    Backend(String),

    /// Line editor errors
    #[error("Readline error: {0}")]
    Readline(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("Copilot error: {0}")]
    Generic(String),
}

/// Result type alias for copilot operations
pub type Result<T> = std::result::Result<T, CopilotError>;

/// Convert anyhow errors to CopilotError
impl From<anyhow::Error> for CopilotError {
    fn from(err: anyhow::Error) -> Self {
        CopilotError::Generic(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CopilotError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CopilotError::Readline(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CopilotError::Backend("connection refused".to_string());
        assert_eq!(err.to_string(), "Backend error: connection refused");
    }

    #[test]
    fn test_config_error_display() {
        let err = CopilotError::Config("summary_window must be greater than 0".to_string());
        assert!(err.to_string().contains("summary_window"));
    }

    #[test]
    fn test_from_anyhow() {
        let err: CopilotError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, CopilotError::Generic(ref msg) if msg == "boom"));
    }

    #[test]
    fn test_from_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: CopilotError = parse.unwrap_err().into();
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
