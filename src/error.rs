use thiserror::Error;

/// Unified error type for ticket-classify operations
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid ticket reference: {0}")]
    InvalidTicket(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in ticket-classify
pub type Result<T> = std::result::Result<T, ClassifyError>;

impl ClassifyError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ClassifyError::Config(msg.into())
    }

    /// Create an invalid ticket error for the offending input
    pub fn invalid_ticket(input: impl Into<String>) -> Self {
        ClassifyError::InvalidTicket(input.into())
    }
}
