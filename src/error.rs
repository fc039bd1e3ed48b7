use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    /// The query specification failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// A filter was configured in a self-contradictory way
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for query building operations
pub type Result<T> = std::result::Result<T, BuildError>;
