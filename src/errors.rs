use thiserror::Error;

/// Error type that captures certificate, registry, and storage failures.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A raw field value does not match the kind the record declares.
    /// Raised at construction from untyped input, never later.
    #[error("validation failed: {0}")]
    Validation(String),
    /// Positional access outside `[0, len)`.
    #[error("index {index} out of bounds for registry of {len} entries")]
    OutOfBounds { index: usize, len: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
