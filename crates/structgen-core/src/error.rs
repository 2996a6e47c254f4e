//! Error types for generation calls

use crate::ValueKind;
use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error type for generation operations
///
/// Every variant is fatal to the call that produced it; no partial output
/// accompanies an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Input text is not valid JSON
    #[error("parse error: {0}")]
    Parse(String),

    /// The value to emit is not an object
    #[error("unsupported root kind: expected object, got {kind}")]
    UnsupportedRootKind { kind: ValueKind },

    /// No generator is registered under the requested name
    #[error("generator '{name}' not found; available: {}", .available.join(", "))]
    NotFound {
        name: String,
        available: Vec<String>,
    },

    /// An external script failed or reported an error
    #[error("execution error: {0}")]
    Execution(String),
}

impl GenerateError {
    /// Returns a stable numeric code for the error variant
    pub fn error_code(&self) -> u32 {
        match self {
            GenerateError::Parse(_) => 1,
            GenerateError::UnsupportedRootKind { .. } => 2,
            GenerateError::NotFound { .. } => 3,
            GenerateError::Execution(_) => 4,
        }
    }

    /// Returns a short machine-readable name for the error variant
    pub fn kind(&self) -> &'static str {
        match self {
            GenerateError::Parse(_) => "parse_error",
            GenerateError::UnsupportedRootKind { .. } => "unsupported_root_kind",
            GenerateError::NotFound { .. } => "not_found",
            GenerateError::Execution(_) => "execution_error",
        }
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        GenerateError::Parse(err.to_string())
    }
}
