//! Error types for plugin store operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or updating plugins.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Plugins file could not be parsed or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A plugin with this name is already recorded.
    #[error("plugin '{0}' already exists")]
    AlreadyExists(String),

    /// No plugin with this name is recorded.
    #[error("plugin '{0}' not found")]
    NotFound(String),

    /// The script file to register does not exist.
    #[error("plugin file not found: {}", .0.display())]
    ScriptMissing(PathBuf),

    /// The script path has no usable file stem to name the plugin after.
    #[error("cannot derive a plugin name from {}", .0.display())]
    InvalidScriptPath(PathBuf),
}
