//! Table configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or dumping a table definition
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input was not a valid table definition
    #[error("Failed to parse table definition: {0}")]
    Parse(#[source] serde_json::Error),

    /// Table could not be rendered as JSON
    #[error("Failed to serialize table definition: {0}")]
    Serialize(#[source] serde_json::Error),
}
