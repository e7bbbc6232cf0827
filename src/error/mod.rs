//! Error handling module for the outer layers (loader, configuration, CLI)

use thiserror::Error;

/// Main error type for Vidcat operations outside the session core
#[derive(Error, Debug)]
pub enum VidcatError {
    /// Catalog file not found
    #[error("Catalog file not found: {path}")]
    CatalogNotFound { path: String },

    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// A configuration value is out of range
    #[error("Invalid configuration value for {key}: {value}")]
    InvalidConfig { key: String, value: String },

    /// The dispatcher table does not cover every recognized command
    #[error("Command table is missing handlers for: {missing}")]
    IncompleteCommandTable { missing: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for Vidcat operations
pub type VidcatResult<T> = std::result::Result<T, VidcatError>;
