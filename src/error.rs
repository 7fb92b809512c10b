//! Error handling for the visuomotor-rs application
//!
//! This module defines custom error types and a Result alias for use
//! throughout the application.

use thiserror::Error;

/// Main error type for visuomotor-rs operations
#[derive(Error, Debug)]
pub enum VisuomotorError {
    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Export requested on an empty telemetry log
    #[error("Telemetry log is empty, nothing to export")]
    EmptyLog,

    /// Pointer capture could not be acquired (non-fatal)
    #[error("Pointer capture error: {0}")]
    Capture(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<VisuomotorError>,
    },
}

impl VisuomotorError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        VisuomotorError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for visuomotor-rs operations
pub type Result<T> = std::result::Result<T, VisuomotorError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
