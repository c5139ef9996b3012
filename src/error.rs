use crate::scanner::ContentType;
use thiserror::Error;

/// Main error type for the qrscan engine
#[derive(Error, Debug)]
pub enum ScanError {
    /// Scanned payload was absent or trimmed to nothing
    #[error("Invalid QR data: {0}")]
    InvalidInput(String),

    /// Platform reported it cannot open the normalized URI
    #[error("No handler available for URI: {uri}")]
    ActionUnsupported { uri: String },

    /// Action requested for a content type that has none (informational)
    #[error("No action available for {content_type} content")]
    NoActionAvailable { content_type: ContentType },

    /// Platform-level failure while normalizing or opening a URI
    #[error("Action execution failed: {0}")]
    ActionExecution(#[source] anyhow::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {message}")]
    InvalidConfigValue { field: String, message: String },

    /// A classification pattern failed to compile
    #[error("Invalid classification pattern '{name}': {message}")]
    Pattern { name: String, message: String },
}

/// Result type for qrscan operations
pub type Result<T> = std::result::Result<T, ScanError>;
