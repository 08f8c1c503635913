use thiserror::Error;

/// Result type for opgmetrics operations
pub type Result<T> = std::result::Result<T, OpgError>;

/// Error types for opgmetrics operations
#[derive(Error, Debug)]
pub enum OpgError {
    /// No age could be determined from a filename (mandatory field)
    #[error("No age marker found in filename: {0}")]
    AgeNotFound(String),

    /// Filename does not follow the expected naming convention
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    /// Image decoding / dimension probing error
    #[error("Image error: {0}")]
    Image(String),

    /// Record store error
    #[error("Store error: {0}")]
    Store(String),

    /// Tabular export error
    #[error("Export error: {0}")]
    Export(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper conversions
impl From<String> for OpgError {
    fn from(s: String) -> Self {
        OpgError::Store(s)
    }
}

impl From<&str> for OpgError {
    fn from(s: &str) -> Self {
        OpgError::Store(s.to_string())
    }
}

impl From<image::ImageError> for OpgError {
    fn from(e: image::ImageError) -> Self {
        OpgError::Image(format!("{}", e))
    }
}

impl From<serde_json::Error> for OpgError {
    fn from(e: serde_json::Error) -> Self {
        OpgError::Store(format!("{}", e))
    }
}

impl From<csv::Error> for OpgError {
    fn from(e: csv::Error) -> Self {
        OpgError::Export(format!("{}", e))
    }
}
