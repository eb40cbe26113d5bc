//! Error types for whispa-prefetch.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrefetchError {
    // Cache errors
    #[error("Failed to create cache directory {path}: {source}")]
    CacheDir { path: String, source: std::io::Error },

    // Download errors
    #[error("Download failed for '{name}': {message}")]
    Download { name: String, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Configuration errors
    #[error("Failed to parse configuration: {message}")]
    ConfigParse { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, PrefetchError>;
