//! Error types for Profile Hero

use thiserror::Error;

/// Main error type for Profile Hero operations
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Picked bytes could not be decoded as an image
    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// Decoded picture could not be re-encoded for display
    #[error("Encode error: {0}")]
    Encode(String),

    /// The native picker failed or its task was lost
    #[error("Picker error: {0}")]
    Picker(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Config parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using ProfileError
pub type ProfileResult<T> = Result<T, ProfileError>;
