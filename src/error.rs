//! Error types for surface configuration and export.

/// Errors surfaced at the configuration boundary and by preview export
#[derive(thiserror::Error, Debug)]
pub enum SurfaceError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unsupported noise dimensionality: {0} (expected 1, 2 or 3)")]
    UnsupportedDimensionality(u8),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl SurfaceError {
    pub fn invalid<T: ToString>(msg: T) -> Self {
        SurfaceError::InvalidConfiguration(msg.to_string())
    }
}

/// Result alias for surface operations
pub type Result<T> = std::result::Result<T, SurfaceError>;
