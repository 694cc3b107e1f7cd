//! Error types for the parts of a render that can fail: configuration and
//! image output. Intersection and shading are total and never produce these.

use thiserror::Error;

/// Settings that cannot produce an image.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Fewer than two pixels in some direction.
    #[error("image must be at least 2x2 pixels, got {width}x{height}")]
    TooSmall { width: usize, height: usize },

    /// Aspect ratio is zero, negative, or not finite.
    #[error("invalid aspect ratio: {0}")]
    AspectRatio(f32),

    /// Viewport height is zero, negative, or not finite.
    #[error("invalid viewport height: {0}")]
    ViewportHeight(f32),

    /// Focal length is zero, negative, or not finite.
    #[error("invalid focal length: {0}")]
    FocalLength(f32),
}

/// Errors surfaced by a full render-and-write run.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("writing image: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for render-and-write operations.
pub type Result<T> = std::result::Result<T, Error>;
