//! Error types for vector math and scene setup.
//!
//! Missing an object is not an error, `hit` reports that with `None`.

use thiserror::Error;

/// A vector that cannot be normalized, because its size is zero or not finite.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("cannot normalize vector ({x}, {y}, {z})")]
pub struct InvalidVectorError {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Errors that can occur while loading a scene or writing cast results.
#[derive(Error, Debug)]
pub enum SceneError {
    /// Reading the scene file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The scene file is not valid scene JSON.
    #[error("failed to parse scene: {0}")]
    Json(#[from] serde_json::Error),

    /// A direction in the scene could not be normalized.
    #[error(transparent)]
    InvalidVector(#[from] InvalidVectorError),

    /// A primitive or range in the scene is degenerate.
    #[error("invalid primitive: {0}")]
    InvalidPrimitive(String),

    /// Writing the PNG output failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Writing the EXR output failed.
    #[error("exr error: {0}")]
    Exr(#[from] exr::error::Error),
}

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;
