use std::fmt;

use image::ImageError;

use crate::threads::JoinError;

#[derive(Debug)]
pub enum RenderError {
    /// N or M is not a finite positive number.
    InvalidCount(String),
    InvalidConfig(&'static str),
    Join(JoinError),
    WorkerDisconnected,
    BufferSize { expected: usize, actual: usize },
    Image(ImageError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidCount(arg) => write!(f, "invalid count: {:?}", arg),
            RenderError::InvalidConfig(msg) => write!(f, "invalid render config: {}", msg),
            RenderError::Join(_) => write!(f, "could not reassemble rendered rows"),
            RenderError::WorkerDisconnected => write!(f, "render worker disconnected"),
            RenderError::BufferSize { expected, actual } => write!(
                f,
                "pixel buffer has {} bytes, expected {}",
                actual, expected
            ),
            RenderError::Image(e) => write!(f, "could not write image: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<JoinError> for RenderError {
    fn from(e: JoinError) -> Self {
        RenderError::Join(e)
    }
}

impl From<ImageError> for RenderError {
    fn from(e: ImageError) -> Self {
        RenderError::Image(e)
    }
}
