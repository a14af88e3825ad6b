//! Error types for rigid_motion

use std::fmt;

/// Main error type for trajectory and animation operations
#[derive(Debug)]
pub enum MotionError {
    /// Invalid parameter (non-positive step count, empty polygon, ...)
    InvalidParameter(String),
    /// Visualization error
    VisualizationError(String),
    /// I/O error
    IoError(std::io::Error),
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            MotionError::VisualizationError(msg) => write!(f, "Visualization error: {}", msg),
            MotionError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for MotionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MotionError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MotionError {
    fn from(e: std::io::Error) -> Self {
        MotionError::IoError(e)
    }
}

/// Result type alias for rigid_motion operations
pub type MotionResult<T> = Result<T, MotionError>;
