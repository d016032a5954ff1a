//! Error types for the physical camera model
//!
//! This module defines the error types returned by the camera setters,
//! configuration validation, and the scene volume collaborator.

use std::fmt;

/// Result type for physical camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Physical camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Rejected input (non-positive focal length, f/stop, shutter speed, ISO, ...)
    ///
    /// The camera state is left unchanged when this is returned.
    InvalidArgument(String),

    /// The scene volume query could not be performed
    CollaboratorUnavailable(String),

    /// A configuration failed validation
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::CollaboratorUnavailable(msg) => write!(f, "Collaborator unavailable: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an ERROR (with file:line) and return `Err(Error::InvalidArgument(..))`
///
/// # Example
///
/// ```no_run
/// # use physical_camera::camera_bail;
/// fn check(value: f32) -> physical_camera::physcam::Result<()> {
///     if value <= 0.0 {
///         camera_bail!("physcam::Example", "Value must be positive, got {}", value);
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! camera_bail {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::camera_error!($source, "{}", message);
        return Err($crate::physcam::Error::InvalidArgument(message));
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
