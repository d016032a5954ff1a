//! Host camera module - capability traits and the in-memory camera.
//!
//! The camera model never owns an engine camera. It reads and writes
//! optics, pose, and exposure parameters through these narrow traits,
//! which the host engine implements over its own camera objects.

mod capabilities;
mod physical_state;

pub use capabilities::{CameraOptics, CameraPose, ExposureParameters, CameraHost};
pub use physical_state::CameraPhysicalState;
