//! Camera control module - the physical camera model.
//!
//! Setters with exposure lock and dolly zoom, derived optics readouts, and
//! the scene diagnostics gathered when the model is attached.

mod physical_camera_model;

pub use physical_camera_model::PhysicalCameraModel;
