/// CameraPhysicalState - in-memory host camera.
///
/// Plain value object holding the optical parameters and pose of one
/// camera. Used when there is no engine camera to bind to (tools, tests,
/// the demo), and as the reference implementation of the host traits.

use glam::{Vec2, Vec3};
use crate::config::PhysicalCameraConfig;
use crate::error::Result;
use super::capabilities::{CameraOptics, CameraPose, ExposureParameters};

/// Optical parameters and pose of a camera.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPhysicalState {
    focal_length_mm: f32,
    f_stop: f32,
    iso: u32,
    shutter_speed_sec: f32,
    sensor_size_mm: Vec2,
    position: Vec3,
    forward: Vec3,
    uses_physical_properties: bool,
}

impl CameraPhysicalState {
    /// Build a camera from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration fails validation.
    pub fn from_config(config: &PhysicalCameraConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            focal_length_mm: config.focal_length_mm,
            f_stop: config.f_stop,
            iso: config.iso,
            shutter_speed_sec: config.shutter_speed_sec,
            sensor_size_mm: config.sensor_size_mm,
            position: config.position,
            forward: config.forward.normalize(),
            uses_physical_properties: config.uses_physical_properties,
        })
    }

    /// Point the camera along a new axis. Zero vectors are ignored.
    pub fn set_forward(&mut self, forward: Vec3) {
        if let Some(axis) = forward.try_normalize() {
            self.forward = axis;
        }
    }

    pub fn set_uses_physical_properties(&mut self, enabled: bool) {
        self.uses_physical_properties = enabled;
    }
}

impl Default for CameraPhysicalState {
    fn default() -> Self {
        let config = PhysicalCameraConfig::default();
        Self {
            focal_length_mm: config.focal_length_mm,
            f_stop: config.f_stop,
            iso: config.iso,
            shutter_speed_sec: config.shutter_speed_sec,
            sensor_size_mm: config.sensor_size_mm,
            position: config.position,
            forward: config.forward,
            uses_physical_properties: config.uses_physical_properties,
        }
    }
}

impl CameraOptics for CameraPhysicalState {
    fn focal_length(&self) -> f32 {
        self.focal_length_mm
    }

    fn set_focal_length(&mut self, focal_length_mm: f32) {
        self.focal_length_mm = focal_length_mm;
    }

    fn sensor_size(&self) -> Vec2 {
        self.sensor_size_mm
    }

    fn uses_physical_properties(&self) -> bool {
        self.uses_physical_properties
    }
}

impl CameraPose for CameraPhysicalState {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }
}

impl ExposureParameters for CameraPhysicalState {
    fn iso(&self) -> u32 {
        self.iso
    }

    fn set_iso(&mut self, iso: u32) {
        self.iso = iso;
    }

    fn shutter_speed(&self) -> f32 {
        self.shutter_speed_sec
    }

    fn set_shutter_speed(&mut self, shutter_speed_sec: f32) {
        self.shutter_speed_sec = shutter_speed_sec;
    }

    fn f_stop(&self) -> f32 {
        self.f_stop
    }

    fn set_f_stop(&mut self, f_stop: f32) {
        self.f_stop = f_stop;
    }
}

#[cfg(test)]
#[path = "physical_state_tests.rs"]
mod tests;
