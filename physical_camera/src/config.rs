//! Camera configuration
//!
//! Initial optical parameters and control modes for a physical camera.

use glam::{Vec2, Vec3};
use crate::error::{Error, Result};
use crate::optics::is_valid_positive;

/// Configuration used to build an in-memory camera and attach a model to it
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalCameraConfig {
    /// Distance from sensor to lens, in millimeters
    pub focal_length_mm: f32,
    /// Relative aperture (focal length / aperture diameter)
    pub f_stop: f32,
    /// Sensor gain
    pub iso: u32,
    /// Exposure duration, in seconds
    pub shutter_speed_sec: f32,
    /// Sensor width and height, in millimeters
    pub sensor_size_mm: Vec2,
    /// Initial world position
    pub position: Vec3,
    /// View axis (normalized when the camera is built)
    pub forward: Vec3,
    /// Keep exposure constant when f/stop or shutter speed changes
    pub lock_exposure: bool,
    /// Move the camera when focal length changes to keep the focus target's size
    pub dolly_zoom: bool,
    /// Whether the host derives its field of view from the physical properties
    pub uses_physical_properties: bool,
}

impl Default for PhysicalCameraConfig {
    fn default() -> Self {
        Self {
            focal_length_mm: 50.0,
            f_stop: 16.0,
            iso: 200,
            shutter_speed_sec: 1.0 / 200.0,
            sensor_size_mm: Vec2::new(36.0, 24.0),
            position: Vec3::ZERO,
            forward: Vec3::Z,
            lock_exposure: false,
            dolly_zoom: false,
            uses_physical_properties: true,
        }
    }
}

impl PhysicalCameraConfig {
    pub fn with_focal_length(mut self, focal_length_mm: f32) -> Self {
        self.focal_length_mm = focal_length_mm;
        self
    }

    pub fn with_f_stop(mut self, f_stop: f32) -> Self {
        self.f_stop = f_stop;
        self
    }

    pub fn with_iso(mut self, iso: u32) -> Self {
        self.iso = iso;
        self
    }

    pub fn with_shutter_speed(mut self, shutter_speed_sec: f32) -> Self {
        self.shutter_speed_sec = shutter_speed_sec;
        self
    }

    pub fn with_sensor_size(mut self, width_mm: f32, height_mm: f32) -> Self {
        self.sensor_size_mm = Vec2::new(width_mm, height_mm);
        self
    }

    pub fn with_pose(mut self, position: Vec3, forward: Vec3) -> Self {
        self.position = position;
        self.forward = forward;
        self
    }

    pub fn with_exposure_lock(mut self, enabled: bool) -> Self {
        self.lock_exposure = enabled;
        self
    }

    pub fn with_dolly_zoom(mut self, enabled: bool) -> Self {
        self.dolly_zoom = enabled;
        self
    }

    /// Check every field, reporting the first one that is out of range
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_positive(self.focal_length_mm) {
            return Err(Error::InvalidConfig(format!(
                "focal_length_mm must be positive, got {}", self.focal_length_mm
            )));
        }
        if !is_valid_positive(self.f_stop) {
            return Err(Error::InvalidConfig(format!(
                "f_stop must be positive, got {}", self.f_stop
            )));
        }
        if self.iso == 0 {
            return Err(Error::InvalidConfig("iso must be positive, got 0".to_string()));
        }
        if !is_valid_positive(self.shutter_speed_sec) {
            return Err(Error::InvalidConfig(format!(
                "shutter_speed_sec must be positive, got {}", self.shutter_speed_sec
            )));
        }
        if !is_valid_positive(self.sensor_size_mm.x) || !is_valid_positive(self.sensor_size_mm.y) {
            return Err(Error::InvalidConfig(format!(
                "sensor_size_mm must be positive, got {}x{}",
                self.sensor_size_mm.x, self.sensor_size_mm.y
            )));
        }
        if !self.position.is_finite() {
            return Err(Error::InvalidConfig("position must be finite".to_string()));
        }
        if !self.forward.is_finite() || self.forward.length_squared() == 0.0 {
            return Err(Error::InvalidConfig("forward must be a finite non-zero vector".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
