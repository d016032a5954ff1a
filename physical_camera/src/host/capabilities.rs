/// Capability traits implemented by the host camera.
///
/// Values written through these traits have already been validated by the
/// camera model (strictly positive, finite). Implementations store them
/// as-is.

use glam::{Vec2, Vec3};

/// Lens and sensor of the host camera.
pub trait CameraOptics {
    /// Focal length in millimeters.
    fn focal_length(&self) -> f32;

    /// Set the focal length in millimeters.
    fn set_focal_length(&mut self, focal_length_mm: f32);

    /// Sensor width and height in millimeters. Read-only for the model.
    fn sensor_size(&self) -> Vec2;

    /// Whether the host derives its field of view from the physical
    /// properties. Hosts that always do can keep the default.
    fn uses_physical_properties(&self) -> bool {
        true
    }
}

/// World pose of the host camera.
pub trait CameraPose {
    /// World position.
    fn position(&self) -> Vec3;

    /// Move the camera to a new world position.
    fn set_position(&mut self, position: Vec3);

    /// Normalized view axis.
    fn forward(&self) -> Vec3;
}

/// Physical exposure parameters of the host camera.
pub trait ExposureParameters {
    fn iso(&self) -> u32;

    fn set_iso(&mut self, iso: u32);

    /// Shutter speed in seconds.
    fn shutter_speed(&self) -> f32;

    fn set_shutter_speed(&mut self, shutter_speed_sec: f32);

    /// Relative aperture (f/stop), not the aperture diameter.
    fn f_stop(&self) -> f32;

    fn set_f_stop(&mut self, f_stop: f32);
}

/// Everything the camera model needs from its host.
pub trait CameraHost: CameraOptics + CameraPose + ExposureParameters {}

impl<T: CameraOptics + CameraPose + ExposureParameters> CameraHost for T {}

// ===== BORROWED HOSTS =====
//
// A model can be attached to `&mut HostCamera` when the host keeps ownership.

impl<T: CameraOptics + ?Sized> CameraOptics for &mut T {
    fn focal_length(&self) -> f32 {
        (**self).focal_length()
    }

    fn set_focal_length(&mut self, focal_length_mm: f32) {
        (**self).set_focal_length(focal_length_mm)
    }

    fn sensor_size(&self) -> Vec2 {
        (**self).sensor_size()
    }

    fn uses_physical_properties(&self) -> bool {
        (**self).uses_physical_properties()
    }
}

impl<T: CameraPose + ?Sized> CameraPose for &mut T {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn set_position(&mut self, position: Vec3) {
        (**self).set_position(position)
    }

    fn forward(&self) -> Vec3 {
        (**self).forward()
    }
}

impl<T: ExposureParameters + ?Sized> ExposureParameters for &mut T {
    fn iso(&self) -> u32 {
        (**self).iso()
    }

    fn set_iso(&mut self, iso: u32) {
        (**self).set_iso(iso)
    }

    fn shutter_speed(&self) -> f32 {
        (**self).shutter_speed()
    }

    fn set_shutter_speed(&mut self, shutter_speed_sec: f32) {
        (**self).set_shutter_speed(shutter_speed_sec)
    }

    fn f_stop(&self) -> f32 {
        (**self).f_stop()
    }

    fn set_f_stop(&mut self, f_stop: f32) {
        (**self).set_f_stop(f_stop)
    }
}
