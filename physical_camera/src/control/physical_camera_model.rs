/// PhysicalCameraModel - photographic controls over a host camera.
///
/// Mirrors the host's focal length, f/stop, ISO, and shutter speed, and
/// adds two couplings on top of them:
/// - exposure lock: changing f/stop or shutter speed adjusts the other so
///   that aperture area × exposure time stays constant
/// - dolly zoom: changing focal length slides the camera along the line to
///   the focus target so the target keeps its apparent size
///
/// Every derived value is recomputed from the host on each read.

use glam::{Vec2, Vec3};
use crate::config::PhysicalCameraConfig;
use crate::error::Result;
use crate::host::{CameraHost, CameraPhysicalState};
use crate::optics;
use crate::volume::{PhysicalDiagnostics, VolumeQuery};
use crate::{camera_bail, camera_debug, camera_info, camera_trace, camera_warn};

const SOURCE: &str = "physcam::PhysicalCameraModel";

/// Physical camera controls attached to one host camera.
///
/// # Example
///
/// ```no_run
/// use physical_camera::physcam::{PhysicalCameraModel, PhysicalCameraConfig};
/// use physical_camera::glam::Vec3;
///
/// let config = PhysicalCameraConfig::default().with_dolly_zoom(true);
/// let mut model = PhysicalCameraModel::from_config(&config, None)?;
/// model.set_focus_target(Some(Vec3::new(0.0, 0.0, 10.0)));
/// model.set_focal_length(100.0)?;
/// assert!((model.focus_distance() - 20.0).abs() < 1e-4);
/// # Ok::<(), physical_camera::physcam::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PhysicalCameraModel<H: CameraHost> {
    host: H,
    lock_exposure: bool,
    dolly_zoom: bool,
    focus_target: Option<Vec3>,
    diagnostics: PhysicalDiagnostics,
}

impl PhysicalCameraModel<CameraPhysicalState> {
    /// Build an in-memory camera from `config` and attach a model to it.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration fails validation.
    pub fn from_config(
        config: &PhysicalCameraConfig,
        volumes: Option<&dyn VolumeQuery>,
    ) -> Result<Self> {
        let host = CameraPhysicalState::from_config(config)?;
        Ok(Self::attach(host, config.lock_exposure, config.dolly_zoom, volumes))
    }
}

impl<H: CameraHost> PhysicalCameraModel<H> {
    /// Attach to a host camera (the activation event).
    ///
    /// Scene diagnostics are gathered immediately from `volumes`; pass
    /// `None` when the host scene cannot be queried.
    pub fn attach(
        host: H,
        lock_exposure: bool,
        dolly_zoom: bool,
        volumes: Option<&dyn VolumeQuery>,
    ) -> Self {
        let mut model = Self {
            host,
            lock_exposure,
            dolly_zoom,
            focus_target: None,
            diagnostics: PhysicalDiagnostics::default(),
        };

        camera_info!(SOURCE,
            "Attached: {:.2}mm f/{:.2} ISO {} {:.4}s (exposure lock: {}, dolly zoom: {})",
            model.focal_length(), model.f_stop(), model.iso(), model.shutter_speed(),
            lock_exposure, dolly_zoom);

        model.refresh_external_diagnostics(volumes);
        model
    }

    // ===== HOST ACCESS =====

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access. Writes made here bypass exposure lock and dolly zoom.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Detach, returning the host camera.
    pub fn into_host(self) -> H {
        self.host
    }

    // ===== MODES =====

    pub fn is_exposure_locked(&self) -> bool {
        self.lock_exposure
    }

    pub fn set_exposure_lock(&mut self, enabled: bool) {
        self.lock_exposure = enabled;
    }

    pub fn is_using_dolly_zoom(&self) -> bool {
        self.dolly_zoom
    }

    pub fn set_dolly_zoom(&mut self, enabled: bool) {
        self.dolly_zoom = enabled;
    }

    /// Whether the host derives its field of view from focal length and sensor size.
    pub fn uses_physical_properties(&self) -> bool {
        self.host.uses_physical_properties()
    }

    // ===== PARAMETERS =====

    /// Focal length in millimeters.
    pub fn focal_length(&self) -> f32 {
        self.host.focal_length()
    }

    pub fn f_stop(&self) -> f32 {
        self.host.f_stop()
    }

    pub fn iso(&self) -> u32 {
        self.host.iso()
    }

    /// Shutter speed in seconds.
    pub fn shutter_speed(&self) -> f32 {
        self.host.shutter_speed()
    }

    pub fn sensor_size(&self) -> Vec2 {
        self.host.sensor_size()
    }

    pub fn position(&self) -> Vec3 {
        self.host.position()
    }

    /// Set the focal length.
    ///
    /// With dolly zoom on and a focus target set, the camera first slides
    /// along the line to the target so that its distance scales with the
    /// focal length. Values approximately equal to the current focal length
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `focal_length_mm` is not a
    /// positive finite number, or if the dolly move would put the camera at
    /// a non-finite position. The camera is left unchanged.
    pub fn set_focal_length(&mut self, focal_length_mm: f32) -> Result<()> {
        if !optics::is_valid_positive(focal_length_mm) {
            camera_bail!(SOURCE, "Focal length must be positive, got {}", focal_length_mm);
        }

        let current = self.host.focal_length();
        if optics::approximately_equal(current, focal_length_mm) {
            camera_trace!(SOURCE, "Focal length {:.4}mm unchanged", focal_length_mm);
            return Ok(());
        }

        let dolly_position = match (self.dolly_zoom, self.focus_target) {
            (true, Some(target)) => self.dolly_position(target, focal_length_mm / current),
            _ => None,
        };
        if let Some(position) = dolly_position {
            if !position.is_finite() {
                camera_bail!(SOURCE,
                    "Focal length {}mm would move the camera to {:?}", focal_length_mm, position);
            }
            self.host.set_position(position);
        }

        self.host.set_focal_length(focal_length_mm);
        Ok(())
    }

    /// Position that scales the camera's distance to `target` by `length_ratio`.
    ///
    /// `None` when the camera sits on the target, where there is no line to slide along.
    fn dolly_position(&self, target: Vec3, length_ratio: f32) -> Option<Vec3> {
        let focus_distance = self.focus_distance();
        if focus_distance.is_nan() || focus_distance <= 0.0 {
            camera_debug!(SOURCE, "Dolly zoom skipped: camera is at the focus target");
            return None;
        }

        let new_focus_distance = length_ratio * focus_distance;
        let distance_delta = new_focus_distance / focus_distance;
        let position = self.host.position();
        let new_position = target - (target - position) * distance_delta;

        camera_debug!(SOURCE, "Dolly zoom: focus distance {:.3} -> {:.3}, position {:?} -> {:?}",
            focus_distance, new_focus_distance, position, new_position);

        Some(new_position)
    }

    /// Set the shutter speed in seconds.
    ///
    /// With exposure lock on, the aperture area is scaled by the change in
    /// exposure time (and the f/stop recomputed) so the exposure is kept.
    /// Values approximately equal to the current shutter speed are ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `shutter_speed_sec` is not a
    /// positive finite number, or if the locked exposure would need an f/stop
    /// that is not. The camera is left unchanged.
    pub fn set_shutter_speed(&mut self, shutter_speed_sec: f32) -> Result<()> {
        if !optics::is_valid_positive(shutter_speed_sec) {
            camera_bail!(SOURCE, "Shutter speed must be positive, got {}", shutter_speed_sec);
        }

        let current = self.host.shutter_speed();
        if optics::approximately_equal(current, shutter_speed_sec) {
            camera_trace!(SOURCE, "Shutter speed {:.6}s unchanged", shutter_speed_sec);
            return Ok(());
        }

        if self.lock_exposure {
            let shutter_speed_ratio = current / shutter_speed_sec;
            let new_area = self.aperture_area() * shutter_speed_ratio;
            let new_f_stop = optics::f_stop_for_diameter(
                self.host.focal_length(),
                optics::aperture_diameter_from_area(new_area),
            );
            if !optics::is_valid_positive(new_f_stop) {
                camera_bail!(SOURCE,
                    "Shutter speed {}s would need f/{} to keep exposure", shutter_speed_sec, new_f_stop);
            }

            camera_debug!(SOURCE, "Exposure lock: shutter {:.6}s -> {:.6}s, f/{:.3} -> f/{:.3}",
                current, shutter_speed_sec, self.host.f_stop(), new_f_stop);

            self.host.set_f_stop(new_f_stop);
        }

        self.host.set_shutter_speed(shutter_speed_sec);
        Ok(())
    }

    /// Set the f/stop.
    ///
    /// The write is ignored when the resulting aperture diameter is
    /// approximately equal to the current one. With exposure lock on, the
    /// shutter speed is scaled by the change in aperture area.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `f_stop` is not a positive finite
    /// number, or if the locked exposure would need a shutter speed that is
    /// not. The camera is left unchanged.
    pub fn set_f_stop(&mut self, f_stop: f32) -> Result<()> {
        if !optics::is_valid_positive(f_stop) {
            camera_bail!(SOURCE, "f/stop must be positive, got {}", f_stop);
        }

        let new_diameter = optics::aperture_diameter(self.host.focal_length(), f_stop);
        if optics::approximately_equal(self.actual_aperture_diameter(), new_diameter) {
            camera_trace!(SOURCE, "Aperture {:.4}mm unchanged", new_diameter);
            return Ok(());
        }

        if self.lock_exposure {
            let area_ratio = self.aperture_area() / optics::aperture_area(new_diameter);
            let current_shutter = self.host.shutter_speed();
            let new_shutter = current_shutter * area_ratio;
            if !optics::is_valid_positive(new_shutter) {
                camera_bail!(SOURCE,
                    "f/{} would need a {}s shutter to keep exposure", f_stop, new_shutter);
            }

            camera_debug!(SOURCE, "Exposure lock: f/{:.3} -> f/{:.3}, shutter {:.6}s -> {:.6}s",
                self.host.f_stop(), f_stop, current_shutter, new_shutter);

            self.host.set_shutter_speed(new_shutter);
        }

        self.host.set_f_stop(f_stop);
        Ok(())
    }

    /// Set the ISO. No other parameter is affected.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `iso` is zero.
    pub fn set_iso(&mut self, iso: u32) -> Result<()> {
        if iso == 0 {
            camera_bail!(SOURCE, "ISO must be positive, got 0");
        }
        self.host.set_iso(iso);
        Ok(())
    }

    // ===== FOCUS =====

    pub fn focus_target(&self) -> Option<Vec3> {
        self.focus_target
    }

    pub fn has_focus_target(&self) -> bool {
        self.focus_target.is_some()
    }

    /// Replace the focus target. `None` clears it.
    pub fn set_focus_target(&mut self, target: Option<Vec3>) {
        camera_debug!(SOURCE, "Focus target {:?} -> {:?}", self.focus_target, target);
        self.focus_target = target;
    }

    /// Distance from the camera to the focus target, or 0 without a target.
    pub fn focus_distance(&self) -> f32 {
        self.focus_target
            .map(|target| self.host.position().distance(target))
            .unwrap_or(0.0)
    }

    /// Distance from the camera to the plane through the focus target that
    /// faces the camera, measured along the view axis. 0 without a target.
    ///
    /// The plane normal is the camera's current forward axis, so turning the
    /// camera changes this reading even when the target stays put.
    pub fn focal_plane_distance(&self) -> f32 {
        self.focus_target
            .map(|target| (target - self.host.position()).dot(self.host.forward()).abs())
            .unwrap_or(0.0)
    }

    // ===== DERIVED OPTICS =====

    /// Aperture diameter in millimeters (not the f/stop).
    pub fn actual_aperture_diameter(&self) -> f32 {
        optics::aperture_diameter(self.host.focal_length(), self.host.f_stop())
    }

    /// Aperture area in square millimeters.
    pub fn aperture_area(&self) -> f32 {
        optics::aperture_area(self.actual_aperture_diameter())
    }

    pub fn sensor_diagonal(&self) -> f32 {
        optics::sensor_diagonal(self.host.sensor_size())
    }

    /// Horizontal field of view in degrees, from sensor width and focal length.
    ///
    /// This can differ from the host's own field of view when the host does
    /// not use physical properties.
    pub fn horizontal_fov(&self) -> f32 {
        optics::field_of_view_deg(self.host.sensor_size().x, self.host.focal_length())
    }

    pub fn vertical_fov(&self) -> f32 {
        optics::field_of_view_deg(self.host.sensor_size().y, self.host.focal_length())
    }

    pub fn diagonal_fov(&self) -> f32 {
        optics::field_of_view_deg(self.sensor_diagonal(), self.host.focal_length())
    }

    /// Focal length giving `fov_deg` of horizontal field of view on this sensor.
    pub fn focal_length_for_fov(&self, fov_deg: f32) -> f32 {
        optics::focal_length_for_fov(self.host.sensor_size().x, fov_deg)
    }

    // ===== SCENE DIAGNOSTICS =====

    /// Re-query the scene for exposure and depth-of-field overrides.
    ///
    /// A missing query, or one that fails, leaves every flag false.
    pub fn refresh_external_diagnostics(
        &mut self,
        volumes: Option<&dyn VolumeQuery>,
    ) -> PhysicalDiagnostics {
        self.diagnostics = match volumes {
            None => {
                camera_warn!(SOURCE, "No scene volume query available, assuming no physical exposure or depth of field");
                PhysicalDiagnostics::default()
            }
            Some(query) => match query.active_volume_overrides() {
                Ok(overrides) => PhysicalDiagnostics::from_overrides(overrides),
                Err(error) => {
                    camera_warn!(SOURCE, "Scene volume query failed ({}), assuming no physical exposure or depth of field", error);
                    PhysicalDiagnostics::default()
                }
            },
        };

        camera_info!(SOURCE, "Diagnostics: exposure {} (physical {}), depth of field {} (physical {})",
            self.diagnostics.using_exposure, self.diagnostics.using_physical_exposure,
            self.diagnostics.using_depth_of_field, self.diagnostics.using_physical_depth_of_field);

        self.diagnostics
    }

    pub fn diagnostics(&self) -> PhysicalDiagnostics {
        self.diagnostics
    }

    pub fn is_using_exposure(&self) -> bool {
        self.diagnostics.using_exposure
    }

    pub fn is_using_physical_exposure(&self) -> bool {
        self.diagnostics.using_physical_exposure
    }

    pub fn is_using_depth_of_field(&self) -> bool {
        self.diagnostics.using_depth_of_field
    }

    pub fn is_using_physical_depth_of_field(&self) -> bool {
        self.diagnostics.using_physical_depth_of_field
    }
}

#[cfg(test)]
#[path = "physical_camera_model_tests.rs"]
mod tests;
