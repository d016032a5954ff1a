//! Integration tests for the inspector bindings over a host-defined camera
//!
//! The host camera below stands in for an engine camera component: it
//! stores its own transform and physical parameters and implements the
//! capability traits over them.
//!
//! Run with: cargo test --test inspector_integration_tests

use physical_camera::glam::{Vec2, Vec3, Quat};
use physical_camera::physcam::PhysicalCameraModel;
use physical_camera::physcam::host::{CameraOptics, CameraPose, ExposureParameters};
use physical_camera::physcam::inspector::{
    InspectorAction, InspectorPanel, InspectorWarning, FOCAL_LENGTH_PRESETS, F_STOP_PRESETS,
};
use physical_camera::physcam::volume::{StaticVolumeQuery, VolumeOverrides};

// ============================================================================
// ENGINE CAMERA STAND-IN
// ============================================================================

struct EngineCamera {
    translation: Vec3,
    rotation: Quat,
    focal_length: f32,
    sensor: Vec2,
    link_fov_to_physical: bool,
    iso: u32,
    shutter_speed: f32,
    aperture: f32,
}

impl EngineCamera {
    fn new() -> Self {
        Self {
            translation: Vec3::new(0.0, 1.5, 0.0),
            rotation: Quat::IDENTITY,
            focal_length: 35.0,
            sensor: Vec2::new(36.0, 24.0),
            link_fov_to_physical: true,
            iso: 100,
            shutter_speed: 1.0 / 60.0,
            aperture: 4.0,
        }
    }
}

impl CameraOptics for EngineCamera {
    fn focal_length(&self) -> f32 {
        self.focal_length
    }

    fn set_focal_length(&mut self, focal_length_mm: f32) {
        self.focal_length = focal_length_mm;
    }

    fn sensor_size(&self) -> Vec2 {
        self.sensor
    }

    fn uses_physical_properties(&self) -> bool {
        self.link_fov_to_physical
    }
}

impl CameraPose for EngineCamera {
    fn position(&self) -> Vec3 {
        self.translation
    }

    fn set_position(&mut self, position: Vec3) {
        self.translation = position;
    }

    fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

impl ExposureParameters for EngineCamera {
    fn iso(&self) -> u32 {
        self.iso
    }

    fn set_iso(&mut self, iso: u32) {
        self.iso = iso;
    }

    fn shutter_speed(&self) -> f32 {
        self.shutter_speed
    }

    fn set_shutter_speed(&mut self, shutter_speed_sec: f32) {
        self.shutter_speed = shutter_speed_sec;
    }

    fn f_stop(&self) -> f32 {
        self.aperture
    }

    fn set_f_stop(&mut self, f_stop: f32) {
        self.aperture = f_stop;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[test]
fn test_integration_engine_camera_dolly_zoom_through_presets() {
    let mut camera = EngineCamera::new();
    let volumes = StaticVolumeQuery::new(vec![VolumeOverrides::exposure(true)]);
    {
        let mut model = PhysicalCameraModel::attach(&mut camera, false, true, Some(&volumes));
        model.set_focus_target(Some(Vec3::new(0.0, 1.5, 7.0)));

        for preset in FOCAL_LENGTH_PRESETS {
            InspectorPanel::apply(&mut model, InspectorAction::SetFocalLength(preset.value), None).unwrap();
            // 35mm at 7 units: distance / focal length stays 0.2
            assert!((model.focus_distance() / model.focal_length() - 0.2).abs() < 1e-4);
        }
    }

    assert_eq!(camera.focal_length, 300.0);
    assert!((camera.translation - Vec3::new(0.0, 1.5, -53.0)).length() < 1e-2);
}

#[test]
fn test_integration_engine_camera_exposure_lock_through_presets() {
    let mut camera = EngineCamera::new();
    {
        let mut model = PhysicalCameraModel::attach(&mut camera, true, false, None);
        let exposure = model.aperture_area() * model.shutter_speed();

        for preset in F_STOP_PRESETS {
            InspectorPanel::apply(&mut model, InspectorAction::SetFStop(preset.value), None).unwrap();
            let current = model.aperture_area() * model.shutter_speed();
            assert!(((current - exposure) / exposure).abs() < 1e-4);
        }
    }

    assert_eq!(camera.aperture, 22.0);
    // f/4 -> f/22 is (22/4)^2 = 30.25x the exposure time
    assert!((camera.shutter_speed - 30.25 / 60.0).abs() < 1e-4);
}

#[test]
fn test_integration_engine_camera_warnings_and_recheck() {
    let mut camera = EngineCamera::new();
    camera.link_fov_to_physical = false;

    let mut model = PhysicalCameraModel::attach(&mut camera, false, true, None);
    let warnings = InspectorPanel::warnings(&model);
    assert_eq!(warnings, vec![
        InspectorWarning::DollyZoomWithoutFocusTarget,
        InspectorWarning::NotUsingPhysicalProperties,
        InspectorWarning::NotUsingExposure,
    ]);
    assert!(InspectorPanel::needs_recheck(&warnings));

    let volumes = StaticVolumeQuery::new(vec![VolumeOverrides::exposure(true)]);
    InspectorPanel::apply(&mut model, InspectorAction::Recheck, Some(&volumes)).unwrap();
    model.set_focus_target(Some(Vec3::new(0.0, 1.5, 3.0)));

    assert_eq!(InspectorPanel::warnings(&model), vec![InspectorWarning::NotUsingPhysicalProperties]);
}

#[test]
fn test_integration_readout_tracks_engine_camera() {
    let mut camera = EngineCamera::new();
    let mut model = PhysicalCameraModel::attach(&mut camera, false, false, None);

    InspectorPanel::apply(&mut model, InspectorAction::SetIso(800), None).unwrap();
    InspectorPanel::apply(&mut model, InspectorAction::SlideFocalLength(50.0), None).unwrap();
    InspectorPanel::apply(&mut model, InspectorAction::SetShutterSpeed(0.5), None).unwrap();

    let readout = InspectorPanel::readout(&model);
    assert_eq!(readout.iso, "800");
    assert_eq!(readout.focal_length, "50.00");
    assert_eq!(readout.field_of_view, "39.60, 26.99");
    assert_eq!(readout.shutter_speed, "0.50, 2.00");
    assert_eq!(readout.focus_distance, "0.00");
}
