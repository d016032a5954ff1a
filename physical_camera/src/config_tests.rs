use glam::{Vec2, Vec3};
use crate::error::Error;
use super::*;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_default_config() {
    let config = PhysicalCameraConfig::default();

    assert_eq!(config.focal_length_mm, 50.0);
    assert_eq!(config.f_stop, 16.0);
    assert_eq!(config.iso, 200);
    assert!((config.shutter_speed_sec - 0.005).abs() < 1e-7);
    assert_eq!(config.sensor_size_mm, Vec2::new(36.0, 24.0));
    assert_eq!(config.forward, Vec3::Z);
    assert!(!config.lock_exposure);
    assert!(!config.dolly_zoom);
    assert!(config.uses_physical_properties);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_helpers() {
    let config = PhysicalCameraConfig::default()
        .with_focal_length(85.0)
        .with_f_stop(2.8)
        .with_iso(800)
        .with_shutter_speed(1.0 / 125.0)
        .with_sensor_size(23.6, 15.6)
        .with_pose(Vec3::new(1.0, 2.0, 3.0), Vec3::NEG_Z)
        .with_exposure_lock(true)
        .with_dolly_zoom(true);

    assert_eq!(config.focal_length_mm, 85.0);
    assert_eq!(config.f_stop, 2.8);
    assert_eq!(config.iso, 800);
    assert_eq!(config.sensor_size_mm, Vec2::new(23.6, 15.6));
    assert_eq!(config.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(config.forward, Vec3::NEG_Z);
    assert!(config.lock_exposure);
    assert!(config.dolly_zoom);
    assert!(config.validate().is_ok());
}

// ============================================================================
// Validation
// ============================================================================

fn assert_invalid(config: PhysicalCameraConfig, field: &str) {
    match config.validate() {
        Err(Error::InvalidConfig(msg)) => assert!(msg.contains(field), "{} not in {}", field, msg),
        other => panic!("expected InvalidConfig for {}, got {:?}", field, other),
    }
}

#[test]
fn test_validate_rejects_bad_optics() {
    assert_invalid(PhysicalCameraConfig::default().with_focal_length(0.0), "focal_length_mm");
    assert_invalid(PhysicalCameraConfig::default().with_f_stop(-1.0), "f_stop");
    assert_invalid(PhysicalCameraConfig::default().with_iso(0), "iso");
    assert_invalid(PhysicalCameraConfig::default().with_shutter_speed(f32::NAN), "shutter_speed_sec");
    assert_invalid(PhysicalCameraConfig::default().with_sensor_size(36.0, 0.0), "sensor_size_mm");
}

#[test]
fn test_validate_rejects_bad_pose() {
    assert_invalid(
        PhysicalCameraConfig::default().with_pose(Vec3::ZERO, Vec3::ZERO),
        "forward",
    );
    assert_invalid(
        PhysicalCameraConfig::default().with_pose(Vec3::new(f32::INFINITY, 0.0, 0.0), Vec3::Z),
        "position",
    );
}
