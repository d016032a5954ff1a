//! Physical camera demo
//!
//! Attaches a model to an in-memory camera, sweeps the focal length with
//! dolly zoom on, then walks the shutter presets with exposure lock on,
//! printing the inspector readout after each step.

use physical_camera::glam::Vec3;
use physical_camera::physcam::{CameraRuntime, PhysicalCameraConfig, PhysicalCameraModel, Result};
use physical_camera::physcam::host::CameraPhysicalState;
use physical_camera::physcam::inspector::{
    InspectorAction, InspectorPanel, FOCAL_LENGTH_PRESETS, SHUTTER_SPEED_PRESETS,
};
use physical_camera::physcam::log::{DefaultLogger, LogSeverity};
use physical_camera::physcam::volume::{StaticVolumeQuery, VolumeOverrides};

fn print_readout(model: &PhysicalCameraModel<CameraPhysicalState>) {
    let readout = InspectorPanel::readout(model);
    println!(
        "  focal {}mm | f/{} | ISO {} | shutter (sec,1/sec) {} | focus distance {} | aperture {} | FOV {}",
        readout.focal_length,
        readout.f_stop,
        readout.iso,
        readout.shutter_speed,
        readout.focus_distance,
        readout.aperture,
        readout.field_of_view,
    );
}

fn main() -> Result<()> {
    CameraRuntime::set_logger(DefaultLogger::new(LogSeverity::Debug));

    let scene = StaticVolumeQuery::new(vec![
        VolumeOverrides::exposure(true),
        VolumeOverrides::depth_of_field(false),
    ]);

    let config = PhysicalCameraConfig::default()
        .with_f_stop(2.8)
        .with_shutter_speed(1.0 / 125.0)
        .with_dolly_zoom(true);
    let mut model = PhysicalCameraModel::from_config(&config, Some(&scene))?;

    for warning in InspectorPanel::warnings(&model) {
        CameraRuntime::log(LogSeverity::Warn, "physcam::demo", warning.to_string());
    }

    println!("Dolly zoom sweep (target 10 units ahead):");
    model.set_focus_target(Some(Vec3::new(0.0, 0.0, 10.0)));
    for preset in FOCAL_LENGTH_PRESETS {
        InspectorPanel::apply(&mut model, InspectorAction::SetFocalLength(preset.value), None)?;
        print_readout(&model);
    }

    println!("Exposure lock sweep:");
    model.set_dolly_zoom(false);
    model.set_exposure_lock(true);
    for preset in SHUTTER_SPEED_PRESETS {
        InspectorPanel::apply(&mut model, InspectorAction::SetShutterSpeed(preset.value), None)?;
        print_readout(&model);
    }

    Ok(())
}
