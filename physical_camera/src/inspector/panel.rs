/// InspectorPanel - warnings, readouts, and user actions for one camera.

use std::fmt;
use std::ops::RangeInclusive;
use crate::control::PhysicalCameraModel;
use crate::error::Result;
use crate::host::CameraHost;
use crate::volume::VolumeQuery;
use super::presets::{F_STOP_SLIDER_RANGE, FOCAL_LENGTH_SLIDER_RANGE};

/// Configuration problems shown above the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectorWarning {
    /// Dolly zoom is on but nothing to keep in frame
    DollyZoomWithoutFocusTarget,
    /// The host field of view is not linked to the physical properties
    NotUsingPhysicalProperties,
    /// No active exposure override in the scene
    NotUsingExposure,
    /// An exposure override exists but ignores the physical camera
    NotUsingPhysicalExposure,
    /// A depth-of-field override exists but ignores the physical camera
    NotUsingPhysicalDepthOfField,
}

impl InspectorWarning {
    pub fn message(&self) -> &'static str {
        match self {
            InspectorWarning::DollyZoomWithoutFocusTarget =>
                "WARNING: Using dolly zoom without a focus object.",
            InspectorWarning::NotUsingPhysicalProperties =>
                "NOT USING PHYSICAL PROPERTIES! Link the camera field of view to the physical camera.",
            InspectorWarning::NotUsingExposure =>
                "NOT USING EXPOSURE! Add an exposure volume override with the mode \"Use Physical Camera\".",
            InspectorWarning::NotUsingPhysicalExposure =>
                "NOT USING PHYSICAL EXPOSURE! Add an exposure volume override with the mode \"Use Physical Camera\".",
            InspectorWarning::NotUsingPhysicalDepthOfField =>
                "NOT USING PHYSICAL DEPTH OF FIELD! Change the Depth of Field focus mode to \"Use Physical Camera\".",
        }
    }

    /// Whether the panel should offer a "Check" button for this warning.
    ///
    /// Only the scene diagnostics can change without the camera changing.
    pub fn requests_recheck(&self) -> bool {
        matches!(
            self,
            InspectorWarning::NotUsingExposure
                | InspectorWarning::NotUsingPhysicalExposure
                | InspectorWarning::NotUsingPhysicalDepthOfField
        )
    }
}

impl fmt::Display for InspectorWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Formatted read-only values, two decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorReadout {
    /// "12.34"
    pub focus_distance: String,
    /// "17.86mm, 250.43mm^2"
    pub aperture: String,
    /// "39.60, 26.99" (horizontal, vertical)
    pub field_of_view: String,
    pub iso: String,
    /// "0.01, 125.00" (seconds, 1/seconds)
    pub shutter_speed: String,
    pub f_stop: String,
    pub focal_length: String,
}

/// User input coming back from the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InspectorAction {
    SetIso(u32),
    SetShutterSpeed(f32),
    /// Preset button
    SetFStop(f32),
    /// Slider, clamped to `F_STOP_SLIDER_RANGE`
    SlideFStop(f32),
    /// Preset button
    SetFocalLength(f32),
    /// Slider, clamped to `FOCAL_LENGTH_SLIDER_RANGE`
    SlideFocalLength(f32),
    /// "Check" button: re-query the scene diagnostics
    Recheck,
}

fn clamp_to(value: f32, range: &RangeInclusive<f32>) -> f32 {
    value.clamp(*range.start(), *range.end())
}

/// Stateless panel logic.
pub struct InspectorPanel;

impl InspectorPanel {
    /// Warnings to display, in display order.
    pub fn warnings<H: CameraHost>(model: &PhysicalCameraModel<H>) -> Vec<InspectorWarning> {
        let mut warnings = Vec::new();

        if model.is_using_dolly_zoom() && !model.has_focus_target() {
            warnings.push(InspectorWarning::DollyZoomWithoutFocusTarget);
        }
        if !model.uses_physical_properties() {
            warnings.push(InspectorWarning::NotUsingPhysicalProperties);
        }
        if !model.is_using_exposure() {
            warnings.push(InspectorWarning::NotUsingExposure);
        } else if !model.is_using_physical_exposure() {
            warnings.push(InspectorWarning::NotUsingPhysicalExposure);
        }
        if model.is_using_depth_of_field() && !model.is_using_physical_depth_of_field() {
            warnings.push(InspectorWarning::NotUsingPhysicalDepthOfField);
        }

        warnings
    }

    /// Whether a "Check" button should be shown.
    pub fn needs_recheck(warnings: &[InspectorWarning]) -> bool {
        warnings.iter().any(InspectorWarning::requests_recheck)
    }

    pub fn readout<H: CameraHost>(model: &PhysicalCameraModel<H>) -> InspectorReadout {
        let shutter_speed = model.shutter_speed();
        InspectorReadout {
            focus_distance: format!("{:.2}", model.focus_distance()),
            aperture: format!("{:.2}mm, {:.2}mm^2", model.actual_aperture_diameter(), model.aperture_area()),
            field_of_view: format!("{:.2}, {:.2}", model.horizontal_fov(), model.vertical_fov()),
            iso: model.iso().to_string(),
            shutter_speed: format!("{:.2}, {:.2}", shutter_speed, 1.0 / shutter_speed),
            f_stop: format!("{:.2}", model.f_stop()),
            focal_length: format!("{:.2}", model.focal_length()),
        }
    }

    /// Apply one user action to the model.
    ///
    /// `volumes` is only used by `InspectorAction::Recheck`.
    ///
    /// # Errors
    ///
    /// Propagates `Error::InvalidArgument` from the model setters.
    pub fn apply<H: CameraHost>(
        model: &mut PhysicalCameraModel<H>,
        action: InspectorAction,
        volumes: Option<&dyn VolumeQuery>,
    ) -> Result<()> {
        match action {
            InspectorAction::SetIso(iso) => model.set_iso(iso),
            InspectorAction::SetShutterSpeed(seconds) => model.set_shutter_speed(seconds),
            InspectorAction::SetFStop(f_stop) => model.set_f_stop(f_stop),
            InspectorAction::SlideFStop(f_stop) => {
                model.set_f_stop(clamp_to(f_stop, &F_STOP_SLIDER_RANGE))
            }
            InspectorAction::SetFocalLength(mm) => model.set_focal_length(mm),
            InspectorAction::SlideFocalLength(mm) => {
                model.set_focal_length(clamp_to(mm, &FOCAL_LENGTH_SLIDER_RANGE))
            }
            InspectorAction::Recheck => {
                model.refresh_external_diagnostics(volumes);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod tests;
