/// PhysicalDiagnostics - exposure and depth-of-field usage flags.

use super::query::VolumeOverrides;

/// Whether exposure and depth of field are active, and whether they read
/// the physical camera.
///
/// `Default` (all false) is also the state reported when the scene cannot
/// be queried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhysicalDiagnostics {
    pub using_exposure: bool,
    pub using_physical_exposure: bool,
    pub using_depth_of_field: bool,
    pub using_physical_depth_of_field: bool,
}

impl PhysicalDiagnostics {
    /// Fold the overrides of every active volume.
    ///
    /// Once a volume with a physical exposure (or depth of field) override
    /// has been seen, later volumes are not inspected for that override.
    pub fn from_overrides<I>(volumes: I) -> Self
    where
        I: IntoIterator<Item = VolumeOverrides>,
    {
        let mut diagnostics = Self::default();

        for volume in volumes {
            if !diagnostics.using_physical_exposure && volume.has_exposure_override {
                diagnostics.using_exposure = true;
                diagnostics.using_physical_exposure = volume.exposure_uses_physical_camera;
            }

            if !diagnostics.using_physical_depth_of_field && volume.has_depth_of_field_override {
                diagnostics.using_depth_of_field = true;
                diagnostics.using_physical_depth_of_field = volume.dof_uses_physical_camera;
            }

            if diagnostics.using_physical_exposure && diagnostics.using_physical_depth_of_field {
                break;
            }
        }

        diagnostics
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
