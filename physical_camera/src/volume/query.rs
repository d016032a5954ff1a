/// Scene volume query - collaborator supplied by the host scene.

use crate::error::{Error, Result};

/// Exposure and depth-of-field overrides found on one active volume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolumeOverrides {
    /// The volume has an active exposure override
    pub has_exposure_override: bool,
    /// The exposure override is in "use physical camera" mode
    pub exposure_uses_physical_camera: bool,
    /// The volume has an active depth-of-field override
    pub has_depth_of_field_override: bool,
    /// The depth-of-field override is in "use physical camera" mode
    pub dof_uses_physical_camera: bool,
}

impl VolumeOverrides {
    /// Volume with an active exposure override.
    pub fn exposure(uses_physical_camera: bool) -> Self {
        Self {
            has_exposure_override: true,
            exposure_uses_physical_camera: uses_physical_camera,
            ..Self::default()
        }
    }

    /// Volume with an active depth-of-field override.
    pub fn depth_of_field(uses_physical_camera: bool) -> Self {
        Self {
            has_depth_of_field_override: true,
            dof_uses_physical_camera: uses_physical_camera,
            ..Self::default()
        }
    }

    /// Add an exposure override to this record.
    pub fn with_exposure(mut self, uses_physical_camera: bool) -> Self {
        self.has_exposure_override = true;
        self.exposure_uses_physical_camera = uses_physical_camera;
        self
    }

    /// Add a depth-of-field override to this record.
    pub fn with_depth_of_field(mut self, uses_physical_camera: bool) -> Self {
        self.has_depth_of_field_override = true;
        self.dof_uses_physical_camera = uses_physical_camera;
        self
    }
}

/// Read-only query over the active volumes of the host scene.
///
/// Called synchronously when a camera model is attached or rechecked.
pub trait VolumeQuery {
    /// Overrides of every active volume, in scene order.
    ///
    /// # Errors
    ///
    /// Returns `Error::CollaboratorUnavailable` when the scene cannot be
    /// queried (not loaded, being torn down, ...).
    fn active_volume_overrides(&self) -> Result<Vec<VolumeOverrides>>;
}

/// Fixed list of volume records.
///
/// Hosts that gather volume data up front hand it over in one of these.
/// `unavailable()` simulates a scene that cannot be queried.
#[derive(Debug, Clone, Default)]
pub struct StaticVolumeQuery {
    volumes: Option<Vec<VolumeOverrides>>,
}

impl StaticVolumeQuery {
    pub fn new(volumes: Vec<VolumeOverrides>) -> Self {
        Self { volumes: Some(volumes) }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn unavailable() -> Self {
        Self { volumes: None }
    }

    /// Append a volume record.
    pub fn push(&mut self, volume: VolumeOverrides) {
        self.volumes.get_or_insert_with(Vec::new).push(volume);
    }
}

impl VolumeQuery for StaticVolumeQuery {
    fn active_volume_overrides(&self) -> Result<Vec<VolumeOverrides>> {
        self.volumes.clone().ok_or_else(|| {
            Error::CollaboratorUnavailable("scene volumes cannot be enumerated".to_string())
        })
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
