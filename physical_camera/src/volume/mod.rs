//! Scene volume diagnostics module
//!
//! The host scene enumerates its active post-processing volumes; the camera
//! model only folds the results into four diagnostic flags. These flags
//! never change the camera, they tell the user whether exposure and depth of
//! field actually read the physical camera parameters.

mod query;
mod diagnostics;

pub use query::{VolumeOverrides, VolumeQuery, StaticVolumeQuery};
pub use diagnostics::PhysicalDiagnostics;
