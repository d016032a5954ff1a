//! Inspector module - presentation bindings over the camera model.
//!
//! Nothing here draws anything. A host UI reads the warnings and readouts,
//! shows the preset tables as buttons, and sends the user's clicks back as
//! `InspectorAction`s.

mod presets;
mod panel;

pub use presets::{
    Preset, ISO_PRESETS, SHUTTER_SPEED_PRESETS, F_STOP_PRESETS, FOCAL_LENGTH_PRESETS,
    F_STOP_SLIDER_RANGE, FOCAL_LENGTH_SLIDER_RANGE,
};
pub use panel::{InspectorPanel, InspectorWarning, InspectorReadout, InspectorAction};
