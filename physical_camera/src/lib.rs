/*!
# Physical Camera

Photographic controls for a physical camera model: ISO, shutter speed,
f/stop, focal length, exposure lock, and dolly zoom.

This crate is engine-agnostic. It reads and writes the host engine's camera
through narrow capability traits, and asks the host scene for its
post-processing volumes through an injected query.

## Architecture

- **CameraHost**: capability traits the host camera implements
  (optics, pose, exposure parameters)
- **CameraPhysicalState**: in-memory host camera
- **PhysicalCameraModel**: setters with exposure lock and dolly zoom,
  derived aperture and field-of-view readouts
- **VolumeQuery**: scene collaborator feeding the exposure and
  depth-of-field diagnostics
- **InspectorPanel**: presentation bindings (presets, warnings, readouts)
*/

// Internal modules
mod error;
mod runtime;
mod config;
pub mod log;
pub mod optics;
pub mod host;
pub mod volume;
pub mod control;
pub mod inspector;

// Main physcam namespace module
pub mod physcam {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger entry point
    pub use crate::runtime::CameraRuntime;

    // Configuration
    pub use crate::config::PhysicalCameraConfig;

    // Camera model
    pub use crate::control::PhysicalCameraModel;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Optics formulas
    pub mod optics {
        pub use crate::optics::*;
    }

    // Host capability sub-module
    pub mod host {
        pub use crate::host::*;
    }

    // Scene volume sub-module
    pub mod volume {
        pub use crate::volume::*;
    }

    // Inspector sub-module
    pub mod inspector {
        pub use crate::inspector::*;
    }
}

// Re-export math library at crate root
pub use glam;
