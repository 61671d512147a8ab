/*!
# Galaxy 3D Dolly

Camera rigs for the Galaxy3D engine.

The centerpiece is [`CameraAutoDolly`](dolly::CameraAutoDolly): a behaviour that
swings a camera back and forth along one axis with a cosine curve while keeping
it aimed at a target anchor.

## Architecture

- **Transform**: position + rotation of a stage object, with look-at support
- **Anchor**: anything the camera can aim at (fixed point, live transform)
- **Clock / FrameTime**: host-supplied monotonic time
- **Behaviour**: per-frame strategy attached to a stage object
- **Stage**: owns objects, drives `start` / `update` on their behaviours
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod dolly;
pub mod stage;
pub mod time;
pub mod transform;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine (logging facade)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: dolly_* macros are NOT re-exported here - they are internal only
    }

    // Dolly sub-module
    pub mod dolly {
        pub use crate::dolly::*;
    }

    // Stage sub-module
    pub mod stage {
        pub use crate::stage::*;
    }

    // Time sub-module
    pub mod time {
        pub use crate::time::*;
    }

    // Transform sub-module
    pub mod transform {
        pub use crate::transform::*;
    }
}

// Re-export math library at crate root
pub use glam;

