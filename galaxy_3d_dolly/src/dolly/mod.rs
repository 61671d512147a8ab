//! Dolly module — camera rigs that move along a path while filming.

mod dolly_desc;
mod camera_auto_dolly;

pub use dolly_desc::DollyDesc;
pub use camera_auto_dolly::CameraAutoDolly;
