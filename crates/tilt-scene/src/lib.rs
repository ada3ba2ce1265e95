//! tilt scene: the authored pinball animation data and its per-frame pose.
//!
//! The core crate knows nothing about pinball; this crate owns the eighteen
//! authored keyframe tables (ball path, lever flips, plunger, camera fly-in,
//! impact color flashes) and composes one `ScenePose` of plain values per
//! frame. Rendering code applies the pose as transform and material
//! parameters; nothing here touches a graphics API.

pub mod keyframes;
pub mod math;
pub mod palette;
pub mod pose;

pub use keyframes::build_rig;
pub use math::{hsv_to_rgb, Rgb, Vec3};
pub use palette::Palette;
pub use pose::{CameraPose, PinballScene, ScenePose};
