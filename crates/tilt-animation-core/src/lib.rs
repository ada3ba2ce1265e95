//! tilt animation core (renderer-agnostic)
//!
//! This crate holds the two pieces every frame of the pinball scene hangs off:
//! sparse keyframe channels with a clamped linear evaluator, and the cycle
//! clock that reduces an elapsed-milliseconds reading into the single time
//! value all channels are sampled against. Rendering, windowing, and asset
//! loading live elsewhere; this crate only turns time into values.

pub mod channel;
pub mod clock;
pub mod config;
pub mod error;
pub mod ids;
pub mod outputs;
pub mod rig;
pub mod sampling;

// Re-exports for consumers (scene/player crates)
pub use channel::{Channel, Keyframe};
pub use clock::CycleClock;
pub use config::Config;
pub use error::{AnimError, Result};
pub use ids::ChannelId;
pub use outputs::{Change, FrameSample};
pub use rig::Rig;
pub use sampling::sample_keys;
