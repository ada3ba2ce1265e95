//! Error types for the animation core.

use serde::{Deserialize, Serialize};

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AnimError>;

/// Errors surfaced by channel setup and evaluation.
///
/// Evaluating an empty channel is a setup bug, not a runtime condition, so it
/// is a hard error rather than a silent default value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimError {
    /// A channel was queried before any keyframes were added.
    #[error("channel '{name}' has no keyframes")]
    EmptyChannel { name: String },

    /// A rig already holds a channel under this name.
    #[error("channel '{name}' is already registered")]
    DuplicateChannel { name: String },

    /// Cycle length must be at least one millisecond.
    #[error("invalid cycle length: {cycle_ms} ms")]
    InvalidCycle { cycle_ms: u32 },

    /// Keyframe or query times must be finite.
    #[error("invalid time value: {time}")]
    InvalidTime { time: f32 },

    /// Keyframe times regressed at the given index.
    #[error("channel '{name}' has out-of-order keyframe at index {index}")]
    NonMonotonic { name: String, index: usize },

    /// A rig lookup referenced a channel that does not exist.
    #[error("unknown channel: {name}")]
    UnknownChannel { name: String },
}

impl AnimError {
    /// Error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::EmptyChannel { .. } | Self::DuplicateChannel { .. } => "setup",
            Self::InvalidCycle { .. } | Self::InvalidTime { .. } | Self::NonMonotonic { .. } => {
                "validation"
            }
            Self::UnknownChannel { .. } => "lookup",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        let e = AnimError::EmptyChannel { name: "BallX".into() };
        assert_eq!(e.category(), "setup");
        assert_eq!(AnimError::InvalidTime { time: f32::NAN }.category(), "validation");
    }

    #[test]
    fn serde_roundtrip() {
        let e = AnimError::InvalidCycle { cycle_ms: 0 };
        let s = serde_json::to_string(&e).unwrap();
        let e2: AnimError = serde_json::from_str(&s).unwrap();
        assert_eq!(e, e2);
    }
}
