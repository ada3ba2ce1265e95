//! Output contracts from the core.
//!
//! A `FrameSample` carries every channel value for one clock reading, keyed
//! by channel name. The scene-composition side applies these as transform
//! and material parameters; the core never touches rendering state.

use serde::{Deserialize, Serialize};

/// One sampled channel value for this frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub key: String,
    pub value: f32,
}

/// All channel values produced from a single clock reading.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSample {
    /// The clock reading every change was evaluated against.
    pub time: f32,
    #[serde(default)]
    pub changes: Vec<Change>,
}

impl FrameSample {
    pub fn new(time: f32) -> Self {
        Self {
            time,
            changes: Vec::new(),
        }
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Look up a sampled value by channel name.
    pub fn get(&self, key: &str) -> Option<f32> {
        self.changes
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_get() {
        let mut sample = FrameSample::new(7.3);
        assert!(sample.is_empty());
        sample.push_change(Change {
            key: "BallX".into(),
            value: 1.46,
        });
        assert_eq!(sample.get("BallX"), Some(1.46));
        assert_eq!(sample.get("BallZ"), None);
    }
}
