//! Keyframe channel data model.
//!
//! A channel is one independently-authored animated quantity (one axis of the
//! ball position, a lever angle, one color component) stored as sparse
//! `(time, value)` control points. Channels are populated during setup and
//! read-only afterwards; every frame they are evaluated at the clock's
//! current time.

use serde::{Deserialize, Serialize};

use crate::error::{AnimError, Result};
use crate::sampling::sample_keys;

/// An authored control point: a known value at a known moment (seconds).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

/// An ordered sequence of keyframes plus its evaluator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    name: String,
    keys: Vec<Keyframe>,
}

impl Channel {
    /// Create an empty channel. It must receive at least one keyframe before
    /// the first `evaluate` call.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: Vec::new(),
        }
    }

    /// Build a channel from an authored `(time, value)` table.
    pub fn from_keys(name: impl Into<String>, keys: &[(f32, f32)]) -> Self {
        let mut ch = Self::new(name);
        for &(time, value) in keys {
            ch.add_keyframe(time, value);
        }
        ch
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn first(&self) -> Option<Keyframe> {
        self.keys.first().copied()
    }

    pub fn last(&self) -> Option<Keyframe> {
        self.keys.last().copied()
    }

    /// The authored time span, if any keyframes exist.
    pub fn time_range(&self) -> Option<(f32, f32)> {
        match (self.first(), self.last()) {
            (Some(a), Some(b)) => Some((a.time, b.time)),
            _ => None,
        }
    }

    /// Append a control point.
    ///
    /// Authored tables add points in non-decreasing time order; an
    /// out-of-order insertion still lands at its sorted position. Equal times
    /// keep insertion order, so the later-added keyframe wins lookups.
    pub fn add_keyframe(&mut self, time: f32, value: f32) {
        let key = Keyframe { time, value };
        let idx = self.keys.partition_point(|k| k.time <= time);
        if idx == self.keys.len() {
            self.keys.push(key);
        } else {
            self.keys.insert(idx, key);
        }
    }

    /// Evaluate the channel at an arbitrary query time.
    ///
    /// Queries outside the authored span clamp to the nearest endpoint value;
    /// a single-keyframe channel is constant. Evaluating an empty channel is
    /// an error (a channel was never initialized with data).
    pub fn evaluate(&self, query_time: f32) -> Result<f32> {
        sample_keys(&self.keys, query_time).ok_or_else(|| AnimError::EmptyChannel {
            name: self.name.clone(),
        })
    }

    /// Validate basic invariants: finite, non-decreasing keyframe times.
    /// Channels built through `add_keyframe` satisfy the ordering by
    /// construction; deserialized channels may not.
    pub fn validate(&self) -> Result<()> {
        let mut last = f32::NEG_INFINITY;
        for (index, k) in self.keys.iter().enumerate() {
            if !k.time.is_finite() {
                return Err(AnimError::InvalidTime { time: k.time });
            }
            if k.time < last {
                return Err(AnimError::NonMonotonic {
                    name: self.name.clone(),
                    index,
                });
            }
            last = k.time;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_order_insertion_sorts() {
        let mut ch = Channel::new("x");
        ch.add_keyframe(2.0, 20.0);
        ch.add_keyframe(1.0, 10.0);
        ch.add_keyframe(3.0, 30.0);
        let times: Vec<f32> = ch.keys().iter().map(|k| k.time).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0]);
        ch.validate().unwrap();
    }

    #[test]
    fn equal_times_keep_insertion_order() {
        let mut ch = Channel::new("x");
        ch.add_keyframe(7.0, 1.0);
        ch.add_keyframe(7.0, 2.0);
        assert_eq!(ch.keys()[1].value, 2.0);
    }

    #[test]
    fn validate_rejects_regression() {
        let json = r#"{"name":"bad","keys":[{"time":2.0,"value":0.0},{"time":1.0,"value":0.0}]}"#;
        let ch: Channel = serde_json::from_str(json).unwrap();
        assert!(matches!(
            ch.validate(),
            Err(AnimError::NonMonotonic { index: 1, .. })
        ));
    }
}
