//! Rig: owned channel registry with single-reading fan-out.
//!
//! The rig replaces the original program's process-wide channel globals with
//! one owned value constructed at startup and passed by reference into the
//! per-frame path. `sample_all` evaluates every channel against one clock
//! reading; taking a fresh reading per channel could visibly desynchronize
//! fast-moving channels, so the API never offers that.

use hashbrown::HashMap;

use crate::channel::Channel;
use crate::error::{AnimError, Result};
use crate::ids::{ChannelId, IdAllocator};
use crate::outputs::{Change, FrameSample};

/// A named collection of keyframe channels sharing one time signal.
#[derive(Default, Debug, Clone)]
pub struct Rig {
    ids: IdAllocator,
    channels: Vec<(ChannelId, Channel)>,
    by_name: HashMap<String, ChannelId>,
}

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a channel, returning its id. Channel names are unique keys
    /// into frame samples, so duplicates are rejected.
    pub fn add_channel(&mut self, channel: Channel) -> Result<ChannelId> {
        if self.by_name.contains_key(channel.name()) {
            return Err(AnimError::DuplicateChannel {
                name: channel.name().to_string(),
            });
        }
        channel.validate()?;
        let id = self.ids.alloc_channel();
        self.by_name.insert(channel.name().to_string(), id);
        self.channels.push((id, channel));
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn channel(&self, id: ChannelId) -> Option<&Channel> {
        self.channels
            .iter()
            .find_map(|(cid, ch)| if *cid == id { Some(ch) } else { None })
    }

    pub fn channel_by_name(&self, name: &str) -> Option<&Channel> {
        self.by_name.get(name).and_then(|id| self.channel(*id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ChannelId, Channel)> {
        self.channels.iter()
    }

    /// Evaluate one channel by name at the given clock reading.
    pub fn sample(&self, name: &str, now: f32) -> Result<f32> {
        let channel = self
            .channel_by_name(name)
            .ok_or_else(|| AnimError::UnknownChannel {
                name: name.to_string(),
            })?;
        channel.evaluate(now)
    }

    /// Evaluate every channel against the same clock reading, in
    /// registration order. Any uninitialized channel fails the whole frame:
    /// that is a setup bug, not a condition to paper over.
    pub fn sample_all(&self, now: f32) -> Result<FrameSample> {
        let mut sample = FrameSample::new(now);
        for (_, channel) in &self.channels {
            sample.push_change(Change {
                key: channel.name().to_string(),
                value: channel.evaluate(now)?,
            });
        }
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_name_rejected() {
        let mut rig = Rig::new();
        rig.add_channel(Channel::from_keys("a", &[(0.0, 1.0)])).unwrap();
        let err = rig
            .add_channel(Channel::from_keys("a", &[(0.0, 2.0)]))
            .unwrap_err();
        assert!(matches!(err, AnimError::DuplicateChannel { .. }));
    }

    #[test]
    fn empty_channel_fails_the_frame() {
        let mut rig = Rig::new();
        rig.add_channel(Channel::from_keys("ok", &[(0.0, 1.0)])).unwrap();
        rig.add_channel(Channel::new("forgotten")).unwrap();
        let err = rig.sample_all(1.0).unwrap_err();
        assert!(matches!(err, AnimError::EmptyChannel { name } if name == "forgotten"));
    }
}
