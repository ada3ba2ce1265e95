//! Channel identifiers and a simple allocator.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ChannelId(pub u32);

/// Monotonic allocator for ChannelId. Dense indices keep the rig's channel
/// list cache-friendly; IDs are opaque externally.
#[derive(Default, Debug, Clone)]
pub struct IdAllocator {
    next_channel: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_channel(&mut self) -> ChannelId {
        let id = ChannelId(self.next_channel);
        self.next_channel = self.next_channel.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_channel(), ChannelId(0));
        assert_eq!(alloc.alloc_channel(), ChannelId(1));
    }
}
