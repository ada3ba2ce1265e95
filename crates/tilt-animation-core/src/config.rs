//! Core configuration.

use serde::{Deserialize, Serialize};

use crate::clock::CycleClock;
use crate::error::Result;

/// Playback configuration. The cycle length is the only knob: it rescales
/// how fast the authored loop repeats, independent of the keyframe tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Milliseconds per full animation loop.
    pub cycle_ms: u32,
}

impl Config {
    pub fn clock(&self) -> Result<CycleClock> {
        CycleClock::new(self.cycle_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cycle_ms: CycleClock::DEFAULT_CYCLE_MS,
        }
    }
}
