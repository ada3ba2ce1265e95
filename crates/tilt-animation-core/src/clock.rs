//! The animation cycle clock.
//!
//! The platform event loop owns the elapsed-milliseconds counter; this type
//! only reduces a reading of it into the repeating time value the channels
//! are evaluated against. Each rendering frame takes exactly one reading and
//! fans it out to every channel, which is what keeps independently authored
//! channels phase-locked.

use serde::{Deserialize, Serialize};

use crate::error::{AnimError, Result};

/// Converts elapsed wall-clock milliseconds into a bounded, wrapping time in
/// seconds. Changing the cycle length rescales how fast the whole authored
/// animation repeats without touching any keyframe data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleClock {
    cycle_ms: u32,
}

impl CycleClock {
    /// The pinball scene loops every 11 seconds.
    pub const DEFAULT_CYCLE_MS: u32 = 11_000;

    pub fn new(cycle_ms: u32) -> Result<Self> {
        if cycle_ms == 0 {
            return Err(AnimError::InvalidCycle { cycle_ms });
        }
        Ok(Self { cycle_ms })
    }

    pub fn cycle_ms(&self) -> u32 {
        self.cycle_ms
    }

    /// Cycle length in seconds.
    pub fn cycle_seconds(&self) -> f32 {
        self.cycle_ms as f32 / 1000.0
    }

    /// The per-frame time signal: elapsed time reduced modulo the cycle
    /// length, in seconds within `[0, cycle_seconds)`.
    pub fn cycle_time(&self, elapsed_ms: u64) -> f32 {
        (elapsed_ms % self.cycle_ms as u64) as f32 / 1000.0
    }

    /// Fraction of the cycle in `[0, 1)`; handy for driving full-turn spins
    /// (`360 * phase`) without knowing the cycle length.
    pub fn phase(&self, elapsed_ms: u64) -> f32 {
        (elapsed_ms % self.cycle_ms as u64) as f32 / self.cycle_ms as f32
    }
}

impl Default for CycleClock {
    fn default() -> Self {
        Self {
            cycle_ms: Self::DEFAULT_CYCLE_MS,
        }
    }
}
