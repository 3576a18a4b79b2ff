//! Strike counters.

use serde::{Deserialize, Serialize};

use crate::game_systems::DEFAULT_MAX_STRIKES;

/// Current strikes against a capacity. `current` stays within `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikeTrack {
    current: i32,
    max: i32,
}

impl StrikeTrack {
    /// Build a track, clamping `current` into range. A missing max falls back
    /// to [`DEFAULT_MAX_STRIKES`]; a negative max counts as 0.
    pub fn new(current: i32, max: Option<i32>) -> Self {
        let max = max.unwrap_or(DEFAULT_MAX_STRIKES).max(0);
        Self {
            current: current.clamp(0, max),
            max,
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Add `delta` (may be negative), clamped to `[0, max]`.
    pub fn adjust(self, delta: i32) -> Self {
        Self {
            current: self.current.saturating_add(delta).clamp(0, self.max),
            max: self.max,
        }
    }

    /// The actor is out once strikes reach capacity.
    pub fn is_out(&self) -> bool {
        self.current >= self.max
    }
}
