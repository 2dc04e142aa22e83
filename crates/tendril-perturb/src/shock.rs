//! Shock pulse lifecycle.
//!
//! ```text
//!            trigger
//!  Idle ───────────────▶ Active(phase = 0)
//!   ▲                        │ phase += speed * dt
//!   └──── phase > 1 ─────────┘
//! ```
//!
//! Only one pulse per chain. An automatic trigger while active is
//! ignored; a manual trigger restarts the sweep from `phase = 0`.

use serde::{Deserialize, Serialize};

/// What fired a pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerSource {
    /// Edge strain crossed the auto threshold.
    Auto,
    /// External request from the host.
    Manual,
}

/// Pulse state. `phase` is the pulse center along the edge, in `[0, 1]`
/// while active and exactly 0 while idle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShockPulse {
    active: bool,
    phase: f32,
}

impl ShockPulse {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Fires the pulse. Returns false (state unchanged) when an automatic
    /// trigger arrives while a pulse is already travelling.
    pub fn trigger(&mut self, source: TriggerSource) -> bool {
        if self.active && source == TriggerSource::Auto {
            return false;
        }
        self.active = true;
        self.phase = 0.0;
        true
    }

    /// Moves the pulse forward by `delta` phase units.
    ///
    /// Returns true on the tick the pulse runs off the end of the edge.
    pub fn advance(&mut self, delta: f32) -> bool {
        if !self.active {
            return false;
        }
        self.phase += delta;
        if self.phase > 1.0 {
            self.active = false;
            self.phase = 0.0;
            return true;
        }
        false
    }
}
