//! Simulation event types.
//!
//! Structured events emitted around each chain tick. Events are
//! lightweight value types that carry just enough data to be useful for
//! monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Tick number the event belongs to.
    pub tick: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// What fired a shock pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PulseSource {
    /// Strain crossed the auto-trigger threshold.
    Auto,
    /// External request (user input, scripted event).
    Manual,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// Tick started.
    TickBegin {
        /// Simulation time at the start of the tick (seconds).
        sim_time: f64,
    },

    /// Tick completed.
    TickEnd {
        /// Wall-clock time spent in the integrator (seconds).
        wall_time: f64,
        /// Peak signed strain after the step.
        peak_strain: f32,
    },

    /// A shock pulse started (or restarted) its sweep.
    ShockTriggered { source: PulseSource },

    /// The active shock pulse ran off the end of the edge.
    ShockExpired,

    /// Energy snapshot at current state.
    Energy {
        /// Kinetic energy of the free nodes.
        kinetic: f64,
        /// Elastic energy stored in the springs.
        elastic: f64,
    },

    /// The chain was rebuilt in its rest layout.
    ChainReset,

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given tick.
    pub fn new(tick: u64, kind: EventKind) -> Self {
        Self { tick, kind }
    }

    pub fn is_shock_trigger(&self) -> bool {
        matches!(self.kind, EventKind::ShockTriggered { .. })
    }
}
