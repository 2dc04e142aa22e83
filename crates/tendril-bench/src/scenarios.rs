//! Benchmark scenarios — chain preset + anchor script for each test case.
//!
//! Four canonical scenarios for regression testing:
//! 1. **Pinned segment** — 2-node leash dragged around a circle
//! 2. **Sine segment** — rippling segment on a figure-eight, with scripted pulses
//! 3. **Snake** — 20-node chain following a Lissajous figure
//! 4. **Anchor jump** — 20-node chain whose anchor teleports 300 units

use serde::{Deserialize, Serialize};

use tendril_io::{AnchorPath, SimulationInput, SimulationParams};
use tendril_math::Vec2;
use tendril_solver::ChainConfig;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    PinnedSegment,
    SineSegment,
    Snake,
    AnchorJump,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::PinnedSegment,
            ScenarioKind::SineSegment,
            ScenarioKind::Snake,
            ScenarioKind::AnchorJump,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::PinnedSegment => "pinned_segment",
            ScenarioKind::SineSegment => "sine_segment",
            ScenarioKind::Snake => "snake",
            ScenarioKind::AnchorJump => "anchor_jump",
        }
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Chain and run parameters.
    pub input: SimulationInput,
    /// Ticks at which a manual pulse is requested.
    pub pulses: Vec<u64>,
}

/// Anchor-path amplitude shared by the moving scenarios.
const PATH_AMPLITUDE: f32 = 160.0;

fn params(duration: f32, anchor_path: AnchorPath) -> SimulationParams {
    SimulationParams {
        duration,
        anchor_path,
        ..SimulationParams::default()
    }
}

impl Scenario {
    /// 2-node leash, anchor orbiting at radius 160 for 5 seconds.
    pub fn pinned_segment() -> Self {
        Self {
            kind: ScenarioKind::PinnedSegment,
            input: SimulationInput {
                chain: ChainConfig::pinned_segment(),
                params: params(
                    5.0,
                    AnchorPath::Circle {
                        radius: PATH_AMPLITUDE,
                        rate: 1.0,
                    },
                ),
            },
            pulses: Vec::new(),
        }
    }

    /// Wave-sampled segment on a figure-eight, pulsed at 0.5 s and 3 s.
    pub fn sine_segment() -> Self {
        Self {
            kind: ScenarioKind::SineSegment,
            input: SimulationInput {
                chain: ChainConfig::sine_segment(),
                params: params(
                    5.0,
                    AnchorPath::Figure8 {
                        amplitude: PATH_AMPLITUDE,
                        rate: 1.0,
                    },
                ),
            },
            pulses: vec![30, 180],
        }
    }

    /// 20-node chain trailing a 3:2 Lissajous anchor.
    pub fn snake() -> Self {
        Self {
            kind: ScenarioKind::Snake,
            input: SimulationInput {
                chain: ChainConfig::snake(),
                params: params(
                    5.0,
                    AnchorPath::Lissajous {
                        amplitude: PATH_AMPLITUDE,
                        rate: 1.0,
                    },
                ),
            },
            pulses: Vec::new(),
        }
    }

    /// 20-node chain at rest whose anchor jumps 300 units at t = 1 s.
    pub fn anchor_jump() -> Self {
        Self {
            kind: ScenarioKind::AnchorJump,
            input: SimulationInput {
                chain: ChainConfig::snake(),
                params: params(
                    3.0,
                    AnchorPath::Jump {
                        at_time: 1.0,
                        offset: Vec2::new(300.0, 0.0),
                    },
                ),
            },
            pulses: Vec::new(),
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::PinnedSegment => Self::pinned_segment(),
            ScenarioKind::SineSegment => Self::sine_segment(),
            ScenarioKind::Snake => Self::snake(),
            ScenarioKind::AnchorJump => Self::anchor_jump(),
        }
    }

    /// Overrides the run length, keeping everything else.
    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.input.params.duration = seconds;
        self
    }

    pub fn timesteps(&self) -> u32 {
        self.input.params.timesteps()
    }
}
