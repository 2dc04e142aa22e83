//! Simulation input/output contract types.
//!
//! These types define the I/O boundary of a headless tendril run. They
//! are serializable for CLI configuration (TOML) and result export
//! (JSON).

use std::path::Path;

use serde::{Deserialize, Serialize};

use tendril_math::Vec2;
use tendril_solver::ChainConfig;
use tendril_types::constants::DEFAULT_DT;
use tendril_types::{TendrilError, TendrilResult};

use crate::anchor::AnchorPath;

/// Complete input specification for a simulation run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationInput {
    /// The chain to simulate.
    pub chain: ChainConfig,
    /// Run parameters.
    pub params: SimulationParams,
}

/// Timing and anchor parameters for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Total simulation time in seconds.
    pub duration: f32,
    /// Timestep in seconds (e.g., 1/60).
    pub dt: f32,
    /// Anchor position at `t = 0`; the chain is built behind it.
    pub anchor_start: Vec2,
    /// Scripted anchor motion relative to `anchor_start`.
    pub anchor_path: AnchorPath,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            duration: 5.0,
            dt: DEFAULT_DT,
            anchor_start: Vec2::new(500.0, 300.0),
            anchor_path: AnchorPath::Fixed,
        }
    }
}

impl SimulationParams {
    /// Number of whole ticks covering `duration`.
    pub fn timesteps(&self) -> u32 {
        if self.dt > 0.0 && self.duration > 0.0 {
            (self.duration / self.dt).round() as u32
        } else {
            0
        }
    }

    /// Anchor position at time `t`.
    pub fn anchor_at(&self, t: f32) -> Vec2 {
        self.anchor_path.position(self.anchor_start, t)
    }
}

impl SimulationInput {
    /// Input for one of the built-in chain presets, with default params.
    ///
    /// Known names: `pinned_segment`, `sine_segment`, `snake`.
    pub fn preset(name: &str) -> Option<Self> {
        let chain = match name {
            "pinned_segment" => ChainConfig::pinned_segment(),
            "sine_segment" => ChainConfig::sine_segment(),
            "snake" => ChainConfig::snake(),
            _ => return None,
        };
        Some(Self {
            chain,
            params: SimulationParams::default(),
        })
    }

    pub fn from_toml_str(text: &str) -> TendrilResult<Self> {
        toml::from_str(text).map_err(|e| {
            TendrilError::Serialization(format!("Failed to parse run file: {e}"))
        })
    }

    pub fn to_toml_string(&self) -> TendrilResult<String> {
        toml::to_string(self).map_err(|e| {
            TendrilError::Serialization(format!("Failed to write run file: {e}"))
        })
    }

    /// Reads and parses a TOML run file.
    pub fn load(path: impl AsRef<Path>) -> TendrilResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Result of a completed headless run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Number of ticks executed.
    pub ticks: u64,
    /// Simulated time (seconds).
    pub sim_time: f64,
    /// Total wall-clock time (seconds).
    pub wall_time_seconds: f64,
    /// Kinetic energy at the final tick.
    pub final_kinetic_energy: f64,
    /// Elastic energy at the final tick.
    pub final_elastic_energy: f64,
    /// Largest `|strain|` seen on any edge during the run.
    pub max_abs_strain: f32,
    /// Shock pulses fired (auto and manual).
    pub shocks_triggered: u32,
    /// Node positions at the final tick.
    pub final_positions: Vec<Vec2>,
}
