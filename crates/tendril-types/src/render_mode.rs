//! Edge rendering strategy selector.

use serde::{Deserialize, Serialize};

/// How a chain's edges are turned into drawable geometry.
///
/// | Mode | Output per edge |
/// |---|---|
/// | `Straight` | Endpoint pair |
/// | `Thickness` | Endpoint pair + strain-derived line width |
/// | `WaveSampled` | Polyline rippled by the perturbation layer |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    Straight,
    #[default]
    Thickness,
    WaveSampled,
}

impl RenderMode {
    /// Returns true if this mode consumes perturbation displacement.
    pub fn is_wave(self) -> bool {
        matches!(self, RenderMode::WaveSampled)
    }

    pub fn name(self) -> &'static str {
        match self {
            RenderMode::Straight => "straight",
            RenderMode::Thickness => "thickness",
            RenderMode::WaveSampled => "wave_sampled",
        }
    }
}
