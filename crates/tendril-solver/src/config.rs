//! Chain configuration.
//!
//! Everything a chain needs at construction time: topology size,
//! initial spacing, material coefficients, and the optional cosmetic
//! layers. Immutable once a chain is built.

use serde::{Deserialize, Serialize};

use tendril_material::{database, ChainMaterial};
use tendril_perturb::PerturbationConfig;
use tendril_types::{RenderMode, TendrilError, TendrilResult};

/// Configuration for one elastic chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Number of nodes, including the kinematic anchor node. Must be ≥ 2.
    pub node_count: usize,

    /// Initial distance between neighbouring nodes. Sets every rest length.
    pub spacing: f32,

    /// Physical coefficients.
    pub material: ChainMaterial,

    /// Optional cap on free-node speed, applied after damping.
    pub max_speed: Option<f32>,

    /// How edges are drawn.
    pub render_mode: RenderMode,

    /// Wave/shock layer. `None` for chains without the rippled look.
    pub perturbation: Option<PerturbationConfig>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::pinned_segment()
    }
}

impl ChainConfig {
    /// Two nodes on a 200-unit leash, drawn with strain-derived thickness.
    pub fn pinned_segment() -> Self {
        Self {
            node_count: 2,
            spacing: 200.0,
            material: database::pinned_segment(),
            max_speed: None,
            render_mode: RenderMode::Thickness,
            perturbation: None,
        }
    }

    /// Two nodes, 250 apart, drawn as a rippling polyline with shock pulses.
    pub fn sine_segment() -> Self {
        Self {
            node_count: 2,
            spacing: 250.0,
            material: database::sine_segment(),
            max_speed: None,
            render_mode: RenderMode::WaveSampled,
            perturbation: Some(PerturbationConfig::default()),
        }
    }

    /// Twenty tightly packed nodes trailing the anchor.
    pub fn snake() -> Self {
        Self {
            node_count: 20,
            spacing: 0.5,
            material: database::snake(),
            max_speed: None,
            render_mode: RenderMode::Thickness,
            perturbation: None,
        }
    }

    /// Replaces the material, keeping topology and render settings.
    pub fn with_material(mut self, material: ChainMaterial) -> Self {
        self.material = material;
        self
    }

    pub fn edge_count(&self) -> usize {
        self.node_count.saturating_sub(1)
    }

    /// Returns true if the chain carries a perturbation layer.
    pub fn is_wave_capable(&self) -> bool {
        self.perturbation.is_some()
    }

    /// Checks every construction-time contract. Call before building a chain.
    pub fn validate(&self) -> TendrilResult<()> {
        if self.node_count < 2 {
            return Err(TendrilError::InvalidConfig(format!(
                "node_count must be at least 2, got {}",
                self.node_count
            )));
        }
        if !(self.spacing > 0.0 && self.spacing.is_finite()) {
            return Err(TendrilError::InvalidConfig(format!(
                "spacing must be positive, got {}",
                self.spacing
            )));
        }
        self.material.validate()?;

        if let Some(max_speed) = self.max_speed {
            if !(max_speed > 0.0) {
                return Err(TendrilError::InvalidConfig(format!(
                    "max_speed must be positive when set, got {max_speed}"
                )));
            }
        }

        match &self.perturbation {
            Some(p) => p.validate()?,
            None if self.render_mode.is_wave() => {
                return Err(TendrilError::InvalidConfig(
                    "wave_sampled rendering requires a perturbation config".into(),
                ));
            }
            None => {}
        }

        if !self.material.has_safe_poisson_ratio() {
            tracing::warn!(
                poisson_ratio = self.material.poisson_ratio,
                "negative poisson ratio softens strained edges and inverts thickness"
            );
        }

        Ok(())
    }
}
