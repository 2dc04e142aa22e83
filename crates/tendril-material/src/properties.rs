//! Physical chain coefficients.

use serde::{Deserialize, Serialize};

use tendril_types::{TendrilError, TendrilResult};

/// Physical properties shared by every edge and free node of a chain.
///
/// | Field | Unit | Valid range |
/// |---|---|---|
/// | `base_stiffness` | force / length | finite |
/// | `poisson_ratio` | — | finite; non-negative is the safe range |
/// | `damping` | per-tick velocity multiplier | `(0, 1]` |
/// | `mass` | per free node | `> 0` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainMaterial {
    /// Human-readable name (e.g., "snake").
    pub name: String,

    /// Spring constant at zero strain.
    pub base_stiffness: f32,

    /// Strain-to-stiffness coupling coefficient.
    pub poisson_ratio: f32,

    /// Velocity multiplier applied every tick. 1.0 = undamped.
    pub damping: f32,

    /// Mass of each free node.
    pub mass: f32,
}

impl Default for ChainMaterial {
    fn default() -> Self {
        Self {
            name: "default".into(),
            base_stiffness: 8.0,
            poisson_ratio: 0.0,
            damping: 0.94,
            mass: 1.0,
        }
    }
}

impl ChainMaterial {
    /// Checks the coefficient ranges a chain needs to integrate without NaNs.
    pub fn validate(&self) -> TendrilResult<()> {
        if !self.base_stiffness.is_finite() {
            return Err(TendrilError::InvalidConfig(format!(
                "base_stiffness must be finite, got {}",
                self.base_stiffness
            )));
        }
        if !self.poisson_ratio.is_finite() {
            return Err(TendrilError::InvalidConfig(format!(
                "poisson_ratio must be finite, got {}",
                self.poisson_ratio
            )));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(TendrilError::InvalidConfig(format!(
                "damping must be in (0, 1], got {}",
                self.damping
            )));
        }
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(TendrilError::InvalidConfig(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        Ok(())
    }

    /// Returns true if the ratio is in the documented safe range.
    ///
    /// Negative ratios are accepted but soften edges as they strain and
    /// invert the thickness mapping.
    pub fn has_safe_poisson_ratio(&self) -> bool {
        self.poisson_ratio >= 0.0
    }

    /// Dimensionless stiffness number `k * dt² / m` for a given timestep.
    ///
    /// Explicit Euler stays bounded for values well below 4.
    pub fn stiffness_number(&self, dt: f32) -> f32 {
        self.base_stiffness * dt * dt / self.mass
    }
}
