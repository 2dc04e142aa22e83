//! Pseudo-Poisson stiffness coupling.
//!
//! A 1D stand-in for a material whose cross-section narrows as it is
//! stretched: the effective spring constant scales with the magnitude
//! of strain,
//!
//! ```text
//! k = k0 * (1 + ν * |ε|)
//! ```
//!
//! Positive `ν` stiffens stretched and compressed edges alike. Negative
//! `ν` softens them (auxetic-inverse response) and can drive `k` to zero
//! or below at large strain; the law does not clamp, so a negative ratio
//! with large strain yields a repulsive "spring".

use crate::traits::StiffnessLaw;

/// Strain-coupled stiffness law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoissonCoupledLaw {
    /// Coupling coefficient `ν`.
    pub poisson_ratio: f32,
}

impl PoissonCoupledLaw {
    pub fn new(poisson_ratio: f32) -> Self {
        Self { poisson_ratio }
    }
}

impl StiffnessLaw for PoissonCoupledLaw {
    fn stiffness(&self, base_stiffness: f32, strain: f32) -> f32 {
        base_stiffness * (1.0 + self.poisson_ratio * strain.abs())
    }

    fn name(&self) -> &str {
        "poisson_coupled"
    }
}
