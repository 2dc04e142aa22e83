//! Spring force model for a single edge.
//!
//! The restoring force is linear in the displacement `L - rest` but its
//! coefficient comes from a [`StiffnessLaw`], so it may vary with strain:
//!
//! ```text
//! ε = (L - rest) / rest
//! k = law(k0, ε)
//! F = k * (L - rest)
//! ```
//!
//! `F > 0` pulls the two endpoints together, `F < 0` pushes them apart.
//! The caller applies `+F` along the near→far unit vector to the near
//! node and `-F` to the far node.

use std::fmt;
use std::sync::Arc;

use crate::linear::LinearLaw;
use crate::poisson::PoissonCoupledLaw;
use crate::properties::ChainMaterial;
use crate::traits::StiffnessLaw;

/// Relative deviation of `length` from `rest_length`.
///
/// Returns 0.0 for a non-positive rest length; such an edge carries no
/// meaningful strain.
#[inline]
pub fn strain(length: f32, rest_length: f32) -> f32 {
    if rest_length > 0.0 {
        (length - rest_length) / rest_length
    } else {
        0.0
    }
}

/// Evaluated force on one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeForce {
    /// Current edge length.
    pub length: f32,
    /// Signed strain.
    pub strain: f32,
    /// Effective stiffness after the law is applied.
    pub stiffness: f32,
    /// Signed force magnitude along the edge axis.
    pub magnitude: f32,
}

impl EdgeForce {
    /// Elastic energy stored in the edge, `0.5 * k * (L - rest)²`.
    pub fn potential(&self, rest_length: f32) -> f32 {
        let stretch = self.length - rest_length;
        0.5 * self.stiffness * stretch * stretch
    }
}

/// Base stiffness plus a strain law.
#[derive(Clone)]
pub struct SpringForceModel {
    base_stiffness: f32,
    law: Arc<dyn StiffnessLaw>,
}

impl SpringForceModel {
    pub fn new(base_stiffness: f32, law: Arc<dyn StiffnessLaw>) -> Self {
        Self {
            base_stiffness,
            law,
        }
    }

    /// Builds the model a material calls for: pseudo-Poisson coupling
    /// for a non-zero ratio, a linear spring otherwise.
    pub fn from_material(material: &ChainMaterial) -> Self {
        let law: Arc<dyn StiffnessLaw> = if material.poisson_ratio == 0.0 {
            Arc::new(LinearLaw::new())
        } else {
            Arc::new(PoissonCoupledLaw::new(material.poisson_ratio))
        };
        Self::new(material.base_stiffness, law)
    }

    pub fn base_stiffness(&self) -> f32 {
        self.base_stiffness
    }

    pub fn law_name(&self) -> &str {
        self.law.name()
    }

    /// Effective stiffness at `strain`.
    pub fn stiffness_at(&self, strain: f32) -> f32 {
        self.law.stiffness(self.base_stiffness, strain)
    }

    /// Evaluates the edge at its current length.
    pub fn evaluate(&self, rest_length: f32, length: f32) -> EdgeForce {
        let strain = strain(length, rest_length);
        let stiffness = self.stiffness_at(strain);
        EdgeForce {
            length,
            strain,
            stiffness,
            magnitude: stiffness * (length - rest_length),
        }
    }

    /// Signed force magnitude only.
    pub fn force(&self, rest_length: f32, length: f32) -> f32 {
        self.evaluate(rest_length, length).magnitude
    }
}

impl fmt::Debug for SpringForceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpringForceModel")
            .field("base_stiffness", &self.base_stiffness)
            .field("law", &self.law.name())
            .finish()
    }
}
