//! Constant-stiffness (Hookean) law.

use crate::traits::StiffnessLaw;

/// Stiffness independent of strain.
///
/// Equivalent to [`PoissonCoupledLaw`](crate::PoissonCoupledLaw) with a
/// zero ratio, without the multiply.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearLaw;

impl LinearLaw {
    pub fn new() -> Self {
        Self
    }
}

impl StiffnessLaw for LinearLaw {
    fn stiffness(&self, base_stiffness: f32, _strain: f32) -> f32 {
        base_stiffness
    }

    fn name(&self) -> &str {
        "linear"
    }
}
