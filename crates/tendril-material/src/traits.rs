//! Stiffness law trait — the core material abstraction.
//!
//! Every law implements this trait, so the force model can swap
//! between strain-coupled and constant stiffness without changing
//! the integrator.

/// Maps edge strain to an effective spring constant.
///
/// # Strategy Pattern
///
/// - `PoissonCoupledLaw` — stiffness grows (or shrinks) with `|strain|`
/// - `LinearLaw` — constant stiffness, a textbook Hookean spring
pub trait StiffnessLaw: Send + Sync {
    /// Effective stiffness for an edge at the given strain.
    ///
    /// # Arguments
    /// - `base_stiffness` — Stiffness at zero strain
    /// - `strain` — `(L - rest) / rest`, signed
    fn stiffness(&self, base_stiffness: f32, strain: f32) -> f32;

    /// Returns the name of this law.
    fn name(&self) -> &str;
}
