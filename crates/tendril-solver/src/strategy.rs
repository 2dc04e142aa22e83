//! Integrator trait — the core abstraction for time integration.
//!
//! The chain aggregate calls the integrator once per host tick:
//!
//! ```text
//! loop {
//!     let result = integrator.step(&mut state, &model, anchor, dt);
//!     perturbation.advance(dt, result.peak_strain);
//! }
//! ```

use tendril_material::SpringForceModel;
use tendril_math::Vec2;

use crate::state::ChainState;

/// Result of one integration step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepResult {
    /// Signed strain of the most strained edge, measured after the anchor
    /// was pinned and before free nodes moved.
    pub peak_strain: f32,
    /// Edges skipped for zero length.
    pub skipped_edges: u32,
    /// Free nodes whose speed hit the configured cap.
    pub clamped_nodes: u32,
    /// Largest single-node displacement this step.
    pub max_displacement: f32,
    /// Wall-clock time for this step (seconds).
    pub wall_time: f64,
}

/// Trait for chain time integrators.
///
/// Implementations must pin kinematic nodes to `anchor` before
/// evaluating forces and must never fail: degenerate edges are skipped.
///
/// # Implementations
///
/// - [`SymplecticEuler`](crate::euler::SymplecticEuler) — explicit Euler,
///   velocity first, with per-tick damping
pub trait Integrator: Send {
    /// Advance the chain by `dt` seconds with the anchor at `anchor`.
    fn step(
        &mut self,
        state: &mut ChainState,
        model: &SpringForceModel,
        anchor: Vec2,
        dt: f32,
    ) -> StepResult;

    /// Returns the integrator's name.
    fn name(&self) -> &str;
}
