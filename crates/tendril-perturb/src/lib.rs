//! # tendril-perturb
//!
//! Cosmetic displacement layer for wave-rendered chains.
//!
//! Two signals are combined along an edge's parameter `u ∈ [0, 1]`:
//!
//! - a continuous traveling sine wave whose amplitude and frequency grow
//!   with `|strain|`
//! - a transient Gaussian shock pulse that sweeps from `u = 0` to `u = 1`
//!   and then switches itself off
//!
//! Nothing in this crate feeds back into the physics. The solver only
//! advances the layer's clock and hands it the current peak strain.

pub mod layer;
pub mod params;
pub mod shock;

pub use layer::{AdvanceReport, PerturbationLayer};
pub use params::{PerturbationConfig, ShockParams, WaveParams};
pub use shock::{ShockPulse, TriggerSource};
