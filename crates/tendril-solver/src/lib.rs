//! # tendril-solver
//!
//! Chain state, spring integration, and the per-entity chain aggregate.
//!
//! ## Key Types
//!
//! - [`ChainState`] — node positions/velocities and immutable rest lengths
//! - [`ChainConfig`] — topology size, material, render mode, perturbation
//! - [`Integrator`] — pluggable time integration trait
//! - [`SymplecticEuler`] — explicit semi-implicit Euler with per-tick damping
//! - [`ElasticChain`] — state + force model + integrator + perturbation,
//!   driven once per host tick with the current anchor position

pub mod chain;
pub mod config;
pub mod euler;
pub mod forces;
pub mod state;
pub mod strategy;

pub use chain::{ElasticChain, TickReport};
pub use config::ChainConfig;
pub use euler::SymplecticEuler;
pub use forces::{accumulate_forces, ForceField};
pub use state::{ChainState, Node, NodeRole};
pub use strategy::{Integrator, StepResult};
