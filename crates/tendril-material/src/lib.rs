//! # tendril-material
//!
//! Chain material coefficients and the spring force model.
//!
//! ## Design
//!
//! The [`StiffnessLaw`] trait maps an edge's strain to its effective
//! spring constant. The default law is the pseudo-Poisson coupling
//! `k = k0 * (1 + ν * |strain|)`, which stiffens an edge the further it
//! is pulled from rest. A plain linear law is provided for comparison.
//!
//! [`SpringForceModel`] pairs a base stiffness with a law and evaluates
//! the signed restoring force along an edge. The [`MaterialDatabase`]
//! stores named [`ChainMaterial`] presets.

pub mod database;
pub mod force;
pub mod linear;
pub mod poisson;
pub mod properties;
pub mod traits;

pub use database::MaterialDatabase;
pub use force::{strain, EdgeForce, SpringForceModel};
pub use linear::LinearLaw;
pub use poisson::PoissonCoupledLaw;
pub use properties::ChainMaterial;
pub use traits::StiffnessLaw;
