//! # tendril-io
//!
//! Run input/output contract, scripted anchor motion and input
//! validation.
//!
//! Defines the boundary types that external systems (CLI, scripted
//! hosts) use to describe a headless chain run.

pub mod anchor;
pub mod contract;
pub mod validator;

pub use anchor::AnchorPath;
pub use contract::{SimulationInput, SimulationParams, SimulationSummary};
pub use validator::validate_input;
