//! # tendril-types
//!
//! Shared types, identifiers, error types, and simulation constants
//! for the tendril elastic chain simulator.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other tendril crates share.

pub mod color;
pub mod constants;
pub mod error;
pub mod ids;
pub mod render_mode;

pub use color::Color;
pub use error::{TendrilError, TendrilResult};
pub use ids::{EdgeId, NodeId};
pub use render_mode::RenderMode;
