//! # tendril-math
//!
//! Planar geometry primitives for the tendril simulator.
//!
//! Provides:
//! - Re-export of `glam::Vec2` as the canonical 2D vector
//! - [`Segment`] for edge length, direction and interpolation
//! - [`Aabb`] for circle-vs-box hit-testing of chain nodes

pub mod hit;
pub mod segment;

pub use glam::Vec2;
pub use hit::Aabb;
pub use segment::Segment;
