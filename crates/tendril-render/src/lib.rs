//! # tendril-render
//!
//! Turns chain state into drawable geometry and hands it to a
//! pluggable output.
//!
//! - [`GeometrySampler`] — per-edge geometry for each [`RenderMode`]
//!   (straight, strain-thickness, wave-sampled polyline)
//! - [`Renderer`] — frame sink trait with a [`HeadlessRenderer`] no-op
//!   and a [`JsonFrameExporter`] for offline inspection
//!
//! [`RenderMode`]: tendril_types::RenderMode

pub mod json_exporter;
pub mod renderer;
pub mod sampler;

pub use json_exporter::JsonFrameExporter;
pub use renderer::{HeadlessRenderer, RenderFrame, Renderer};
pub use sampler::{edge_thickness, ChainGeometry, EdgeGeometry, EdgeSamples, GeometrySampler};
