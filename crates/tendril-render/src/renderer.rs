//! Renderer trait and HeadlessRenderer stub.
//!
//! The renderer is called once per frame (or per N-frames) to present
//! the current chain geometry. The headless renderer discards all
//! frames, serving as a no-op for benchmarks and CI.

use serde::Serialize;

use tendril_solver::ElasticChain;
use tendril_types::TendrilResult;

use crate::sampler::{ChainGeometry, GeometrySampler};

/// A single render frame.
#[derive(Debug, Clone, Serialize)]
pub struct RenderFrame {
    /// Tick this frame corresponds to.
    pub tick: u64,
    /// Simulation time (seconds).
    pub sim_time: f64,
    /// Sampled chain geometry.
    pub geometry: ChainGeometry,
}

impl RenderFrame {
    /// Samples `chain` in its current state.
    pub fn capture(chain: &ElasticChain, sampler: &GeometrySampler) -> Self {
        Self {
            tick: chain.tick(),
            sim_time: chain.sim_time(),
            geometry: sampler.sample_chain(chain),
        }
    }
}

/// Trait for presenting simulation output.
///
/// # Implementations
/// - [`HeadlessRenderer`] — Discards frames (benchmarks, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter) — Writes all frames as JSON
pub trait Renderer: Send {
    /// Initialize the renderer for a chain.
    fn init(&mut self, chain: &ElasticChain) -> TendrilResult<()>;

    /// Submit a frame for rendering.
    fn submit_frame(&mut self, frame: &RenderFrame) -> TendrilResult<()>;

    /// Finalize rendering (flush buffers, close files, etc.).
    fn finalize(&mut self) -> TendrilResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Headless renderer — discards all frames.
pub struct HeadlessRenderer {
    frames: u32,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self { frames: 0 }
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, _chain: &ElasticChain) -> TendrilResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &RenderFrame) -> TendrilResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> TendrilResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
