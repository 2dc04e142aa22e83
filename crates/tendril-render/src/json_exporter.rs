//! JSON frame exporter — writes per-frame chain geometry for inspection.
//!
//! Collects every submitted frame and serializes the whole run to one
//! JSON file on `finalize()`.

use std::path::{Path, PathBuf};

use serde::Serialize;

use tendril_solver::ElasticChain;
use tendril_types::{RenderMode, TendrilError, TendrilResult};

use crate::renderer::{RenderFrame, Renderer};

/// Complete animation data for JSON export.
#[derive(Serialize)]
struct AnimationData<'a> {
    node_count: usize,
    render_mode: RenderMode,
    frames: &'a [RenderFrame],
}

/// Exports simulation frames to a JSON file.
///
/// Usage:
/// ```text
/// let mut exporter = JsonFrameExporter::new("frames.json");
/// exporter.init(&chain)?;
/// // ... tick the chain, calling submit_frame() each step ...
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonFrameExporter {
    output_path: PathBuf,
    node_count: usize,
    render_mode: RenderMode,
    frames: Vec<RenderFrame>,
}

impl JsonFrameExporter {
    pub fn new(output_path: impl AsRef<Path>) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
            node_count: 0,
            render_mode: RenderMode::default(),
            frames: Vec::new(),
        }
    }

    /// Serializes the collected frames without writing them.
    pub fn to_json(&self) -> TendrilResult<String> {
        let data = AnimationData {
            node_count: self.node_count,
            render_mode: self.render_mode,
            frames: &self.frames,
        };
        serde_json::to_string(&data).map_err(|e| {
            TendrilError::Serialization(format!("JSON serialization failed: {e}"))
        })
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, chain: &ElasticChain) -> TendrilResult<()> {
        self.node_count = chain.state().node_count();
        self.render_mode = chain.render_mode();
        self.frames.clear();
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> TendrilResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn finalize(&mut self) -> TendrilResult<()> {
        let json = self.to_json()?;
        std::fs::write(&self.output_path, json)?;
        self.frames.clear();
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}
