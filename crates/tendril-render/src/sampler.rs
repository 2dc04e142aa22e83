//! Geometry sampling for chain edges.
//!
//! Wave-capable chains are drawn as polylines: each edge is split into
//! `segments` pieces and every sample point is pushed along the edge
//! normal by the perturbation layer's displacement. Other chains draw
//! straight edges, optionally with a strain-derived line width:
//!
//! ```text
//! thickness = max(minimum, base * (1 - ν * strain))
//! ```
//!
//! For `ν < 0` the formula grows with stretch instead of shrinking; the
//! minimum clamp keeps it drawable either way.

use serde::Serialize;

use tendril_math::{Segment, Vec2};
use tendril_perturb::PerturbationLayer;
use tendril_solver::{ChainConfig, ElasticChain};
use tendril_types::constants::{DEFAULT_SAMPLE_SEGMENTS, MIN_THICKNESS};
use tendril_types::{Color, RenderMode};

/// Strain-derived line width, clamped to `minimum`.
pub fn edge_thickness(strain: f32, poisson_ratio: f32, base: f32, minimum: f32) -> f32 {
    let t = base * (1.0 - poisson_ratio * strain);
    if t.is_finite() {
        t.max(minimum)
    } else {
        minimum
    }
}

/// Lazy sample points along one perturbed edge.
///
/// Yields `segments + 1` points from start to end, computed on demand.
/// Nothing is cached: calling [`GeometrySampler::sample_edge`] again
/// restarts the sequence with the layer's current phase. A zero-length
/// edge yields no points.
#[derive(Debug, Clone)]
pub struct EdgeSamples<'a> {
    segment: Segment,
    normal: Vec2,
    strain: f32,
    layer: &'a PerturbationLayer,
    segments: usize,
    next: usize,
    end: usize,
}

impl<'a> Iterator for EdgeSamples<'a> {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.next >= self.end {
            return None;
        }
        let u = self.next as f32 / self.segments as f32;
        self.next += 1;

        let base = self.segment.point_at(u);
        Some(base + self.normal * self.layer.displacement(u, self.strain))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EdgeSamples<'_> {}

/// Drawable geometry for one edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EdgeGeometry {
    Straight { start: Vec2, end: Vec2 },
    Thick { start: Vec2, end: Vec2, thickness: f32 },
    Polyline { points: Vec<Vec2> },
}

/// Everything a host needs to draw one chain for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainGeometry {
    /// Node centers (circle rendering, hit-testing).
    pub nodes: Vec<Vec2>,
    /// One entry per edge.
    pub edges: Vec<EdgeGeometry>,
    pub color: Color,
}

/// Per-mode edge geometry builder.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometrySampler {
    /// Polyline pieces per wave-sampled edge.
    pub segments: usize,
    /// Line width at zero strain.
    pub base_thickness: f32,
    /// Smallest width ever produced.
    pub min_thickness: f32,
}

impl Default for GeometrySampler {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SAMPLE_SEGMENTS,
            base_thickness: 12.0,
            min_thickness: MIN_THICKNESS,
        }
    }
}

impl GeometrySampler {
    /// Sampler tuned to a chain's shape: multi-node chains draw thinner.
    pub fn for_config(config: &ChainConfig) -> Self {
        let base = if config.node_count > 2 { 10.0 } else { 12.0 };
        Self::default().with_base_thickness(base)
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    pub fn with_base_thickness(mut self, base: f32) -> Self {
        self.base_thickness = base;
        self
    }

    /// Samples one edge through the perturbation layer.
    pub fn sample_edge<'a>(
        &self,
        segment: Segment,
        strain: f32,
        layer: &'a PerturbationLayer,
    ) -> EdgeSamples<'a> {
        let segments = self.segments.max(1);
        let (normal, end) = match segment.normal() {
            Some(n) => (n, segments + 1),
            None => (Vec2::ZERO, 0),
        };
        EdgeSamples {
            segment,
            normal,
            strain,
            layer,
            segments,
            next: 0,
            end,
        }
    }

    pub fn thickness(&self, strain: f32, poisson_ratio: f32) -> f32 {
        edge_thickness(strain, poisson_ratio, self.base_thickness, self.min_thickness)
    }

    /// Geometry for one edge under `mode`.
    ///
    /// `WaveSampled` without a layer falls back to a straight edge.
    pub fn edge_geometry(
        &self,
        mode: RenderMode,
        segment: Segment,
        strain: f32,
        poisson_ratio: f32,
        layer: Option<&PerturbationLayer>,
    ) -> EdgeGeometry {
        match (mode, layer) {
            (RenderMode::WaveSampled, Some(layer)) => EdgeGeometry::Polyline {
                points: self.sample_edge(segment, strain, layer).collect(),
            },
            (RenderMode::Thickness, _) => EdgeGeometry::Thick {
                start: segment.start,
                end: segment.end,
                thickness: self.thickness(strain, poisson_ratio),
            },
            (RenderMode::Straight, _) | (RenderMode::WaveSampled, None) => {
                EdgeGeometry::Straight {
                    start: segment.start,
                    end: segment.end,
                }
            }
        }
    }

    /// Geometry for a whole chain in its configured render mode.
    pub fn sample_chain(&self, chain: &ElasticChain) -> ChainGeometry {
        let state = chain.state();
        let mode = chain.render_mode();
        let poisson_ratio = chain.config().material.poisson_ratio;
        let layer = chain.perturbation();

        let edges = state
            .edges()
            .map(|e| {
                self.edge_geometry(
                    mode,
                    state.edge_segment(e),
                    state.edge_strain(e),
                    poisson_ratio,
                    layer,
                )
            })
            .collect();

        ChainGeometry {
            nodes: chain.node_positions(),
            edges,
            color: chain.color(),
        }
    }
}
