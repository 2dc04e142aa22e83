//! Spring force accumulation.
//!
//! A pure function of the state: reads positions, writes nothing. The
//! integrator applies the result afterwards, so edge evaluation order
//! cannot leak into the outcome.

use tendril_material::SpringForceModel;
use tendril_math::Vec2;

use crate::state::ChainState;

/// Net spring force per node for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceField {
    /// Force on each node, indexed like `ChainState::nodes()`.
    pub forces: Vec<Vec2>,
    /// Edges skipped because their length was zero.
    pub skipped_edges: u32,
    /// Signed strain of the most strained evaluated edge.
    pub peak_strain: f32,
}

/// Evaluates every edge and superposes the results on its endpoints.
///
/// The near node receives `+F` along the near→far direction, the far
/// node `-F`. Zero-length edges have no direction and contribute nothing.
pub fn accumulate_forces(state: &ChainState, model: &SpringForceModel) -> ForceField {
    let mut forces = vec![Vec2::ZERO; state.node_count()];
    let mut skipped_edges = 0;
    let mut peak_strain = 0.0f32;

    for edge in state.edges() {
        let segment = state.edge_segment(edge);
        let Some(direction) = segment.direction() else {
            skipped_edges += 1;
            continue;
        };

        let eval = model.evaluate(state.rest_length(edge), segment.length());
        if eval.strain.abs() > peak_strain.abs() {
            peak_strain = eval.strain;
        }

        let f = direction * eval.magnitude;
        forces[edge.near().index()] += f;
        forces[edge.far().index()] -= f;
    }

    ForceField {
        forces,
        skipped_edges,
        peak_strain,
    }
}
