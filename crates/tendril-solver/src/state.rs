//! Chain state — nodes and rest lengths.
//!
//! Nodes form a contiguous array; edge `i` joins node `i` and node
//! `i + 1`. Rest lengths are fixed when the state is built and never
//! change. A reset builds a new state instead of mutating this one.

use tendril_material::{strain, SpringForceModel};
use tendril_math::{Aabb, Segment, Vec2};
use tendril_types::{EdgeId, NodeId, TendrilError, TendrilResult};

/// How a node's position is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// Integrated from spring forces.
    Free,
    /// Overwritten from the external anchor every tick.
    Kinematic,
}

/// A single chain node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub position: Vec2,
    pub velocity: Vec2,
    pub role: NodeRole,
}

impl Node {
    fn at(position: Vec2, role: NodeRole) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            role,
        }
    }

    pub fn is_free(&self) -> bool {
        self.role == NodeRole::Free
    }
}

/// Node array plus per-edge rest lengths.
///
/// The last node is kinematic; all others are free.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainState {
    pub(crate) nodes: Vec<Node>,
    rest_lengths: Vec<f32>,
}

impl ChainState {
    /// Lays `node_count` nodes along the -X axis behind `anchor`,
    /// `spacing` apart, with the last node on the anchor.
    ///
    /// Rest lengths are measured from the placed positions, so they
    /// equal `spacing` up to rounding.
    pub fn construct(anchor: Vec2, node_count: usize, spacing: f32) -> TendrilResult<Self> {
        if node_count < 2 {
            return Err(TendrilError::InvalidChain(format!(
                "a chain needs at least 2 nodes, got {node_count}"
            )));
        }
        if !(spacing > 0.0 && spacing.is_finite()) {
            return Err(TendrilError::InvalidChain(format!(
                "spacing must be positive, got {spacing}"
            )));
        }

        let last = node_count - 1;
        let positions: Vec<Vec2> = (0..node_count)
            .map(|i| anchor - Vec2::new(spacing * (last - i) as f32, 0.0))
            .collect();

        Self::from_positions(&positions)
    }

    /// Builds a chain through arbitrary initial positions. The last
    /// position is the anchor.
    pub fn from_positions(positions: &[Vec2]) -> TendrilResult<Self> {
        if positions.len() < 2 {
            return Err(TendrilError::InvalidChain(format!(
                "a chain needs at least 2 nodes, got {}",
                positions.len()
            )));
        }
        if positions.iter().any(|p| !p.is_finite()) {
            return Err(TendrilError::InvalidChain(
                "initial positions must be finite".into(),
            ));
        }

        let rest_lengths: Vec<f32> = positions
            .windows(2)
            .map(|w| Segment::new(w[0], w[1]).length())
            .collect();

        if let Some(i) = rest_lengths.iter().position(|&r| r <= 0.0) {
            return Err(TendrilError::InvalidChain(format!(
                "edge {i} has zero rest length"
            )));
        }

        let last = positions.len() - 1;
        let nodes = positions
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let role = if i == last {
                    NodeRole::Kinematic
                } else {
                    NodeRole::Free
                };
                Node::at(p, role)
            })
            .collect();

        Ok(Self {
            nodes,
            rest_lengths,
        })
    }

    // ─── Topology ───

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.rest_lengths.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.rest_lengths.len() as u32).map(EdgeId)
    }

    pub fn rest_lengths(&self) -> &[f32] {
        &self.rest_lengths
    }

    pub fn rest_length(&self, edge: EdgeId) -> f32 {
        self.rest_lengths[edge.index()]
    }

    // ─── Geometry ───

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.nodes.iter().map(|n| n.position)
    }

    pub fn position(&self, id: NodeId) -> Vec2 {
        self.nodes[id.index()].position
    }

    pub fn velocity(&self, id: NodeId) -> Vec2 {
        self.nodes[id.index()].velocity
    }

    /// Position of the (last) kinematic node.
    pub fn anchor(&self) -> Vec2 {
        self.nodes[self.nodes.len() - 1].position
    }

    pub fn edge_segment(&self, edge: EdgeId) -> Segment {
        Segment::new(
            self.nodes[edge.near().index()].position,
            self.nodes[edge.far().index()].position,
        )
    }

    pub fn edge_length(&self, edge: EdgeId) -> f32 {
        self.edge_segment(edge).length()
    }

    pub fn edge_strain(&self, edge: EdgeId) -> f32 {
        strain(self.edge_length(edge), self.rest_length(edge))
    }

    /// Signed strain of the edge with the largest `|strain|`.
    pub fn peak_strain(&self) -> f32 {
        self.edges()
            .map(|e| self.edge_strain(e))
            .fold(0.0f32, |acc, s| if s.abs() > acc.abs() { s } else { acc })
    }

    pub fn max_abs_strain(&self) -> f32 {
        self.peak_strain().abs()
    }

    /// Snaps every kinematic node onto `anchor` and zeroes its velocity.
    pub fn pin_kinematic(&mut self, anchor: Vec2) {
        for node in self.nodes.iter_mut().filter(|n| !n.is_free()) {
            node.position = anchor;
            node.velocity = Vec2::ZERO;
        }
    }

    /// Returns true if every position and velocity is finite.
    pub fn is_finite(&self) -> bool {
        self.nodes
            .iter()
            .all(|n| n.position.is_finite() && n.velocity.is_finite())
    }

    // ─── Diagnostics ───

    /// Kinetic energy of the free nodes: 0.5 * m * Σ|v|².
    pub fn kinetic_energy(&self, mass: f32) -> f64 {
        self.nodes
            .iter()
            .filter(|n| n.is_free())
            .map(|n| 0.5 * mass as f64 * n.velocity.length_squared() as f64)
            .sum()
    }

    /// Elastic energy stored in all edges under `model`.
    pub fn elastic_energy(&self, model: &SpringForceModel) -> f64 {
        self.edges()
            .map(|e| {
                let rest = self.rest_length(e);
                model.evaluate(rest, self.edge_length(e)).potential(rest) as f64
            })
            .sum()
    }

    /// First node (lowest index) whose circle of `radius` touches `target`.
    pub fn first_node_hit(&self, target: &Aabb, radius: f32) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| target.intersects_circle(n.position, radius))
            .map(|i| NodeId(i as u32))
    }
}
