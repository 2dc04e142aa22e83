//! Strongly-typed identifiers for chain elements.
//!
//! Newtype wrappers prevent accidental mixing of node indices
//! with edge indices.

use serde::{Deserialize, Serialize};

/// Index into a chain's node array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Index into a chain's edge array. Edge `i` joins nodes `i` and `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

impl NodeId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl EdgeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The node on the near (index-lower) end of this edge.
    #[inline]
    pub fn near(self) -> NodeId {
        NodeId(self.0)
    }

    /// The node on the far (anchor-side) end of this edge.
    #[inline]
    pub fn far(self) -> NodeId {
        NodeId(self.0 + 1)
    }
}

impl From<u32> for NodeId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for EdgeId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
