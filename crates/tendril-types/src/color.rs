//! Display color carried by a chain.

use serde::{Deserialize, Serialize};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    /// Default edge color for elastic chains.
    pub const SPRING: Color = Color([255, 180, 180]);

    /// Default node color.
    pub const NODE: Color = Color([220, 120, 120]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn r(self) -> u8 {
        self.0[0]
    }

    pub fn g(self) -> u8 {
        self.0[1]
    }

    pub fn b(self) -> u8 {
        self.0[2]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::SPRING
    }
}
