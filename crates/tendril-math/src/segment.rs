//! Line segment between two chain nodes.

use glam::Vec2;

/// A directed segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// `end - start`.
    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.delta().length()
    }

    /// Unit vector from `start` toward `end`.
    ///
    /// Returns `None` for a zero-length (or non-finite) segment, where
    /// the direction is undefined.
    pub fn direction(&self) -> Option<Vec2> {
        let delta = self.delta();
        let len = delta.length();
        if len > 0.0 && len.is_finite() {
            Some(delta / len)
        } else {
            None
        }
    }

    /// Left-hand unit normal, `(-dir.y, dir.x)`.
    pub fn normal(&self) -> Option<Vec2> {
        self.direction().map(|d| d.perp())
    }

    /// Point at parameter `u` (0 = start, 1 = end).
    #[inline]
    pub fn point_at(&self, u: f32) -> Vec2 {
        self.start.lerp(self.end, u)
    }
}
