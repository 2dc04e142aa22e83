//! Scripted anchor motion for headless runs.
//!
//! In the interactive host the anchor follows player input. Headless
//! runs replace that with a closed-form path evaluated at simulation
//! time `t`, offset from a start position:
//!
//! | Path | Offset at time `t` (`s = rate * t`) |
//! |---|---|
//! | `Fixed` | `(0, 0)` |
//! | `Circle` | `radius * (cos s, sin s)` |
//! | `Figure8` | `amplitude * (sin s, 0.5 * sin 2s)` |
//! | `Lissajous` | `amplitude * (sin 3s, sin 2s)` |
//! | `Jump` | `(0, 0)` before `at_time`, `offset` from then on |

use serde::{Deserialize, Serialize};

use tendril_math::Vec2;

/// Closed-form anchor trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnchorPath {
    /// Anchor never moves.
    #[default]
    Fixed,
    /// Orbit around the start position.
    Circle { radius: f32, rate: f32 },
    /// Horizontal figure-eight.
    Figure8 { amplitude: f32, rate: f32 },
    /// 3:2 Lissajous figure.
    Lissajous { amplitude: f32, rate: f32 },
    /// Single abrupt displacement at `at_time`.
    Jump { at_time: f32, offset: Vec2 },
}

impl AnchorPath {
    /// Displacement from the start position at time `t` (seconds).
    pub fn offset(&self, t: f32) -> Vec2 {
        match *self {
            AnchorPath::Fixed => Vec2::ZERO,
            AnchorPath::Circle { radius, rate } => {
                let s = rate * t;
                Vec2::new(s.cos(), s.sin()) * radius
            }
            AnchorPath::Figure8 { amplitude, rate } => {
                let s = rate * t;
                Vec2::new(s.sin(), 0.5 * (2.0 * s).sin()) * amplitude
            }
            AnchorPath::Lissajous { amplitude, rate } => {
                let s = rate * t;
                Vec2::new((3.0 * s).sin(), (2.0 * s).sin()) * amplitude
            }
            AnchorPath::Jump { at_time, offset } => {
                if t >= at_time {
                    offset
                } else {
                    Vec2::ZERO
                }
            }
        }
    }

    /// Anchor position at time `t` for a path starting at `start`.
    pub fn position(&self, start: Vec2, t: f32) -> Vec2 {
        start + self.offset(t)
    }

    /// Every numeric parameter is finite.
    pub fn is_finite(&self) -> bool {
        match *self {
            AnchorPath::Fixed => true,
            AnchorPath::Circle { radius: a, rate }
            | AnchorPath::Figure8 { amplitude: a, rate }
            | AnchorPath::Lissajous { amplitude: a, rate } => a.is_finite() && rate.is_finite(),
            AnchorPath::Jump { at_time, offset } => at_time.is_finite() && offset.is_finite(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnchorPath::Fixed => "fixed",
            AnchorPath::Circle { .. } => "circle",
            AnchorPath::Figure8 { .. } => "figure8",
            AnchorPath::Lissajous { .. } => "lissajous",
            AnchorPath::Jump { .. } => "jump",
        }
    }
}
