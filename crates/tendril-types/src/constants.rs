//! Simulation defaults and thresholds.

/// Nominal host update rate (updates per second).
pub const NOMINAL_RATE: f32 = 60.0;

/// Default simulation timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / NOMINAL_RATE;

/// Absolute strain above which an idle shock pulse fires on its own.
pub const SHOCK_AUTO_THRESHOLD: f32 = 0.25;

/// Default number of polyline segments per sampled edge.
pub const DEFAULT_SAMPLE_SEGMENTS: usize = 80;

/// Smallest drawn edge thickness (pixels).
pub const MIN_THICKNESS: f32 = 3.0;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;
