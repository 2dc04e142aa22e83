//! # tendril-telemetry
//!
//! Event bus for chain telemetry. Emits structured events (tick timing,
//! shock lifecycle, energy) that are consumed by pluggable sinks
//! (tracing output, in-memory logs for tests and benchmarks).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, PulseSource, SimulationEvent};
pub use sinks::{EventLog, EventSink, TracingSink, VecSink};
