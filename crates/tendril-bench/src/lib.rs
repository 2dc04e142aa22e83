//! # tendril-bench
//!
//! Headless driver and benchmark suite for tendril chains.
//!
//! Provides a [`Simulation`] driver that ticks a chain along a scripted
//! anchor path, four procedural benchmark scenarios, metric collection,
//! and CSV export for regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::{BenchmarkRunner, RunOutcome, Simulation};
pub use scenarios::{Scenario, ScenarioKind};
