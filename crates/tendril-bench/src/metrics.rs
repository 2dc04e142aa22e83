//! Benchmark metrics — data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Nodes in the simulated chain.
    pub node_count: usize,
    /// Number of ticks executed.
    pub timesteps: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average integrator time per tick (seconds).
    pub avg_step_time: f64,
    pub min_step_time: f64,
    pub max_step_time: f64,
    /// Kinetic energy at the final tick.
    pub final_kinetic_energy: f64,
    /// Largest `|strain|` on any edge during the run.
    pub max_abs_strain: f32,
    /// Largest single-tick displacement of any free node.
    pub max_step_displacement: f32,
    /// Shock pulses fired (auto and manual).
    pub shocks_triggered: u32,
    /// Edge updates skipped for zero length, summed over the run.
    pub skipped_edges: u32,
}

impl BenchmarkMetrics {
    /// CSV header row.
    pub fn to_csv_header() -> String {
        "scenario,node_count,timesteps,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,final_ke,max_abs_strain,max_step_displacement,shocks_triggered,skipped_edges".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6e},{:.4},{:.4},{},{}",
            self.scenario,
            self.node_count,
            self.timesteps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.final_kinetic_energy,
            self.max_abs_strain,
            self.max_step_displacement,
            self.shocks_triggered,
            self.skipped_edges,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
