//! Headless driver and benchmark runner.
//!
//! [`Simulation`] stands in for the interactive host: it reads the
//! anchor from a scripted path at the start of every tick, updates the
//! chain, and forwards frames and telemetry to optional outputs.

use std::time::Instant;

use tendril_io::{SimulationInput, SimulationSummary};
use tendril_render::{GeometrySampler, RenderFrame, Renderer};
use tendril_solver::ElasticChain;
use tendril_telemetry::{EventBus, EventKind, PulseSource, SimulationEvent};
use tendril_types::{Color, TendrilResult};

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::Scenario;

/// Colors cycled through on manual pulses.
const PULSE_PALETTE: [Color; 4] = [
    Color::rgb(120, 200, 255),
    Color::rgb(255, 220, 90),
    Color::rgb(150, 255, 150),
    Color::rgb(255, 120, 220),
];

/// Ticks between energy snapshots on the bus.
const ENERGY_INTERVAL: u64 = 60;

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub summary: SimulationSummary,
    /// Integrator wall time per tick (seconds).
    pub step_times: Vec<f64>,
    /// Largest single-tick displacement of any free node.
    pub max_step_displacement: f32,
    /// Edge updates skipped for zero length, summed over the run.
    pub skipped_edges: u32,
}

/// One headless run of a chain along its scripted anchor path.
pub struct Simulation<'a> {
    input: &'a SimulationInput,
    renderer: Option<&'a mut dyn Renderer>,
    bus: Option<&'a mut EventBus>,
    sampler: GeometrySampler,
    pulses: Vec<u64>,
    frame_interval: u64,
}

impl<'a> Simulation<'a> {
    pub fn new(input: &'a SimulationInput) -> Self {
        Self {
            input,
            renderer: None,
            bus: None,
            sampler: GeometrySampler::for_config(&input.chain),
            pulses: Vec::new(),
            frame_interval: 1,
        }
    }

    /// Submits a frame to `renderer` every `interval` ticks.
    pub fn with_renderer(mut self, renderer: &'a mut dyn Renderer, interval: u64) -> Self {
        self.renderer = Some(renderer);
        self.frame_interval = interval.max(1);
        self
    }

    pub fn with_bus(mut self, bus: &'a mut EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Requests a manual pulse at the start of each listed tick.
    pub fn with_pulses(mut self, ticks: &[u64]) -> Self {
        self.pulses = ticks.to_vec();
        self
    }

    fn emit(&self, tick: u64, kind: EventKind) {
        if let Some(bus) = self.bus.as_deref() {
            bus.emit(SimulationEvent::new(tick, kind));
        }
    }

    fn flush(&mut self) {
        if let Some(bus) = self.bus.as_deref_mut() {
            bus.flush();
        }
    }

    /// Runs every tick of the input and returns the outcome.
    pub fn run(mut self) -> TendrilResult<RunOutcome> {
        let input = self.input;
        let params = &input.params;
        let dt = params.dt;
        let steps = params.timesteps();

        let mut chain = ElasticChain::new(input.chain.clone(), params.anchor_at(0.0))?;
        if let Some(renderer) = self.renderer.as_deref_mut() {
            renderer.init(&chain)?;
        }

        let mut step_times = Vec::with_capacity(steps as usize);
        let mut max_step_displacement = 0.0f32;
        let mut max_abs_strain = 0.0f32;
        let mut skipped_edges = 0u32;
        let mut shocks_triggered = 0u32;

        let total_start = Instant::now();

        for _ in 0..steps {
            let tick = chain.tick();
            self.emit(tick, EventKind::TickBegin { sim_time: chain.sim_time() });

            if self.pulses.contains(&tick) {
                let color = PULSE_PALETTE[shocks_triggered as usize % PULSE_PALETTE.len()];
                if chain.request_pulse(Some(color)) {
                    shocks_triggered += 1;
                    self.emit(tick, EventKind::ShockTriggered { source: PulseSource::Manual });
                }
            }

            let anchor = params.anchor_at(chain.sim_time() as f32);
            let report = chain.update(anchor, dt);

            step_times.push(report.step.wall_time);
            max_step_displacement = max_step_displacement.max(report.step.max_displacement);
            max_abs_strain = max_abs_strain
                .max(report.step.peak_strain.abs())
                .max(chain.state().max_abs_strain());
            skipped_edges += report.step.skipped_edges;

            if let Some(shock) = report.shock {
                if shock.expired {
                    self.emit(tick, EventKind::ShockExpired);
                }
                if shock.auto_triggered {
                    shocks_triggered += 1;
                    self.emit(tick, EventKind::ShockTriggered { source: PulseSource::Auto });
                }
            }
            self.emit(
                tick,
                EventKind::TickEnd {
                    wall_time: report.step.wall_time,
                    peak_strain: report.step.peak_strain,
                },
            );
            if chain.tick() % ENERGY_INTERVAL == 0 {
                self.emit(
                    tick,
                    EventKind::Energy {
                        kinetic: chain.kinetic_energy(),
                        elastic: chain.elastic_energy(),
                    },
                );
            }

            if chain.tick() % self.frame_interval == 0 {
                let frame = RenderFrame::capture(&chain, &self.sampler);
                if let Some(renderer) = self.renderer.as_deref_mut() {
                    renderer.submit_frame(&frame)?;
                }
            }

            self.flush();
        }

        let wall_time_seconds = total_start.elapsed().as_secs_f64();

        if let Some(renderer) = self.renderer.as_deref_mut() {
            renderer.finalize()?;
        }

        tracing::debug!(
            ticks = chain.tick(),
            shocks = shocks_triggered,
            max_abs_strain,
            "simulation finished"
        );

        Ok(RunOutcome {
            summary: SimulationSummary {
                ticks: chain.tick(),
                sim_time: chain.sim_time(),
                wall_time_seconds,
                final_kinetic_energy: chain.kinetic_energy(),
                final_elastic_energy: chain.elastic_energy(),
                max_abs_strain,
                shocks_triggered,
                final_positions: chain.node_positions(),
            },
            step_times,
            max_step_displacement,
            skipped_edges,
        })
    }
}

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario, optionally reporting to `bus`.
    pub fn run(scenario: &Scenario, bus: Option<&mut EventBus>) -> TendrilResult<BenchmarkMetrics> {
        let mut sim = Simulation::new(&scenario.input).with_pulses(&scenario.pulses);
        if let Some(bus) = bus {
            sim = sim.with_bus(bus);
        }
        let outcome = sim.run()?;

        let step_times = &outcome.step_times;
        let avg_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step = step_times.iter().copied().fold(0.0, f64::max);

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            node_count: scenario.input.chain.node_count,
            timesteps: step_times.len() as u32,
            total_wall_time: outcome.summary.wall_time_seconds,
            avg_step_time: avg_step,
            min_step_time: if step_times.is_empty() { 0.0 } else { min_step },
            max_step_time: max_step,
            final_kinetic_energy: outcome.summary.final_kinetic_energy,
            max_abs_strain: outcome.summary.max_abs_strain,
            max_step_displacement: outcome.max_step_displacement,
            shocks_triggered: outcome.summary.shocks_triggered,
            skipped_edges: outcome.skipped_edges,
        })
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> TendrilResult<Vec<BenchmarkMetrics>> {
        use crate::scenarios::ScenarioKind;
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind), None))
            .collect()
    }
}
