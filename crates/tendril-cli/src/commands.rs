//! CLI command implementations.

use tendril_bench::metrics::BenchmarkMetrics;
use tendril_bench::runner::{BenchmarkRunner, Simulation};
use tendril_bench::scenarios::{Scenario, ScenarioKind};
use tendril_io::{validate_input, SimulationInput};
use tendril_material::MaterialDatabase;
use tendril_render::JsonFrameExporter;
use tendril_telemetry::{EventBus, TracingSink};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Options for `tendril simulate`.
pub struct SimulateArgs<'a> {
    pub config: Option<&'a str>,
    pub preset: Option<&'a str>,
    pub export: Option<&'a str>,
    pub frame_interval: u64,
    pub pulses: &'a [u64],
    /// Forward telemetry events to the log.
    pub verbose: bool,
}

fn unknown_preset(name: &str) -> String {
    format!("Unknown preset: '{name}'. Available: pinned_segment, sine_segment, snake")
}

/// Run a chain from a run file or preset.
pub fn simulate(args: SimulateArgs<'_>) -> CliResult {
    let input = match (args.config, args.preset) {
        (Some(path), _) => SimulationInput::load(path)?,
        (None, Some(name)) => SimulationInput::preset(name).ok_or_else(|| unknown_preset(name))?,
        (None, None) => SimulationInput::default(),
    };
    validate_input(&input)?;

    println!("Tendril Simulation");
    println!("──────────────────");
    println!(
        "Chain:     {} nodes, spacing {}, {:?} rendering",
        input.chain.node_count, input.chain.spacing, input.chain.render_mode
    );
    println!("Material:  {}", input.chain.material.name);
    println!("Anchor:    {} path", input.params.anchor_path.name());
    println!(
        "Ticks:     {} (dt = {:.5}s)",
        input.params.timesteps(),
        input.params.dt
    );
    println!();

    let mut bus = EventBus::new();
    bus.set_enabled(args.verbose);
    bus.add_sink(Box::new(TracingSink::default()));

    let mut exporter = args.export.map(JsonFrameExporter::new);
    let mut sim = Simulation::new(&input)
        .with_pulses(args.pulses)
        .with_bus(&mut bus);
    if let Some(exporter) = exporter.as_mut() {
        sim = sim.with_renderer(exporter, args.frame_interval);
    }
    let outcome = sim.run()?;
    bus.finalize();

    let summary = &outcome.summary;
    println!("  Sim time:      {:.3}s", summary.sim_time);
    println!("  Wall time:     {:.3}s", summary.wall_time_seconds);
    println!("  Final KE:      {:.6e}", summary.final_kinetic_energy);
    println!("  Final elastic: {:.6e}", summary.final_elastic_energy);
    println!("  Max |strain|:  {:.4}", summary.max_abs_strain);
    println!("  Shocks:        {}", summary.shocks_triggered);
    println!();
    println!("{}", serde_json::to_string_pretty(summary)?);

    if let Some(path) = args.export {
        println!("Frames written to: {path}");
    }
    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    output_path: Option<&str>,
    material_name: Option<&str>,
) -> CliResult {
    println!("Tendril Benchmark Suite");
    println!("═══════════════════════");
    println!();

    let material = if let Some(name) = material_name {
        let db = MaterialDatabase::with_defaults();
        let material = db.get(name).ok_or_else(|| {
            format!(
                "Unknown material: '{name}'. Available: {}",
                db.names().join(", ")
            )
        })?;
        println!("Material: {name}");
        println!();
        Some(material.clone())
    } else {
        None
    };

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        let kind = ScenarioKind::all()
            .iter()
            .copied()
            .find(|k| k.name() == scenario_name)
            .ok_or_else(|| {
                format!(
                    "Unknown scenario: '{scenario_name}'. Available: pinned_segment, sine_segment, snake, anchor_jump, all"
                )
            })?;
        vec![kind]
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let mut scenario = Scenario::from_kind(kind);
        if let Some(ref material) = material {
            scenario.input.chain.material = material.clone();
        }

        println!(
            "Running: {} ({} nodes, {} steps)",
            kind.name(),
            scenario.input.chain.node_count,
            scenario.timesteps(),
        );

        let metrics = BenchmarkRunner::run(&scenario, None)
            .map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.4}ms", metrics.avg_step_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max |strain|:  {:.4}", metrics.max_abs_strain);
        println!("  Max step disp: {:.4}", metrics.max_step_displacement);
        println!("  Shocks:        {}", metrics.shocks_triggered);
        println!();

        all_metrics.push(metrics);
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}

/// Validate a run file.
pub fn validate(path: &str) -> CliResult {
    println!("Tendril Validator");
    println!("─────────────────");
    println!();

    let input = SimulationInput::load(path)?;
    match validate_input(&input) {
        Ok(()) => {
            println!(
                "✅ Run file is valid ({} nodes, {} ticks).",
                input.chain.node_count,
                input.params.timesteps()
            );
            Ok(())
        }
        Err(e) => {
            println!("❌ Validation failed: {e}");
            Err(e.into())
        }
    }
}

/// List built-in material presets.
pub fn materials() -> CliResult {
    let db = MaterialDatabase::with_defaults();
    println!("{:<16} {:>9} {:>8} {:>8} {:>6}", "name", "stiffness", "poisson", "damping", "mass");
    for name in db.names() {
        if let Some(m) = db.get(name) {
            println!(
                "{:<16} {:>9.2} {:>8.2} {:>8.2} {:>6.2}",
                m.name, m.base_stiffness, m.poisson_ratio, m.damping, m.mass
            );
        }
    }
    Ok(())
}
