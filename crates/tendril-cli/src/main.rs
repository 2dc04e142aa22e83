//! Tendril CLI — headless chain runs, benchmarking, and validation.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tendril")]
#[command(version, about = "Tendril — elastic node-chain simulation core")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` wins when set.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a chain along its scripted anchor path.
    Simulate {
        /// Path to a run file (TOML).
        #[arg(short, long, conflicts_with = "preset")]
        config: Option<String>,

        /// Built-in chain preset (pinned_segment, sine_segment, snake).
        #[arg(short, long)]
        preset: Option<String>,

        /// Write every sampled frame to this JSON file.
        #[arg(short, long)]
        export: Option<String>,

        /// Ticks between exported frames.
        #[arg(long, default_value_t = 1)]
        frame_interval: u64,

        /// Request a manual shock pulse at these ticks.
        #[arg(long, value_delimiter = ',')]
        pulse: Vec<u64>,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (pinned_segment, sine_segment, snake, anchor_jump, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,

        /// Material preset to use in place of each scenario's own.
        #[arg(short, long)]
        material: Option<String>,
    },

    /// Validate a run file.
    Validate {
        /// Path to run file (TOML).
        path: String,
    },

    /// List built-in material presets.
    Materials,
}

/// Routes `tracing` events (forwarded as `log` records) to stderr.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Simulate {
            config,
            preset,
            export,
            frame_interval,
            pulse,
        } => commands::simulate(commands::SimulateArgs {
            config: config.as_deref(),
            preset: preset.as_deref(),
            export: export.as_deref(),
            frame_interval,
            pulses: &pulse,
            verbose: cli.verbose > 0,
        }),
        Commands::Benchmark {
            scenario,
            output,
            material,
        } => commands::benchmark(&scenario, output.as_deref(), material.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Materials => commands::materials(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
