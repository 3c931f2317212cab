/// Offline harness: build a synthetic field, step it, and print one JSON
/// report per step on stdout. Logs go to stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use synth_core::{run_series, SimulatorConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "synth-cli", about = "Generate seed-reproducible synthetic reservoir time series")]
struct Args {
    /// Simulator configuration JSON. Defaults to the reference scenario
    /// (well OP1 seed 1, block 6,6,6 seed 2).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of steps to run.
    #[arg(short, long, default_value_t = 10)]
    steps: usize,

    /// Normalized time advanced per step; 1.0 spans the whole envelope.
    #[arg(long, default_value_t = 0.1)]
    scale: f64,

    /// Print a single pretty-printed JSON array instead of JSON lines.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimulatorConfig::from_json_file(path)
            .with_context(|| format!("loading simulator config from {}", path.display()))?,
        None => SimulatorConfig::reference(),
    };
    info!(
        wells = config.wells.len(),
        blocks = config.blocks.len(),
        steps = args.steps,
        scale = args.scale,
        "running simulator"
    );

    let series = run_series(&config, args.steps, args.scale);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &series).context("writing reports")?;
        writeln!(out)?;
    } else {
        for report in &series {
            serde_json::to_writer(&mut out, report).context("writing report")?;
            writeln!(out)?;
        }
    }

    if let Some(last) = series.last() {
        info!(
            fopt = last.field.fopt,
            fgpt = last.field.fgpt,
            fwpt = last.field.fwpt,
            "finished"
        );
    }
    Ok(())
}
