//! # hypersphere-walk
//!
//! Estimate the volume of the unit `d`-ball by random-walk ratio telescoping.
//!
//! ## Usage
//!
//! ```text
//! hypersphere-walk                                   # d = 20, 20 trials x 10000 cycles
//! hypersphere-walk --dimension 2 --tests 1 --cycles 1000 --seed 7
//! hypersphere-walk --config run.json --parallel --json
//! ```
//!
//! The report goes to stdout; logs go to stderr (`RUST_LOG` overrides the filter).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hypersphere_walk::{run_trials, WalkConfig};

#[derive(Parser, Debug)]
#[command(name = "hypersphere-walk")]
#[command(version, about = "Hypersphere volume by random-walk ratio telescoping")]
struct Cli {
    /// JSON config file; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sphere dimension
    #[arg(short, long)]
    dimension: Option<usize>,

    /// Cube-edge step (lattice step is spacing / 10)
    #[arg(long)]
    spacing: Option<f64>,

    /// Sphere radius
    #[arg(long)]
    radius: Option<f64>,

    /// Edge of the smallest cube
    #[arg(long)]
    edge_min: Option<f64>,

    /// Number of independent trials
    #[arg(short, long)]
    tests: Option<usize>,

    /// Walk length per ratio
    #[arg(short, long)]
    cycles: Option<usize>,

    /// Base RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Cap on in-sphere sampling attempts (unbounded if omitted)
    #[arg(long)]
    max_sample_attempts: Option<u64>,

    /// Cap on zero-ratio re-runs (unbounded if omitted)
    #[arg(long)]
    max_ratio_reruns: Option<u64>,

    /// Run trials on the rayon pool
    #[arg(long)]
    parallel: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_config(self) -> Result<(WalkConfig, bool)> {
        let mut cfg = match &self.config {
            Some(path) => WalkConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => WalkConfig::default(),
        };

        if let Some(v) = self.dimension {
            cfg.dimension = v;
        }
        if let Some(v) = self.spacing {
            cfg.spacing = v;
        }
        if let Some(v) = self.radius {
            cfg.radius = v;
        }
        if let Some(v) = self.edge_min {
            cfg.edge_min = v;
        }
        if let Some(v) = self.tests {
            cfg.tests = v;
        }
        if let Some(v) = self.cycles {
            cfg.cycles = v;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if self.max_sample_attempts.is_some() {
            cfg.max_sample_attempts = self.max_sample_attempts;
        }
        if self.max_ratio_reruns.is_some() {
            cfg.max_ratio_reruns = self.max_ratio_reruns;
        }
        cfg.parallel |= self.parallel;

        cfg.validate()?;
        Ok((cfg, self.json))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hypersphere_walk=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (cfg, json) = Cli::parse().into_config()?;
    let report = run_trials(&cfg).context("estimating sphere volume")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
