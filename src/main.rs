//! Benchmark runner for the matrix primitives.
//!
//! Usage:
//!   matprof                                 # default Tiny/Small/Medium/Large shapes
//!   matprof --only tiny,small               # subset of shapes
//!   matprof --config shapes.toml            # shapes and bounds from a file
//!   matprof --max-iterations 100 --json out.json --markdown out.md

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use matprof::suite::report::{write_json, write_markdown};
use matprof::{BenchmarkSuite, SuiteConfig};

#[derive(Parser, Debug)]
#[command(name = "matprof", version, about = "Dense matrix operation profiler")]
struct Cli {
    /// TOML file with suite settings and shapes.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for matrix generation.
    #[arg(long)]
    seed: Option<u64>,

    /// Only run these shapes (comma-separated labels, case-insensitive).
    #[arg(long, value_delimiter = ',')]
    only: Vec<String>,

    /// Cap the iteration count of every shape.
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Directory for the temporary matrix files.
    #[arg(long)]
    temp_dir: Option<PathBuf>,

    /// Write results as JSON.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write a Markdown summary table.
    #[arg(long)]
    markdown: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("MATPROF_LOG", "warn"))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SuiteConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SuiteConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(dir) = cli.temp_dir {
        config.temp_dir = dir;
    }
    config.retain_labels(&cli.only);
    if let Some(max) = cli.max_iterations {
        config.cap_iterations(max);
    }
    config.validate().context("invalid configuration")?;

    println!("=== Matrix Operations Profiling ===\n");

    let start = Instant::now();
    let mut suite = BenchmarkSuite::new(config, io::stdout().lock());
    let reports = suite.run().context("benchmark run aborted")?;
    println!(
        "\n=== Test time taken: {:.2} seconds ===\n",
        start.elapsed().as_secs_f64()
    );

    if let Some(path) = &cli.json {
        write_json(&reports, path).with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }
    if let Some(path) = &cli.markdown {
        write_markdown(&reports, path).with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    Ok(())
}
