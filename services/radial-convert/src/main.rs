//! Radial file converter.
//!
//! Converts HF-radar radial files (CODAR and WERA LLUV) into
//! coordinate-indexed datasets and prints one JSON summary line per file.

mod inputs;
mod report;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use radial_ingest::{IngestConfig, Ingester};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use inputs::collect_inputs;
use report::convert_all;

#[derive(Parser, Debug)]
#[command(name = "radial-convert")]
#[command(about = "Convert HF-radar radial files into coordinate-indexed datasets")]
struct Args {
    /// Radial files or directories to convert
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Configuration file path (YAML); environment variables otherwise
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Name of the time variable
    #[arg(long, env = "RADIAL_TIME_VAR")]
    time_var: Option<String>,

    /// CF units of the time variable
    #[arg(long, env = "RADIAL_CF_TIME_UNITS")]
    cf_time_units: Option<String>,

    /// Keep header attributes as strings
    #[arg(long)]
    raw_metadata: bool,

    /// Number of worker threads (default: one per core)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(&args)?;
    info!(
        time_variable = %config.time_variable,
        cf_time_units = %config.cf_time_units,
        numeric_metadata = config.numeric_metadata,
        "Loaded configuration"
    );

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("configuring worker threads")?;
    }

    let files = collect_inputs(&args.inputs)?;
    info!(files = files.len(), "Converting radial files");

    let ingester = Ingester::new(config);
    let reports = convert_all(&ingester, &files);

    let failed = reports.iter().filter(|r| r.is_failure()).count();
    for report in &reports {
        println!("{}", serde_json::to_string(report)?);
    }

    info!(
        converted = reports.len() - failed,
        failed,
        "Conversion finished"
    );

    if failed > 0 {
        bail!("{} of {} files failed to convert", failed, reports.len());
    }
    Ok(())
}

/// YAML file or environment, then command line overrides.
fn load_config(args: &Args) -> Result<IngestConfig> {
    let mut config = match &args.config {
        Some(path) => IngestConfig::from_yaml(path)?,
        None => IngestConfig::from_env(),
    };

    if let Some(time_var) = &args.time_var {
        config.time_variable = time_var.clone();
    }
    if let Some(units) = &args.cf_time_units {
        config.cf_time_units = units.clone();
    }
    if args.raw_metadata {
        config.numeric_metadata = false;
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;
    Ok(config)
}
