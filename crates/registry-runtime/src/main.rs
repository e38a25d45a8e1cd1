//! # Registry Runtime
//!
//! Command-line host for the asset registry. Each invocation opens the
//! world state, runs one operation and exits.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use registry_runtime::{execute, Command, RegistryContainer, RuntimeConfig};

/// Real-estate asset registry over a local world state file
#[derive(Parser, Debug)]
#[command(name = "registry-runtime")]
#[command(about = "Run one asset registry operation against the world state")]
struct Args {
    /// World state file (overrides REGISTRY_DATA_FILE)
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Seed the catalog when the world state is empty (overrides REGISTRY_SEED_IF_EMPTY)
    #[arg(long)]
    seed_if_empty: bool,

    #[command(subcommand)]
    command: Command,
}

/// Load configuration: defaults, then environment, then flags.
fn load_config(args: &Args) -> RuntimeConfig {
    let mut config = RuntimeConfig::from_env();

    if let Some(path) = &args.data_file {
        config.data_file = path.clone();
    }
    if args.seed_if_empty {
        config.seed_if_empty = true;
    }

    config
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args);

    // Logs go to stderr so command output stays on stdout.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("[registry] World state: {}", config.data_file.display());

    let mut container = RegistryContainer::open(config)?;
    let output = execute(&mut container.registry, args.command).context("Registry operation failed")?;

    let text = output.to_string();
    if !text.is_empty() {
        println!("{text}");
    }

    Ok(())
}
