//! Slot configuration inspection tool.
//!
//! Loads a slot configuration file the same way a host would and reports
//! what it produced. Run with: `slots <command>`

mod commands;
mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use slots_content::{FileSource, MaterialLoader, SlotRegistry};
use slots_core::{MaterialCatalog, MaterialTable};

use commands::{Check, List, Show};
use config::CliConfig;

/// Inspect and validate slot type configuration
#[derive(Parser)]
#[command(name = "slots")]
#[command(about = "Inspect and validate slot type configuration", long_about = None)]
#[command(version)]
struct Cli {
    /// Slot configuration file [env: SLOTS_CONFIG]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// RON material catalog; the built-in catalog is used when omitted [env: SLOTS_MATERIALS]
    #[arg(long, global = true)]
    materials: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Load the configuration and report problems
    Check(Check),

    /// Print one slot type in detail
    Show(Show),

    /// List every loaded slot type
    List(List),
}

fn main() -> Result<ExitCode> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env().with_overrides(cli.config, cli.materials);

    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let catalog = load_catalog(&config)?;
    let mut registry = SlotRegistry::new(FileSource::new(&config.config_path), catalog);
    let summary = registry
        .load()
        .with_context(|| format!("Failed to load {}", config.config_path.display()))?;

    match cli.command {
        Command::Check(cmd) => cmd.execute(&registry, &summary),
        Command::Show(cmd) => cmd.execute(&registry),
        Command::List(cmd) => cmd.execute(&registry),
    }
}

fn load_catalog(config: &CliConfig) -> Result<Arc<dyn MaterialCatalog>> {
    match &config.materials_path {
        Some(path) => {
            let table = MaterialLoader::load(path)?;
            tracing::info!(
                materials = table.len(),
                "Loaded material catalog: {}",
                path.display()
            );
            Ok(Arc::new(table))
        }
        None => Ok(Arc::new(MaterialTable::with_defaults())),
    }
}
