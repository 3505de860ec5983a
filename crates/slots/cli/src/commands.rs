//! Subcommands operating on a loaded registry.

use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Args;
use slots_content::{LoadSummary, SlotRegistry};
use slots_core::SlotDefinition;

/// Load the configuration and report problems
#[derive(Args)]
pub struct Check {
    /// Treat warnings as failures
    #[arg(long)]
    strict: bool,
}

impl Check {
    pub fn execute(&self, registry: &SlotRegistry, summary: &LoadSummary) -> Result<ExitCode> {
        println!("Source: {}", registry.origin());
        println!(
            "Loaded {} slot type(s), {} rejected",
            summary.loaded, summary.failed
        );

        for warning in &summary.warnings {
            println!("warning: {warning}");
        }

        let report = registry.validate();
        println!("{report}");

        let failed = report.has_errors()
            || summary.failed > 0
            || (self.strict && (report.has_warnings() || !summary.warnings.is_empty()));

        Ok(if failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        })
    }
}

/// Print one slot type in detail
#[derive(Args)]
pub struct Show {
    /// Slot key (case-insensitive)
    key: String,
}

impl Show {
    pub fn execute(&self, registry: &SlotRegistry) -> Result<ExitCode> {
        let Some(slot) = registry.slot_configuration(&self.key) else {
            bail!("No slot type named '{}' in {}", self.key, registry.origin());
        };

        print!("{}", describe(&slot));
        Ok(ExitCode::SUCCESS)
    }
}

/// List every loaded slot type
#[derive(Args)]
pub struct List {}

impl List {
    pub fn execute(&self, registry: &SlotRegistry) -> Result<ExitCode> {
        if registry.is_empty() {
            println!("No slot types loaded from {}", registry.origin());
            return Ok(ExitCode::SUCCESS);
        }

        println!("{:<20} {:>8}  {:<24} NAME", "KEY", "CAPACITY", "ICON");
        for key in registry.keys() {
            if let Some(slot) = registry.slot_configuration(&key) {
                println!(
                    "{:<20} {:>8}  {:<24} {}",
                    key,
                    slot.capacity(),
                    slot.icon().name(),
                    slot.display_name()
                );
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}

fn describe(slot: &SlotDefinition) -> String {
    let mut out = String::new();
    out.push_str(&format!("Key:       {}\n", slot.key()));
    out.push_str(&format!("Name:      {}\n", slot.display_name()));
    out.push_str(&format!("Icon:      {}\n", slot.icon()));
    out.push_str(&format!("Capacity:  {}", slot.capacity()));
    if slot.exceeds_recommended_capacity() {
        out.push_str(" (above recommended maximum)");
    }
    out.push('\n');
    out.push_str(&format!("Model:     {}\n", slot.model()));

    if slot.description().is_empty() {
        out.push_str("Lore:      (none)\n");
    } else {
        out.push_str("Lore:\n");
        for line in slot.description() {
            out.push_str(&format!("  {line}\n"));
        }
    }
    out
}
