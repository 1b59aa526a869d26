use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use matcost_inventory::check;
use matcost_store::load_inventory;

use super::write_alerts;

/// Check inventory levels
#[derive(Debug, Parser)]
pub struct Check {
    /// Path to inventory JSON file
    #[arg(value_name = "INVENTORY")]
    pub inventory: PathBuf,
}

impl Check {
    pub fn execute(self, out: &mut impl Write) -> Result<()> {
        tracing::info!(inventory = %self.inventory.display(), "checking inventory levels");

        let inventory = load_inventory(&self.inventory).context("failed to load inventory")?;
        let alerts = check(&inventory);

        if alerts.is_empty() {
            writeln!(out, "All inventory levels are above thresholds.")?;
            return Ok(());
        }
        write_alerts(out, &alerts)
    }
}
