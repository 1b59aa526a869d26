use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use matcost_inventory::{check, deduct, estimate_cost};
use matcost_store::{load_consumption, load_inventory, save_inventory};

use super::write_alerts;

/// Estimate cost of materials used
#[derive(Debug, Parser)]
pub struct Estimate {
    /// Path to inventory JSON file
    #[arg(value_name = "INVENTORY")]
    pub inventory: PathBuf,

    /// Path to materials used JSON file
    #[arg(value_name = "MATERIALS")]
    pub materials: PathBuf,

    /// Deduct used materials from inventory and save
    #[arg(long)]
    pub update: bool,
}

impl Estimate {
    pub fn execute(self, out: &mut impl Write) -> Result<()> {
        tracing::info!(
            inventory = %self.inventory.display(),
            materials = %self.materials.display(),
            update = self.update,
            "estimating material cost"
        );

        let mut inventory = load_inventory(&self.inventory).context("failed to load inventory")?;
        let consumption =
            load_consumption(&self.materials).context("failed to load materials used")?;

        let estimate = estimate_cost(&consumption, &inventory);
        for warning in &estimate.warnings {
            writeln!(out, "{warning}")?;
        }
        writeln!(out, "Total cost: ${:.2}", estimate.total)?;

        if self.update {
            deduct(&mut inventory, &consumption).context("failed to deduct used materials")?;
            save_inventory(&inventory, &self.inventory).context("failed to save inventory")?;
        }

        write_alerts(out, &check(&inventory))
    }
}
