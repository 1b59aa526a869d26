//! Subcommand implementations.

mod check;
mod estimate;

pub use check::Check;
pub use estimate::Estimate;

use std::io::Write;

use anyhow::Result;
use matcost_inventory::LowStockAlert;

fn write_alerts(out: &mut impl Write, alerts: &[LowStockAlert]) -> Result<()> {
    for alert in alerts {
        writeln!(out, "{alert}")?;
    }
    Ok(())
}
