//! Stock deduction.

use matcost_core::{DomainError, DomainResult};

use crate::item::{ConsumptionRecord, Inventory};

/// Subtract each consumed quantity from the matching item's stock, in place.
///
/// Names missing from the inventory are ignored here; [`crate::estimate_cost`]
/// already reports them. Stock is not clamped and may go negative, but it must
/// stay finite: an overflowing entry fails the whole deduction and the
/// inventory must then be discarded rather than persisted.
pub fn deduct(inventory: &mut Inventory, consumption: &ConsumptionRecord) -> DomainResult<()> {
    for (name, quantity) in consumption.iter() {
        if let Some(item) = inventory.get_mut(name.as_str()) {
            item.stock = item.stock.checked_sub(quantity).map_err(|e| {
                DomainError::validation(format!("stock of {name} out of range: {e}"))
            })?;
            tracing::debug!(material = %name, %quantity, stock = %item.stock, "deducted stock");
        }
    }
    Ok(())
}
