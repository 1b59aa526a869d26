//! Threshold checks.

use matcost_core::{Amount, MaterialName};

use crate::item::Inventory;

/// A material whose stock is at or below its reorder threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct LowStockAlert {
    pub name: MaterialName,
    pub stock: Amount,
}

impl core::fmt::Display for LowStockAlert {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Low stock alert: {} has {} units left.",
            self.name, self.stock
        )
    }
}

/// Every material with `stock <= threshold`, in inventory order.
pub fn check(inventory: &Inventory) -> Vec<LowStockAlert> {
    inventory
        .iter()
        .filter(|(_, item)| item.is_low())
        .map(|(name, item)| LowStockAlert {
            name: name.clone(),
            stock: item.stock,
        })
        .collect()
}
