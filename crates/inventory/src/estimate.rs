//! Cost estimation over a consumption record.

use matcost_core::MaterialName;

use crate::item::{ConsumptionRecord, Inventory};

/// A consumption entry naming a material the inventory does not hold.
///
/// Recoverable: the entry contributes nothing to the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMaterial {
    pub name: MaterialName,
}

impl core::fmt::Display for UnknownMaterial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Warning: {} not found in inventory", self.name)
    }
}

/// Result of [`estimate_cost`]: the total plus one warning per unknown entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CostEstimate {
    pub total: f64,
    pub warnings: Vec<UnknownMaterial>,
}

/// Sum `quantity * cost` over every consumed material known to the inventory.
///
/// Entries are visited in consumption order; unknown names are skipped and
/// reported in `warnings` in that same order.
pub fn estimate_cost(consumption: &ConsumptionRecord, inventory: &Inventory) -> CostEstimate {
    let mut total = 0.0;
    let mut warnings = Vec::new();

    for (name, quantity) in consumption.iter() {
        match inventory.get(name.as_str()) {
            Some(item) => total += quantity * item.cost,
            None => {
                tracing::debug!(material = %name, "material not found in inventory");
                warnings.push(UnknownMaterial { name: name.clone() });
            }
        }
    }

    CostEstimate { total, warnings }
}
