//! Inventory domain module.
//!
//! This crate contains the material tracking rules (cost estimation, stock
//! deduction, threshold checks), implemented purely as deterministic domain
//! logic (no IO, no console output).

pub mod check;
pub mod deduct;
pub mod estimate;
pub mod item;

pub use check::{LowStockAlert, check};
pub use deduct::deduct;
pub use estimate::{CostEstimate, UnknownMaterial, estimate_cost};
pub use item::{ConsumptionRecord, Inventory, InventoryItem};
