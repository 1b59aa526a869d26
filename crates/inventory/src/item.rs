use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use matcost_core::{Amount, MaterialName};

/// One material held in inventory.
///
/// Missing `cost`, `stock` or `threshold` fields resolve to zero when the
/// document is parsed, so downstream logic never has to branch on presence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Unit price.
    #[serde(default)]
    pub cost: Amount,
    /// Quantity on hand. May go negative after a deduction.
    #[serde(default)]
    pub stock: Amount,
    /// Reorder trigger: the item is low when `stock <= threshold`.
    #[serde(default)]
    pub threshold: Amount,
}

impl InventoryItem {
    pub fn new(cost: Amount, stock: Amount, threshold: Amount) -> Self {
        Self {
            cost,
            stock,
            threshold,
        }
    }

    pub fn is_low(&self) -> bool {
        self.stock <= self.threshold
    }
}

/// Materials keyed by name, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory(IndexMap<MaterialName, InventoryItem>);

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an item. A new name is appended at the end.
    pub fn insert(&mut self, name: impl Into<MaterialName>, item: InventoryItem) {
        self.0.insert(name.into(), item);
    }

    pub fn get(&self, name: &str) -> Option<&InventoryItem> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut InventoryItem> {
        self.0.get_mut(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MaterialName, &InventoryItem)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<MaterialName>> FromIterator<(N, InventoryItem)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (N, InventoryItem)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(n, i)| (n.into(), i)).collect())
    }
}

/// Quantities consumed by a job, keyed by material name, in document order.
///
/// Unlike inventory items there is no defaulting: every entry must carry a
/// number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsumptionRecord(IndexMap<MaterialName, Amount>);

impl ConsumptionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<MaterialName>, quantity: Amount) {
        self.0.insert(name.into(), quantity);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MaterialName, Amount)> {
        self.0.iter().map(|(n, q)| (n, *q))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<MaterialName>> FromIterator<(N, Amount)> for ConsumptionRecord {
    fn from_iter<I: IntoIterator<Item = (N, Amount)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(n, q)| (n.into(), q)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_zero() {
        let inv: Inventory =
            serde_json::from_str(r#"{"glue": {"cost": 1.5}, "nails": {}}"#).unwrap();

        let glue = inv.get("glue").unwrap();
        assert_eq!(glue.cost.value(), 1.5);
        assert_eq!(glue.stock, Amount::ZERO);
        assert_eq!(glue.threshold, Amount::ZERO);
        assert_eq!(*inv.get("nails").unwrap(), InventoryItem::default());
    }

    #[test]
    fn inventory_keeps_document_order() {
        let inv: Inventory = serde_json::from_str(
            r#"{"zinc": {"stock": 1}, "alder": {"stock": 2}, "maple": {"stock": 3}}"#,
        )
        .unwrap();

        let names: Vec<&str> = inv.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["zinc", "alder", "maple"]);
    }

    #[test]
    fn consumption_requires_numbers() {
        let ok: ConsumptionRecord = serde_json::from_str(r#"{"wood": 40, "glue": 0.5}"#).unwrap();
        assert_eq!(ok.len(), 2);

        assert!(serde_json::from_str::<ConsumptionRecord>(r#"{"wood": "forty"}"#).is_err());
        assert!(serde_json::from_str::<ConsumptionRecord>(r#"{"wood": null}"#).is_err());
    }

    #[test]
    fn item_with_wrong_field_type_is_rejected() {
        assert!(serde_json::from_str::<Inventory>(r#"{"wood": {"cost": "cheap"}}"#).is_err());
        assert!(serde_json::from_str::<Inventory>(r#"["wood"]"#).is_err());
    }

    #[test]
    fn stock_at_threshold_is_low() {
        let at = InventoryItem::new(Amount::from(1), Amount::from(5), Amount::from(5));
        let above = InventoryItem::new(Amount::from(1), Amount::from(6), Amount::from(5));
        assert!(at.is_low());
        assert!(!above.is_low());
    }
}
