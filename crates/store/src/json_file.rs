//! JSON file persistence for inventories and consumption records.

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;

use matcost_inventory::{ConsumptionRecord, Inventory};

use crate::error::{StoreError, StoreResult};

/// Load an inventory document. Missing item fields default to zero.
pub fn load_inventory(path: impl AsRef<Path>) -> StoreResult<Inventory> {
    let inventory: Inventory = read_document(path.as_ref())?;
    tracing::debug!(path = %path.as_ref().display(), items = inventory.len(), "loaded inventory");
    Ok(inventory)
}

/// Load a consumption document (plain `name -> quantity` mapping).
pub fn load_consumption(path: impl AsRef<Path>) -> StoreResult<ConsumptionRecord> {
    let consumption: ConsumptionRecord = read_document(path.as_ref())?;
    tracing::debug!(
        path = %path.as_ref().display(),
        entries = consumption.len(),
        "loaded consumption record"
    );
    Ok(consumption)
}

/// Overwrite `path` with the inventory as pretty-printed JSON.
///
/// Not atomic: a failure mid-write can leave a truncated file.
pub fn save_inventory(inventory: &Inventory, path: impl AsRef<Path>) -> StoreResult<()> {
    let path = path.as_ref();
    let mut body = serde_json::to_string_pretty(inventory).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    body.push('\n');

    std::fs::write(path, body).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), items = inventory.len(), "saved inventory");
    Ok(())
}

fn read_document<T: DeserializeOwned>(path: &Path) -> StoreResult<T> {
    let data = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => StoreError::NotFound {
            path: path.to_path_buf(),
        },
        _ => StoreError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_str(&data).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
