//! Inventory store access.
//!
//! Inventories and consumption records are persisted as JSON documents on
//! disk. Each invocation loads them fresh and (for update flows) writes the
//! inventory back by overwriting the whole file. There is no locking: two
//! concurrent writers race and the last one wins.

pub mod error;
pub mod json_file;

pub use error::{StoreError, StoreResult};
pub use json_file::{load_consumption, load_inventory, save_inventory};
