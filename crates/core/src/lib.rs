//! `matcost-core` — domain primitives shared by the material tracking crates.
//!
//! This crate contains **pure domain** values (no IO, no console output).

pub mod amount;
pub mod error;
pub mod name;

pub use amount::Amount;
pub use error::{DomainError, DomainResult};
pub use name::MaterialName;
