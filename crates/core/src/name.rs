//! Material names.

use serde::{Deserialize, Serialize};

/// Name of a material, used as the key of inventories and consumption records.
///
/// Names are taken verbatim from documents: no trimming or case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialName(String);

impl MaterialName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for MaterialName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MaterialName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MaterialName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl core::borrow::Borrow<str> for MaterialName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
