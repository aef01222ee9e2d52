//! Item identity and catalog lookup

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;

/// Catalog identifier for an item
pub type ItemId = i64;

/// Name returned for ids the catalog does not know
pub const UNKNOWN_ITEM: &str = "Unknown";

/// A catalog row: static reference data for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    /// Unique id, assigned at seed time
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Attack power
    pub power: i64,
}

impl ItemDescriptor {
    /// Create a new item descriptor
    pub fn new(id: ItemId, name: impl Into<String>, power: i64) -> Self {
        Self {
            id,
            name: name.into(),
            power,
        }
    }
}

impl fmt::Display for ItemDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {}, power {})", self.name, self.id, self.power)
    }
}

/// Name lookup against an item catalog.
///
/// An unknown id is not an error: implementations return [`UNKNOWN_ITEM`].
/// `Err` is reserved for the lookup itself failing.
pub trait ItemCatalog {
    /// Failure of the underlying lookup
    type Error;

    /// Resolve an item id to its display name
    fn name_of(&self, id: ItemId) -> Result<String, Self::Error>;
}

impl ItemCatalog for BTreeMap<ItemId, ItemDescriptor> {
    type Error = Infallible;

    fn name_of(&self, id: ItemId) -> Result<String, Self::Error> {
        Ok(self
            .get(&id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| UNKNOWN_ITEM.to_string()))
    }
}
