#![warn(missing_docs)]
//! Identity primitives shared across the workspace.

pub mod key;
pub mod rarity;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use key::{ItemKey, ItemKeyError, DEFAULT_NAMESPACE};
pub use rarity::Rarity;

/// Interned handle for an item type.
///
/// Handles are minted by the item-type registry in declaration order and are
/// the only notion of item identity the containers understand: two
/// separately-authored types with identical display names still compare
/// unequal because they hold distinct handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemTypeId(u32);

impl ItemTypeId {
    /// Build a handle from its raw index. Intended for registries; handles
    /// forged outside a registry will not resolve to a definition.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw index backing this handle.
    pub fn raw(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_compare_by_index() {
        assert_eq!(ItemTypeId::from_raw(3), ItemTypeId::from_raw(3));
        assert_ne!(ItemTypeId::from_raw(3), ItemTypeId::from_raw(4));
    }
}
