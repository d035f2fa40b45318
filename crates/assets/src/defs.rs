//! Deserializable definition schemas for authored data.

use crate::{AssetError, ItemTypeRegistry};
use serde::{Deserialize, Serialize};
use stockpile_core::{ItemKey, Rarity};
use stockpile_inventory::{HeapRequirement, ItemHeap};

/// Authored description of one item type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTypeDef {
    /// Stable key other data refers to this type by.
    pub key: ItemKey,
    /// Display name shown to players.
    pub name: String,
    /// Flavor/description text.
    #[serde(default)]
    pub description: String,
    /// Rarity tier, defaults to common.
    #[serde(default)]
    pub rarity: Rarity,
    /// Icon resource path, when the host renders one.
    #[serde(default)]
    pub icon: Option<String>,
}

/// Declarative heap descriptor: `quantity` items of the type named `item`.
///
/// Used by recipes and starting-inventory data; resolved against an
/// [`ItemTypeRegistry`] at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapDef {
    /// Key of the item type.
    pub item: ItemKey,
    /// Quantity of that type.
    pub quantity: u32,
}

impl HeapDef {
    /// Resolve into a runtime heap.
    pub fn to_heap(&self, registry: &ItemTypeRegistry) -> Result<ItemHeap, AssetError> {
        let type_id = registry
            .id_of(&self.item)
            .ok_or_else(|| AssetError::UnknownItem(self.item.clone()))?;
        Ok(ItemHeap::new(type_id, self.quantity))
    }

    /// Resolve into a recipe requirement line.
    pub fn to_requirement(&self, registry: &ItemTypeRegistry) -> Result<HeapRequirement, AssetError> {
        let type_id = registry
            .id_of(&self.item)
            .ok_or_else(|| AssetError::UnknownItem(self.item.clone()))?;
        Ok(HeapRequirement::new(type_id, self.quantity))
    }
}

/// Authored recipe: input and output heap descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDef {
    /// Unique recipe id (e.g. `iron_pick`).
    pub id: String,
    /// Descriptors consumed by the craft.
    pub inputs: Vec<HeapDef>,
    /// Descriptors produced by the craft.
    #[serde(default)]
    pub outputs: Vec<HeapDef>,
}
