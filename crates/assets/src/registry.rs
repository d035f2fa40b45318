//! Item type registry: interns authored definitions into dense handles.

use crate::{AssetError, ItemTypeDef};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use stockpile_core::{ItemKey, ItemTypeId};

/// Registry of authored item types.
///
/// Definitions are interned in declaration order; the position of a
/// definition is its [`ItemTypeId`]. Identity is therefore per-registry:
/// the same key loaded into two registries yields interchangeable handles
/// only if the declaration order matches, so hosts keep one registry per
/// world.
#[derive(Debug, Clone, Default)]
pub struct ItemTypeRegistry {
    defs: Vec<ItemTypeDef>,
    by_key: HashMap<ItemKey, ItemTypeId>,
}

impl ItemTypeRegistry {
    /// Build a registry from definitions, rejecting duplicate keys.
    pub fn from_defs(defs: Vec<ItemTypeDef>) -> Result<Self, AssetError> {
        let mut registry = Self {
            by_key: HashMap::with_capacity(defs.len()),
            defs: Vec::with_capacity(defs.len()),
        };
        for def in defs {
            registry.intern(def)?;
        }
        Ok(registry)
    }

    /// Parse a JSON list of definitions.
    pub fn load_from_str(input: &str) -> Result<Self, AssetError> {
        let defs: Vec<ItemTypeDef> = serde_json::from_str(input)?;
        Self::from_defs(defs)
    }

    /// Read and parse a JSON definition file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let content = fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    fn intern(&mut self, def: ItemTypeDef) -> Result<ItemTypeId, AssetError> {
        if self.by_key.contains_key(&def.key) {
            return Err(AssetError::DuplicateItem(def.key));
        }
        let id = ItemTypeId::from_raw(self.defs.len() as u32);
        self.by_key.insert(def.key.clone(), id);
        self.defs.push(def);
        Ok(id)
    }

    /// Handle for the type with the given key.
    pub fn id_of(&self, key: &ItemKey) -> Option<ItemTypeId> {
        self.by_key.get(key).copied()
    }

    /// Definition behind a handle.
    pub fn def(&self, id: ItemTypeId) -> Option<&ItemTypeDef> {
        self.defs.get(id.raw() as usize)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether no types are registered.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterate `(handle, definition)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemTypeId, &ItemTypeDef)> {
        self.defs
            .iter()
            .enumerate()
            .map(|(i, def)| (ItemTypeId::from_raw(i as u32), def))
    }
}
