#![warn(missing_docs)]
//! Authored item and recipe data: JSON schemas plus the registries that
//! resolve authored keys into the interned handles the containers use.

mod defs;
mod recipe_book;
mod registry;

pub use defs::{HeapDef, ItemTypeDef, RecipeDef};
pub use recipe_book::RecipeBook;
pub use registry::ItemTypeRegistry;

use stockpile_core::ItemKey;
use thiserror::Error;

/// Errors emitted while loading authored data.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Wraps IO errors when reading definition files.
    #[error("failed to read definitions: {0}")]
    Io(#[from] std::io::Error),
    /// Wraps serde parsing issues.
    #[error("failed to parse definitions: {0}")]
    Parse(#[from] serde_json::Error),
    /// A heap descriptor or recipe referenced a key no definition claims.
    #[error("unknown item `{0}`")]
    UnknownItem(ItemKey),
    /// Two item definitions claimed the same key.
    #[error("duplicate item definition `{0}`")]
    DuplicateItem(ItemKey),
    /// Two recipes claimed the same id.
    #[error("duplicate recipe `{0}`")]
    DuplicateRecipe(String),
}
