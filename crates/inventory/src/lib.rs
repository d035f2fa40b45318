//! Fixed-capacity item storage and the crafting query built on it.
//!
//! The atomic value is an [`ItemHeap`]: a quantity of one item type. Heaps
//! live in fixed-capacity containers, of which there are two variants with
//! deliberately different `add` semantics: the bare [`Inventory`] and the
//! slot-wrapped [`ItemBag`]. [`Recipe`] asks an [`ItemBag`] whether its
//! inputs are present.

mod bag;
mod heap;
mod inventory;
mod recipe;
mod slot;

pub use bag::ItemBag;
pub use heap::ItemHeap;
pub use inventory::Inventory;
pub use recipe::{HeapRequirement, Recipe};
pub use slot::Slot;
