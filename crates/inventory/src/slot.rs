//! A single storage cell of an [`ItemBag`](crate::ItemBag).

use crate::ItemHeap;
use serde::{Deserialize, Serialize};
use stockpile_core::ItemTypeId;

/// One cell of a bag, wrapping exactly one heap.
///
/// Slots are created holding the nothing sentinel and live as long as their
/// position in the bag; all mutation happens in place through merge,
/// replace, and slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    heap: ItemHeap,
}

impl Slot {
    /// An empty, untyped slot.
    pub fn new() -> Self {
        Self {
            heap: ItemHeap::NOTHING,
        }
    }

    /// Type currently held, `None` for an untyped slot.
    pub fn type_id(&self) -> Option<ItemTypeId> {
        self.heap.type_id()
    }

    /// Quantity currently held.
    pub fn quantity(&self) -> u32 {
        self.heap.quantity()
    }

    /// Whether the slot holds zero items.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The heap behind this slot, for read-only inspection.
    pub fn heap(&self) -> &ItemHeap {
        &self.heap
    }

    /// Merge `heap` into this slot's heap.
    ///
    /// Stricter than [`ItemHeap::merge`]: an empty or nothing input heap is
    /// rejected outright, even when its type would match.
    pub fn merge(&mut self, heap: &mut ItemHeap) -> bool {
        if heap.is_empty() || heap.is_nothing() {
            return false;
        }
        self.heap.merge(heap)
    }

    /// Replace this slot's contents with `heap`, draining it.
    ///
    /// Succeeds only when the slot is empty.
    pub fn replace_with(&mut self, heap: &mut ItemHeap) -> bool {
        self.heap.replace_with(heap)
    }

    /// Split off exactly `amount` items as a new heap.
    ///
    /// All-or-nothing: returns `None` and leaves the slot untouched when
    /// `amount` exceeds what is held. This is the strict counterpart of the
    /// clamping [`ItemHeap::withdraw`].
    pub fn try_slice(&mut self, amount: u32) -> Option<ItemHeap> {
        if amount > self.quantity() {
            return None;
        }
        Some(self.heap.withdraw(amount))
    }

    /// Empty the slot, returning its full former contents.
    ///
    /// The slot retains its type at quantity 0, same as a drained heap; it
    /// does not revert to the untyped state it was constructed with.
    pub fn slice_all(&mut self) -> ItemHeap {
        self.heap.withdraw_all()
    }
}
