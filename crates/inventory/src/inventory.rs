//! Array-backed container: bare heaps, merge-only targeted adds.

use crate::ItemHeap;
use serde::{Deserialize, Serialize};
use stockpile_core::ItemTypeId;
use tracing::debug;

/// Fixed-capacity container storing bare [`ItemHeap`]s.
///
/// The plainer of the two container variants. Unlike [`ItemBag`], a
/// targeted [`add`] here succeeds only by merging into a type-matching
/// cell; it never claims an empty cell. Callers that want the empty-cell
/// fallback use the bag.
///
/// [`ItemBag`]: crate::ItemBag
/// [`add`]: Inventory::add
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    heaps: Vec<ItemHeap>,
}

impl Inventory {
    /// An inventory of `capacity` cells, all holding nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            heaps: vec![ItemHeap::NOTHING; capacity],
        }
    }

    /// Number of cells; fixed at construction.
    pub fn capacity(&self) -> usize {
        self.heaps.len()
    }

    /// Iterate the cells in index order.
    pub fn heaps(&self) -> impl Iterator<Item = &ItemHeap> {
        self.heaps.iter()
    }

    fn find_with_same_type(&self, type_id: Option<ItemTypeId>) -> Option<usize> {
        self.heaps.iter().position(|h| h.type_id() == type_id)
    }

    fn find_first_empty(&self) -> Option<usize> {
        self.heaps.iter().position(|h| h.is_empty())
    }

    /// Place a heap without naming a destination cell.
    ///
    /// Two-phase first-match search, lowest index winning both phases:
    /// merge into the first cell of the same type, else replace the first
    /// empty cell. Fails on an empty input or when neither phase finds a
    /// cell; on failure the input is untouched. On success the input is
    /// drained into the container.
    pub fn push(&mut self, heap: &mut ItemHeap) -> bool {
        if heap.is_empty() {
            return false;
        }

        // Try to merge with the heap of the same type first.
        if let Some(index) = self.find_with_same_type(heap.type_id()) {
            debug!(index, "inventory push: merging into same-type cell");
            return self.heaps[index].merge(heap);
        }

        // Otherwise claim the first empty cell.
        if let Some(index) = self.find_first_empty() {
            debug!(index, "inventory push: replacing empty cell");
            return self.heaps[index].replace_with(heap);
        }

        debug!("inventory push: no eligible cell, capacity exhausted");
        false
    }

    /// Place a heap into the cell at `index`, merge-only.
    ///
    /// Fails on an empty input or when the cell's type differs; there is no
    /// empty-cell fallback in this variant.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range; that is a caller bug with no
    /// defined recovery.
    pub fn add(&mut self, heap: &mut ItemHeap, index: usize) -> bool {
        if heap.is_empty() {
            return false;
        }

        let cell = &mut self.heaps[index];
        if cell.type_id() == heap.type_id() {
            return cell.merge(heap);
        }

        false
    }

    /// The heap at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn get(&self, index: usize) -> &ItemHeap {
        &self.heaps[index]
    }

    /// Withdraw the full contents of the cell at `index`, leaving it empty.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn pop(&mut self, index: usize) -> ItemHeap {
        self.heaps[index].withdraw_all()
    }
}
