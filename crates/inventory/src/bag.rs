//! Slot-backed container with the empty-cell fallback on targeted adds.

use crate::{ItemHeap, Slot};
use serde::{Deserialize, Serialize};
use stockpile_core::ItemTypeId;
use tracing::debug;

/// Fixed-capacity container of [`Slot`]s.
///
/// Same auto-placement policy as [`Inventory`], but a targeted [`add`] that
/// misses on type falls back to replacing the slot when it is empty. The
/// two behaviors are kept as distinct variants on purpose; callers rely on
/// the difference.
///
/// [`Inventory`]: crate::Inventory
/// [`add`]: ItemBag::add
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemBag {
    slots: Vec<Slot>,
}

impl ItemBag {
    /// A bag of `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Slot::new(); capacity],
        }
    }

    /// Number of slots; fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterate the slots in index order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    fn find_slot_with_type_of(&self, type_id: Option<ItemTypeId>) -> Option<usize> {
        self.slots.iter().position(|s| s.type_id() == type_id)
    }

    fn find_first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_empty())
    }

    /// Place a heap without naming a destination slot.
    ///
    /// First-match, lowest index wins: merge into the first slot of the
    /// same type; if that misses (or the merge is refused), replace the
    /// first empty slot. Fails on an empty input or when no slot is
    /// eligible, leaving the input untouched.
    pub fn push(&mut self, heap: &mut ItemHeap) -> bool {
        if heap.is_empty() {
            return false;
        }

        if let Some(index) = self.find_slot_with_type_of(heap.type_id()) {
            if self.slots[index].merge(heap) {
                debug!(index, "bag push: merged into same-type slot");
                return true;
            }
        }

        if let Some(index) = self.find_first_empty_slot() {
            debug!(index, "bag push: replaced empty slot");
            return self.slots[index].replace_with(heap);
        }

        debug!("bag push: no eligible slot, capacity exhausted");
        false
    }

    /// Place a heap into the slot at `index`.
    ///
    /// Merges on a type match; otherwise, replaces the slot when it is
    /// empty. Fails on an empty input, or on a type mismatch against an
    /// occupied slot.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range; that is a caller bug with no
    /// defined recovery.
    pub fn add(&mut self, heap: &mut ItemHeap, index: usize) -> bool {
        if heap.is_empty() {
            return false;
        }

        let slot = &mut self.slots[index];
        if slot.type_id() == heap.type_id() {
            return slot.merge(heap);
        }
        if slot.is_empty() {
            return slot.replace_with(heap);
        }

        false
    }

    /// The slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn get(&self, index: usize) -> &Slot {
        &self.slots[index]
    }

    /// Mutable access to the slot at `index`, for slice operations.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn get_mut(&mut self, index: usize) -> &mut Slot {
        &mut self.slots[index]
    }

    /// Empty the slot at `index`, returning its full former contents.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn pop(&mut self, index: usize) -> ItemHeap {
        self.slots[index].slice_all()
    }

    /// Whether `predicate` holds for the heap of EVERY slot.
    ///
    /// A universal quantifier, not an "any slot matches" query; an empty
    /// bag trivially satisfies any predicate. Recipe matching is built on
    /// this contract.
    pub fn has<P>(&self, predicate: P) -> bool
    where
        P: Fn(&ItemHeap) -> bool,
    {
        self.slots.iter().all(|slot| predicate(slot.heap()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tid(raw: u32) -> ItemTypeId {
        ItemTypeId::from_raw(raw)
    }

    #[test]
    fn push_merges_then_replaces() {
        let mut bag = ItemBag::new(2);
        let mut a = ItemHeap::new(tid(1), 2);
        assert!(bag.push(&mut a));
        assert_eq!(bag.get(0).quantity(), 2);

        let mut b = ItemHeap::new(tid(1), 3);
        assert!(bag.push(&mut b));
        assert_eq!(bag.get(0).quantity(), 5);
        assert!(bag.get(1).is_empty());

        let mut c = ItemHeap::new(tid(2), 1);
        assert!(bag.push(&mut c));
        assert_eq!(bag.get(1).type_id(), Some(tid(2)));
    }

    #[test]
    fn push_fails_when_exhausted() {
        let mut bag = ItemBag::new(1);
        let mut a = ItemHeap::new(tid(1), 1);
        assert!(bag.push(&mut a));

        let mut b = ItemHeap::new(tid(2), 7);
        assert!(!bag.push(&mut b));
        assert_eq!(b.quantity(), 7);
    }

    #[test]
    fn add_falls_back_to_replacing_an_empty_slot() {
        let mut bag = ItemBag::new(2);
        let mut a = ItemHeap::new(tid(1), 4);
        // Slot 1 is untyped and empty; the bag variant accepts this.
        assert!(bag.add(&mut a, 1));
        assert_eq!(bag.get(1).quantity(), 4);
        assert!(bag.get(0).is_empty());
    }

    #[test]
    fn add_rejects_mismatch_against_occupied_slot() {
        let mut bag = ItemBag::new(1);
        let mut a = ItemHeap::new(tid(1), 4);
        assert!(bag.add(&mut a, 0));

        let mut b = ItemHeap::new(tid(2), 2);
        assert!(!bag.add(&mut b, 0));
        assert_eq!(b.quantity(), 2);
        assert_eq!(bag.get(0).type_id(), Some(tid(1)));
    }

    #[test]
    fn add_merges_on_type_match() {
        let mut bag = ItemBag::new(1);
        let mut a = ItemHeap::new(tid(1), 4);
        assert!(bag.add(&mut a, 0));
        let mut b = ItemHeap::new(tid(1), 6);
        assert!(bag.add(&mut b, 0));
        assert_eq!(bag.get(0).quantity(), 10);
    }

    #[test]
    fn pop_slices_the_whole_slot() {
        let mut bag = ItemBag::new(1);
        let mut a = ItemHeap::new(tid(3), 9);
        assert!(bag.push(&mut a));

        let popped = bag.pop(0);
        assert_eq!(popped.quantity(), 9);
        assert!(bag.get(0).is_empty());
        // Slice keeps the slot typed.
        assert_eq!(bag.get(0).type_id(), Some(tid(3)));
    }

    #[test]
    fn has_quantifies_over_every_slot() {
        let mut bag = ItemBag::new(2);
        let mut a = ItemHeap::new(tid(1), 5);
        assert!(bag.push(&mut a));

        // One occupied, one untyped slot: a predicate keyed to type 1
        // fails on the untyped slot.
        assert!(!bag.has(|h| h.type_id() == Some(tid(1))));
        // A predicate every slot satisfies passes.
        assert!(bag.has(|h| h.quantity() <= 5));
        // The empty bag satisfies anything vacuously.
        let empty = ItemBag::new(0);
        assert!(empty.has(|_| false));
    }

    #[test]
    #[should_panic]
    fn pop_out_of_range_panics() {
        let mut bag = ItemBag::new(1);
        bag.pop(3);
    }
}
