//! Item heaps - a quantity of a single item type.

use serde::{Deserialize, Serialize};
use stockpile_core::ItemTypeId;

/// A quantity of one item type.
///
/// The sentinel "nothing" heap carries no type at all and is what freshly
/// constructed container cells hold. An emptied real-typed heap is *empty*
/// (quantity 0) but not nothing: it remembers its type, which is what lets
/// a drained cell keep accepting the same item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HeapRepr")]
pub struct ItemHeap {
    type_id: Option<ItemTypeId>,
    quantity: u32,
}

/// Raw wire form of a heap; deserialization goes through [`TryFrom`] so an
/// untyped heap with a nonzero quantity (a state no constructor permits)
/// is rejected instead of smuggled in.
#[derive(Deserialize)]
struct HeapRepr {
    type_id: Option<ItemTypeId>,
    quantity: u32,
}

impl TryFrom<HeapRepr> for ItemHeap {
    type Error = String;

    fn try_from(repr: HeapRepr) -> Result<Self, Self::Error> {
        if repr.type_id.is_none() && repr.quantity > 0 {
            return Err(format!(
                "untyped heap cannot hold a nonzero quantity (got {})",
                repr.quantity
            ));
        }
        Ok(Self {
            type_id: repr.type_id,
            quantity: repr.quantity,
        })
    }
}

impl ItemHeap {
    /// The untyped, empty sentinel heap.
    pub const NOTHING: Self = Self {
        type_id: None,
        quantity: 0,
    };

    /// The untyped, empty sentinel heap.
    pub fn nothing() -> Self {
        Self::NOTHING
    }

    /// A heap of `quantity` items of the given type.
    pub fn new(type_id: ItemTypeId, quantity: u32) -> Self {
        Self {
            type_id: Some(type_id),
            quantity,
        }
    }

    /// Type of this heap, `None` for the nothing sentinel.
    pub fn type_id(&self) -> Option<ItemTypeId> {
        self.type_id
    }

    /// Number of items in this heap.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// A heap is empty when it holds zero items. Nothing is always empty;
    /// the converse does not hold.
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    /// Whether this is the untyped sentinel.
    pub fn is_nothing(&self) -> bool {
        self.type_id.is_none()
    }

    /// Merge `other` into this heap.
    ///
    /// Succeeds only on a strict type match; the nothing sentinel never
    /// matches anything, itself included. On success `other` is drained to
    /// quantity 0 (keeping its type) and its former quantity is added here.
    /// A merge whose combined quantity would not fit in a `u32` is refused
    /// like any other failure, both operands untouched.
    pub fn merge(&mut self, other: &mut ItemHeap) -> bool {
        if self.is_nothing() || other.is_nothing() {
            return false;
        }
        if self.type_id != other.type_id {
            return false;
        }
        let total = match self.quantity.checked_add(other.quantity) {
            Some(total) => total,
            None => return false,
        };
        other.withdraw_all();
        self.quantity = total;
        true
    }

    /// Adopt `other`'s type and quantity, draining `other`.
    ///
    /// Succeeds only when this heap is empty, whatever its current type.
    /// Merging and replacing are mutually exclusive placement strategies:
    /// merge accumulates into a matching type, replace claims unused space.
    pub fn replace_with(&mut self, other: &mut ItemHeap) -> bool {
        if !self.is_empty() {
            return false;
        }
        *self = other.withdraw_all();
        true
    }

    /// Remove up to `amount` items, returning them as a new heap.
    ///
    /// Over-asking clamps to what is available rather than failing; callers
    /// that need an exact amount must check the returned quantity (or use
    /// [`Slot::try_slice`](crate::Slot::try_slice), which is strict).
    pub fn withdraw(&mut self, amount: u32) -> ItemHeap {
        let taken = amount.min(self.quantity);
        self.quantity -= taken;
        ItemHeap {
            type_id: self.type_id,
            quantity: taken,
        }
    }

    /// Remove everything, leaving this heap empty but still typed.
    pub fn withdraw_all(&mut self) -> ItemHeap {
        self.withdraw(self.quantity)
    }
}

impl Default for ItemHeap {
    fn default() -> Self {
        Self::NOTHING
    }
}
