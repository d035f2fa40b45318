//! Craftability queries against an [`ItemBag`].

use crate::ItemBag;
use serde::{Deserialize, Serialize};
use stockpile_core::ItemTypeId;
use tracing::trace;

/// One resolved requirement line of a recipe: at least `quantity` items of
/// `type_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapRequirement {
    /// Required item type.
    pub type_id: ItemTypeId,
    /// Minimum quantity of that type.
    pub quantity: u32,
}

impl HeapRequirement {
    /// Build a requirement line.
    pub fn new(type_id: ItemTypeId, quantity: u32) -> Self {
        Self { type_id, quantity }
    }
}

/// A resolved recipe: inputs the host consumes, outputs it produces.
///
/// Only the craftability check lives here; consumption and production are
/// the host's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    inputs: Vec<HeapRequirement>,
    outputs: Vec<HeapRequirement>,
}

impl Recipe {
    /// Build a recipe from resolved requirement lines.
    pub fn new(inputs: Vec<HeapRequirement>, outputs: Vec<HeapRequirement>) -> Self {
        Self { inputs, outputs }
    }

    /// Input requirement lines, in declaration order.
    pub fn inputs(&self) -> &[HeapRequirement] {
        &self.inputs
    }

    /// Output lines, in declaration order.
    pub fn outputs(&self) -> &[HeapRequirement] {
        &self.outputs
    }

    /// Whether `bag` satisfies every input requirement.
    ///
    /// Each input is checked with [`ItemBag::has`], whose universal
    /// contract means the per-slot predicate must hold for every slot in
    /// the bag. A consequence: any occupied slot of an unrelated type
    /// defeats the check, so in practice a bag only crafts when all of its
    /// occupied slots match the requirement being tested. See the open
    /// question in DESIGN.md before relying on this for gameplay.
    pub fn can_craft_of(&self, bag: &ItemBag) -> bool {
        let ok = self.inputs.iter().all(|req| {
            bag.has(|heap| heap.type_id() == Some(req.type_id) && heap.quantity() >= req.quantity)
        });
        trace!(craftable = ok, inputs = self.inputs.len(), "recipe check");
        ok
    }
}
