//! Rarity tiers for authored item types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered rarity tiers, least to most rare.
///
/// The core containers never look at rarity; it rides along on authored
/// item definitions for hosts to display and sort by.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    /// Baseline tier, the default for unannotated definitions.
    #[default]
    Common,
    /// Slightly above baseline.
    Uncommon,
    /// Notable drops.
    Rare,
    /// Endgame-adjacent.
    Epic,
    /// Top tier.
    Legendary,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        };
        f.write_str(label)
    }
}
