use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a spell definition in the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SpellId(pub u32);

impl fmt::Display for SpellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an item definition in the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a spell does when cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpellEffect {
    /// Temporary, reversible stat bonuses. Both deltas share the duration.
    Buff {
        attack: u32,
        defence: u32,
        duration: u32,
    },
    /// Restores health, clamped to max health.
    Heal { amount: u32 },
}

/// Immutable spell definition, shared by reference from the catalog.
/// Per-character runtime state (the remaining cooldown) lives in each
/// character's spellbook, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellDef {
    pub id: SpellId,
    pub name: String,
    pub description: String,
    /// Turns the spell stays on cooldown after a cast.
    pub cooldown: u32,
    pub effect: SpellEffect,
}

impl SpellDef {
    pub fn is_buff(&self) -> bool {
        matches!(self.effect, SpellEffect::Buff { .. })
    }

    pub fn is_heal(&self) -> bool {
        matches!(self.effect, SpellEffect::Heal { .. })
    }
}

/// The role an item plays, with its stat payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon {
        attack: u32,
    },
    Armour {
        defence: u32,
    },
    /// One-shot permanent stat increments, removed from inventory on use.
    Consumable {
        attack: u32,
        defence: u32,
        health: u32,
    },
    /// Combat-inert. Locations reference the key item id that unlocks them.
    Key,
}

impl ItemKind {
    /// Returns the display name for this item role.
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Weapon { .. } => "weapon",
            ItemKind::Armour { .. } => "armour",
            ItemKind::Consumable { .. } => "consumable",
            ItemKind::Key => "key",
        }
    }
}

/// Immutable item definition, shared by reference from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Coins credited when the item is sold.
    pub value: u32,
    pub kind: ItemKind,
}

impl ItemDef {
    pub fn is_consumable(&self) -> bool {
        matches!(self.kind, ItemKind::Consumable { .. })
    }
}
