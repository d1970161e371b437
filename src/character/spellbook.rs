//! Per-character spell runtime state.
//!
//! Spell definitions are shared through the catalog; the only mutable piece
//! is each character's own remaining cooldown per spell, tracked here so two
//! characters never share a cooldown counter.

use serde::{Deserialize, Serialize};

use crate::catalog::SpellId;

/// One known spell and its remaining cooldown in turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellSlot {
    pub spell: SpellId,
    pub cooldown: u32,
}

/// The ordered set of spells a character knows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Spellbook {
    slots: Vec<SpellSlot>,
}

impl Spellbook {
    /// All spells start off cooldown.
    pub fn new(spells: impl IntoIterator<Item = SpellId>) -> Self {
        Self {
            slots: spells
                .into_iter()
                .map(|spell| SpellSlot { spell, cooldown: 0 })
                .collect(),
        }
    }

    pub fn slots(&self) -> &[SpellSlot] {
        &self.slots
    }

    pub fn knows(&self, id: SpellId) -> bool {
        self.slots.iter().any(|slot| slot.spell == id)
    }

    /// Remaining cooldown, or None for an unknown spell.
    pub fn cooldown(&self, id: SpellId) -> Option<u32> {
        self.slots
            .iter()
            .find(|slot| slot.spell == id)
            .map(|slot| slot.cooldown)
    }

    /// True when the spell is known and off cooldown.
    pub fn ready(&self, id: SpellId) -> bool {
        self.cooldown(id) == Some(0)
    }

    pub fn set_cooldown(&mut self, id: SpellId, turns: u32) {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.spell == id) {
            slot.cooldown = turns;
        }
    }

    /// Ticks every cooldown down one turn, flooring at zero.
    pub fn tick(&mut self) {
        for slot in &mut self.slots {
            slot.cooldown = slot.cooldown.saturating_sub(1);
        }
    }
}

/// The single active buff on a character: the deltas currently applied to
/// its stats and the turns left before they are reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActiveBuff {
    pub attack: u32,
    pub defence: u32,
    pub remaining: u32,
}

impl ActiveBuff {
    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }
}
