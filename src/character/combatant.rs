//! Runtime combat state shared by players and enemies.

use serde::{Deserialize, Serialize};

use crate::catalog::{ItemId, SpellDef, SpellEffect};
use crate::character::spellbook::{ActiveBuff, Spellbook};
use crate::character::stats::StatBlock;
use crate::core::balance::Balance;

/// The mutable state every fighting character carries: stats, known spells
/// with their cooldowns, carried items, the blocking flag, and at most one
/// active buff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub stats: StatBlock,
    pub spellbook: Spellbook,
    pub inventory: Vec<ItemId>,
    pub blocking: bool,
    pub buff: ActiveBuff,
}

impl Combatant {
    pub fn new(stats: StatBlock, spellbook: Spellbook) -> Self {
        Self {
            stats,
            spellbook,
            inventory: Vec::new(),
            blocking: false,
            buff: ActiveBuff::default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    /// Applies raw damage through the blocking flag; returns damage dealt.
    pub fn take_damage(&mut self, raw_damage: u32, balance: &Balance) -> u32 {
        self.stats.take_damage(raw_damage, self.blocking, balance)
    }

    /// Flips the blocking flag. Block lasts until explicitly toggled off.
    pub fn toggle_block(&mut self) {
        self.blocking = !self.blocking;
    }

    /// Applies a spell to this character. Returns false when the cast is
    /// rejected (buff already active, or healing at full health) with no
    /// state change. Cooldown bookkeeping is the caller's: the resolver
    /// decides when a successful cast goes on cooldown.
    pub fn cast_spell(&mut self, spell: &SpellDef) -> bool {
        match spell.effect {
            SpellEffect::Buff {
                attack,
                defence,
                duration,
            } => {
                if self.buff.is_active() {
                    return false;
                }
                if attack > 0 {
                    self.stats.attack += attack;
                    self.buff.attack = attack;
                    self.buff.remaining = duration;
                }
                if defence > 0 {
                    self.stats.defence += defence;
                    self.buff.defence = defence;
                    self.buff.remaining = duration;
                }
                true
            }
            SpellEffect::Heal { amount } => {
                if self.stats.health == self.stats.max_health {
                    return false;
                }
                self.stats.heal(amount);
                true
            }
        }
    }

    /// Removes the recorded buff deltas, restoring the pre-buff stats.
    pub fn revert_buff(&mut self) {
        debug_assert!(
            self.stats.attack >= self.buff.attack && self.stats.defence >= self.buff.defence,
            "buff deltas exceed current stats"
        );
        self.stats.attack -= self.buff.attack;
        self.stats.defence -= self.buff.defence;
        self.buff.attack = 0;
        self.buff.defence = 0;
    }

    /// One combat turn's worth of bookkeeping: every cooldown ticks down,
    /// and an active buff loses a turn, reverting when it runs out.
    pub fn advance_turn(&mut self) {
        self.spellbook.tick();
        if self.buff.remaining > 0 {
            self.buff.remaining -= 1;
            if self.buff.remaining == 0 {
                self.revert_buff();
            }
        }
    }
}
