//! Raw numeric attributes and their invariants.
//!
//! Health never exceeds max health and floors at zero; damage and healing
//! go through the methods here so the invariants hold everywhere.

use serde::{Deserialize, Serialize};

use crate::core::balance::Balance;

/// Damage that gets through a defence value.
///
/// Fractional intermediates round up before the floor at zero is applied.
/// Authored content only produces integers, but the contract is kept for
/// fractional inputs.
pub fn realised_damage(raw_damage: f64, defence: f64) -> u32 {
    (raw_damage - defence).ceil().max(0.0) as u32
}

/// Numeric attributes owned exclusively by one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub level: u32,
    pub xp: u32,
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defence: u32,
    pub coins: u32,
}

impl StatBlock {
    /// A level-`level` block at full health with no xp or coins.
    pub fn new(level: u32, max_health: u32, attack: u32, defence: u32) -> Self {
        debug_assert!(level >= 1, "levels start at 1");
        Self {
            level,
            xp: 0,
            health: max_health,
            max_health,
            attack,
            defence,
            coins: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Defence used for damage calculation; doubled while blocking.
    pub fn effective_defence(&self, blocking: bool, balance: &Balance) -> u32 {
        if blocking {
            self.defence * balance.block_defence_multiplier
        } else {
            self.defence
        }
    }

    /// Applies raw damage against the (possibly blocking) defence and
    /// returns the damage actually dealt.
    pub fn take_damage(&mut self, raw_damage: u32, blocking: bool, balance: &Balance) -> u32 {
        let defence = self.effective_defence(blocking, balance);
        let dealt = realised_damage(raw_damage as f64, defence as f64);
        self.health = self.health.saturating_sub(dealt);
        dealt
    }

    /// Restores health up to max health; returns the amount restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }

    pub fn gain_coins(&mut self, amount: u32) {
        self.coins += amount;
    }
}
