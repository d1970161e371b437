//! Enemy entities and the authored templates they are rolled from.
//!
//! Templates carry inclusive stat ranges; an encounter rolls a concrete
//! Enemy from its template once, including the xp/coin/loot rewards paid
//! out if the enemy is defeated.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{ItemId, SpellId};
use crate::character::combatant::Combatant;
use crate::character::spellbook::Spellbook;
use crate::character::stats::StatBlock;

/// Inclusive roll range for one authored stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: u32,
    pub max: u32,
}

impl StatRange {
    pub fn new(min: u32, max: u32) -> Self {
        debug_assert!(min <= max, "stat range is inverted");
        Self { min, max }
    }

    /// A range that always rolls the same value.
    pub fn flat(value: u32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn roll(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// An enemy rolled for one encounter. Discarded (or reset to full health)
/// once defeated or fled from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub combatant: Combatant,
    /// Bosses cannot be fled from.
    pub boss: bool,
    pub xp_reward: u32,
    pub coin_reward: u32,
    /// At most one item, rolled at generation time.
    pub loot: Option<ItemId>,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.combatant.is_alive()
    }

    /// Restores full health so the template instance can be reused.
    pub fn reset(&mut self) {
        self.combatant.stats.health = self.combatant.stats.max_health;
    }
}

/// Authored enemy description with ranged stats and a loot table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub name: String,
    pub level: u32,
    pub xp: StatRange,
    pub health: StatRange,
    pub attack: StatRange,
    pub defence: StatRange,
    pub coins: StatRange,
    pub spells: Vec<SpellId>,
    /// Candidate drops; one is picked when the loot roll succeeds.
    pub loot: Vec<ItemId>,
    /// Drop odds as 1-in-N. Zero means no drop is ever rolled.
    pub loot_chance: u32,
    pub boss: bool,
}

impl EnemyTemplate {
    /// Rolls a concrete enemy: every stat uniform within its range, and
    /// the reward loot decided once, here.
    pub fn roll(&self, rng: &mut impl Rng) -> Enemy {
        let health = self.health.roll(rng);
        let stats = StatBlock {
            level: self.level,
            xp: 0,
            health,
            max_health: health,
            attack: self.attack.roll(rng),
            defence: self.defence.roll(rng),
            coins: 0,
        };

        Enemy {
            name: self.name.clone(),
            combatant: Combatant::new(stats, Spellbook::new(self.spells.iter().copied())),
            boss: self.boss,
            xp_reward: self.xp.roll(rng),
            coin_reward: self.coins.roll(rng),
            loot: self.roll_loot(rng),
        }
    }

    fn roll_loot(&self, rng: &mut impl Rng) -> Option<ItemId> {
        if self.loot.is_empty() || self.loot_chance == 0 {
            return None;
        }
        if rng.gen_range(1..=self.loot_chance) != 1 {
            return None;
        }
        Some(self.loot[rng.gen_range(0..self.loot.len())])
    }
}
