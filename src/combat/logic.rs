//! Turn resolution for one encounter.
//!
//! The encounter borrows exactly one player and one enemy for its lifetime
//! and mutates their stats, buffs, and cooldowns directly. Every
//! player-initiated action resolves the enemy's automatic response within
//! the same call; there is no separate enemy-turn input.

use crate::catalog::{Catalog, CatalogError, SpellId};
use crate::character::enemy::Enemy;
use crate::character::player::Player;
use crate::combat::types::{CastRejection, CombatEvent, Settlement, TurnOutcome, TurnReport};
use crate::core::balance::Balance;
use crate::core::progression::grant_experience;

/// One combat encounter between the player and a single enemy.
pub struct Encounter<'a> {
    player: &'a mut Player,
    enemy: &'a mut Enemy,
    catalog: &'a Catalog,
    balance: &'a Balance,
    turn: u32,
}

impl<'a> Encounter<'a> {
    pub fn new(
        player: &'a mut Player,
        enemy: &'a mut Enemy,
        catalog: &'a Catalog,
        balance: &'a Balance,
    ) -> Self {
        Self {
            player,
            enemy,
            catalog,
            balance,
            turn: 0,
        }
    }

    /// Completed turns so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn player(&self) -> &Player {
        self.player
    }

    pub fn enemy(&self) -> &Enemy {
        self.enemy
    }

    /// Basic attack: the player's attack value lands on the enemy. Enemy
    /// death is checked before the enemy gets to respond, so a lethal hit
    /// always wins the exchange for the player.
    pub fn basic_attack(&mut self) -> TurnReport {
        let mut events = Vec::new();

        let damage = self
            .enemy
            .combatant
            .take_damage(self.player.combatant.stats.attack, self.balance);
        events.push(CombatEvent::PlayerAttack { damage });

        if !self.enemy.is_alive() {
            events.push(CombatEvent::EnemyDied);
            let settlement = self.settle(&mut events);
            return TurnReport {
                events,
                outcome: TurnOutcome::Victory(settlement),
            };
        }

        let outcome = self.enemy_response(&mut events);
        TurnReport { events, outcome }
    }

    /// Block: no damage dealt; the enemy responds against doubled defence,
    /// and the flag drops again right after. Block covers exactly one
    /// incoming enemy action.
    pub fn block(&mut self) -> TurnReport {
        let mut events = Vec::new();

        self.player.combatant.toggle_block();
        events.push(CombatEvent::PlayerBlocking);

        let outcome = self.enemy_response(&mut events);
        self.player.combatant.blocking = false;

        TurnReport { events, outcome }
    }

    /// Casts one of the player's spells. A refused cast (unknown to the
    /// caster, on cooldown, buff already active, healing at full health)
    /// changes nothing — no cooldown is paid and the enemy does not get a
    /// turn. Only an id missing from the catalog is an error.
    pub fn cast_spell(&mut self, spell: SpellId) -> Result<TurnReport, CatalogError> {
        let def = self.catalog.spell(spell)?;
        let mut events = Vec::new();

        let rejection = match self.player.combatant.spellbook.cooldown(spell) {
            None => Some(CastRejection::UnknownToCaster),
            Some(remaining) if remaining > 0 => Some(CastRejection::OnCooldown { remaining }),
            Some(_) => {
                if self.player.combatant.cast_spell(def) {
                    None
                } else if def.is_buff() {
                    Some(CastRejection::BuffActive)
                } else {
                    Some(CastRejection::FullHealth)
                }
            }
        };

        if let Some(reason) = rejection {
            events.push(CombatEvent::CastRejected { spell, reason });
            return Ok(TurnReport {
                events,
                outcome: TurnOutcome::Continue,
            });
        }

        events.push(CombatEvent::PlayerCast { spell });
        self.player
            .combatant
            .spellbook
            .set_cooldown(spell, def.cooldown);

        let outcome = if self.enemy.is_alive() {
            self.enemy_response(&mut events)
        } else {
            TurnOutcome::Continue
        };
        Ok(TurnReport { events, outcome })
    }

    /// Flee: permitted against anything but a boss. Ends the encounter with
    /// no rewards and no state reset.
    pub fn flee(&mut self) -> TurnReport {
        if self.enemy.boss {
            return TurnReport {
                events: vec![CombatEvent::FleeBlocked],
                outcome: TurnOutcome::Continue,
            };
        }
        TurnReport {
            events: vec![CombatEvent::Fled],
            outcome: TurnOutcome::Fled,
        }
    }

    /// The enemy's automatic turn: every spell off cooldown is self-cast
    /// (enemies only buff and heal themselves) and put on cooldown whether
    /// or not the cast took effect, then the enemy attack lands. Cooldowns
    /// and buffs tick only on turns the player survives.
    fn enemy_response(&mut self, events: &mut Vec<CombatEvent>) -> TurnOutcome {
        let ready: Vec<SpellId> = self
            .enemy
            .combatant
            .spellbook
            .slots()
            .iter()
            .filter(|slot| slot.cooldown == 0)
            .map(|slot| slot.spell)
            .collect();

        for spell in ready {
            match self.catalog.spell(spell) {
                Ok(def) => {
                    self.enemy.combatant.cast_spell(def);
                    self.enemy.combatant.spellbook.set_cooldown(spell, def.cooldown);
                    events.push(CombatEvent::EnemyCast { spell });
                }
                Err(_) => {
                    debug_assert!(false, "enemy knows a spell missing from the catalog");
                }
            }
        }

        let damage = self
            .player
            .combatant
            .take_damage(self.enemy.combatant.stats.attack, self.balance);
        events.push(CombatEvent::EnemyAttack { damage });

        if !self.player.is_alive() {
            events.push(CombatEvent::PlayerDied);
            self.player.respawn();
            self.enemy.reset();
            return TurnOutcome::Defeat;
        }

        self.advance_turn();
        TurnOutcome::Continue
    }

    fn advance_turn(&mut self) {
        self.player.combatant.advance_turn();
        self.enemy.combatant.advance_turn();
        self.turn += 1;
    }

    /// Victory bookkeeping: coins and experience are granted, the enemy is
    /// reset to full health for template reuse, and the rolled loot item
    /// (if any) moves to the player. Experience and loot are independent;
    /// the reward transfer ignores the inventory capacity limit.
    fn settle(&mut self, events: &mut Vec<CombatEvent>) -> Settlement {
        let coins = self.enemy.coin_reward;
        let xp = self.enemy.xp_reward;

        self.player.combatant.stats.gain_coins(coins);
        let leveled_up = grant_experience(&mut self.player.combatant.stats, xp, self.balance);
        if leveled_up {
            events.push(CombatEvent::LeveledUp {
                level: self.player.combatant.stats.level,
            });
        }

        self.enemy.reset();

        let loot = self.enemy.loot.take();
        if let Some(item) = loot {
            self.player.combatant.inventory.push(item);
        }

        Settlement {
            xp,
            coins,
            loot,
            leveled_up,
        }
    }
}
