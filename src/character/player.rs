//! The persistent player character: class kits, equipment slots, and the
//! capacity-limited inventory.
//!
//! Inventory and equipment operations report rejection as `Ok(false)` with
//! no state change; only a genuinely unknown item id is an error.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::{Catalog, CatalogError, ItemId, ItemKind, SpellId};
use crate::character::combatant::Combatant;
use crate::character::spellbook::Spellbook;
use crate::character::stats::StatBlock;
use crate::core::balance::INVENTORY_CAP;

/// Starting stats and spells for a new player. The canonical class kits are
/// provided as constructors, but any valid combination is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartingKit {
    pub max_health: u32,
    pub attack: u32,
    pub defence: u32,
    pub spells: Vec<SpellId>,
}

impl StartingKit {
    /// Mage: low attack, a full spell repertoire.
    pub fn mage(spells: Vec<SpellId>) -> Self {
        Self {
            max_health: 20,
            attack: 6,
            defence: 5,
            spells,
        }
    }

    /// Warrior: high attack and health, healing only.
    pub fn warrior(spells: Vec<SpellId>) -> Self {
        Self {
            max_health: 30,
            attack: 10,
            defence: 5,
            spells,
        }
    }
}

/// The player character. Lives for the whole session; encounters borrow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub combatant: Combatant,
    pub weapon: Option<ItemId>,
    pub armour: Option<ItemId>,
    /// Capacity counted as distinct consumable names plus every other
    /// item instance.
    pub inventory_cap: usize,
}

impl Player {
    pub fn new(name: impl Into<String>, kit: StartingKit) -> Self {
        let stats = StatBlock::new(1, kit.max_health, kit.attack, kit.defence);
        Self {
            name: name.into(),
            combatant: Combatant::new(stats, Spellbook::new(kit.spells)),
            weapon: None,
            armour: None,
            inventory_cap: INVENTORY_CAP,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.combatant.is_alive()
    }

    /// Heals back to full after defeat. Max health is never reduced.
    pub fn respawn(&mut self) {
        self.combatant.stats.health = self.combatant.stats.max_health;
    }

    /// Inventory size under the capacity rule: duplicate consumables stack
    /// under one name, everything else counts per instance.
    pub fn inventory_size(&self, catalog: &Catalog) -> Result<usize, CatalogError> {
        let mut consumable_names = HashSet::new();
        let mut others = 0;
        for id in &self.combatant.inventory {
            let def = catalog.item(*id)?;
            if def.is_consumable() {
                consumable_names.insert(def.name.as_str());
            } else {
                others += 1;
            }
        }
        Ok(consumable_names.len() + others)
    }

    /// True once the inventory has grown past the capacity limit.
    pub fn over_capacity(&self, catalog: &Catalog) -> Result<bool, CatalogError> {
        Ok(self.inventory_size(catalog)? > self.inventory_cap)
    }

    /// Picks an item up. Rejected while the inventory is over capacity.
    pub fn take_item(&mut self, id: ItemId, catalog: &Catalog) -> Result<bool, CatalogError> {
        catalog.item(id)?;
        if self.over_capacity(catalog)? {
            return Ok(false);
        }
        self.combatant.inventory.push(id);
        Ok(true)
    }

    /// Equips a carried weapon or armour piece, applying its bonus.
    /// Rejected when the matching slot is already occupied, when the item
    /// is not carried, or for kinds that cannot be equipped.
    pub fn equip(&mut self, id: ItemId, catalog: &Catalog) -> Result<bool, CatalogError> {
        let def = catalog.item(id)?;
        if !self.carries(id) {
            return Ok(false);
        }
        match def.kind {
            ItemKind::Weapon { attack } => {
                if self.weapon.is_some() {
                    return Ok(false);
                }
                self.combatant.stats.attack += attack;
                self.weapon = Some(id);
                Ok(true)
            }
            ItemKind::Armour { defence } => {
                if self.armour.is_some() {
                    return Ok(false);
                }
                self.combatant.stats.defence += defence;
                self.armour = Some(id);
                Ok(true)
            }
            ItemKind::Consumable { .. } | ItemKind::Key => Ok(false),
        }
    }

    /// Removes an equipped item's bonus and clears its slot. Rejected when
    /// the item is not the one equipped there, or cannot be equipped at all.
    pub fn unequip(&mut self, id: ItemId, catalog: &Catalog) -> Result<bool, CatalogError> {
        let def = catalog.item(id)?;
        match def.kind {
            ItemKind::Weapon { attack } => {
                if self.weapon != Some(id) {
                    return Ok(false);
                }
                self.combatant.stats.attack -= attack;
                self.weapon = None;
                Ok(true)
            }
            ItemKind::Armour { defence } => {
                if self.armour != Some(id) {
                    return Ok(false);
                }
                self.combatant.stats.defence -= defence;
                self.armour = None;
                Ok(true)
            }
            ItemKind::Consumable { .. } | ItemKind::Key => Ok(false),
        }
    }

    /// Uses one carried consumable: its attack/defence deltas are permanent
    /// stat increments (not a buff), healing is clamped, and exactly one
    /// instance leaves the inventory.
    pub fn use_consumable(&mut self, id: ItemId, catalog: &Catalog) -> Result<bool, CatalogError> {
        let def = catalog.item(id)?;
        let ItemKind::Consumable {
            attack,
            defence,
            health,
        } = def.kind
        else {
            return Ok(false);
        };
        if !self.remove_one(id) {
            return Ok(false);
        }
        self.combatant.stats.attack += attack;
        self.combatant.stats.defence += defence;
        self.combatant.stats.heal(health);
        Ok(true)
    }

    /// Sells one carried instance for the item's resale value.
    pub fn sell_item(&mut self, id: ItemId, catalog: &Catalog) -> Result<bool, CatalogError> {
        let value = catalog.item(id)?.value;
        if !self.remove_one(id) {
            return Ok(false);
        }
        self.combatant.stats.gain_coins(value);
        Ok(true)
    }

    /// Buys an item at the given price. Rejected when coins are short or
    /// the inventory is over capacity.
    pub fn buy_item(
        &mut self,
        id: ItemId,
        price: u32,
        catalog: &Catalog,
    ) -> Result<bool, CatalogError> {
        catalog.item(id)?;
        if self.combatant.stats.coins < price || self.over_capacity(catalog)? {
            return Ok(false);
        }
        self.combatant.stats.coins -= price;
        self.combatant.inventory.push(id);
        Ok(true)
    }

    /// Drops one carried instance with no refund.
    pub fn discard_item(&mut self, id: ItemId) -> bool {
        self.remove_one(id)
    }

    pub fn carries(&self, id: ItemId) -> bool {
        self.combatant.inventory.contains(&id)
    }

    fn remove_one(&mut self, id: ItemId) -> bool {
        if let Some(index) = self.combatant.inventory.iter().position(|held| *held == id) {
            self.combatant.inventory.remove(index);
            true
        } else {
            false
        }
    }
}
