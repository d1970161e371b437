//! Immutable item and spell definitions, keyed by id.
//!
//! The catalog is populated once by an external content loader and handed to
//! the core by reference. Characters hold ids into it plus their own mutable
//! runtime state (cooldowns); definitions themselves are never mutated.

pub mod types;

pub use types::*;

use std::collections::HashMap;

/// Lookup failure for an id the catalog does not contain.
///
/// The core never fabricates a placeholder entity for a missing id; the
/// error is returned to the caller as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no spell with id {0} in the catalog")]
    SpellNotFound(SpellId),
    #[error("no item with id {0} in the catalog")]
    ItemNotFound(ItemId),
}

/// Arena of immutable spell and item definitions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    spells: HashMap<SpellId, SpellDef>,
    items: HashMap<ItemId, ItemDef>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a spell definition. Ids must be unique.
    pub fn add_spell(&mut self, spell: SpellDef) {
        let previous = self.spells.insert(spell.id, spell);
        debug_assert!(previous.is_none(), "duplicate spell id in catalog");
    }

    /// Registers an item definition. Ids must be unique.
    pub fn add_item(&mut self, item: ItemDef) {
        let previous = self.items.insert(item.id, item);
        debug_assert!(previous.is_none(), "duplicate item id in catalog");
    }

    pub fn spell(&self, id: SpellId) -> Result<&SpellDef, CatalogError> {
        self.spells.get(&id).ok_or(CatalogError::SpellNotFound(id))
    }

    pub fn item(&self, id: ItemId) -> Result<&ItemDef, CatalogError> {
        self.items.get(&id).ok_or(CatalogError::ItemNotFound(id))
    }

    pub fn has_spell(&self, id: SpellId) -> bool {
        self.spells.contains_key(&id)
    }

    pub fn has_item(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }
}
