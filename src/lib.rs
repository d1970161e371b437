//! Ascent - Turn-Based RPG Simulation Core
//!
//! The character, combat, and progression model behind a single-player RPG.
//! An external presentation layer owns a [`Player`] and the current
//! [`Enemy`], drives one [`Encounter`] action per user turn, and renders
//! the structured results; this crate does no rendering, input handling,
//! or file I/O itself. Item and spell content arrives through a read-only
//! [`Catalog`] populated by an external loader.

pub mod catalog;
pub mod character;
pub mod combat;
pub mod core;

pub use catalog::{Catalog, CatalogError, ItemDef, ItemId, ItemKind, SpellDef, SpellEffect, SpellId};
pub use character::{Combatant, Enemy, EnemyTemplate, Player, StartingKit, StatBlock};
pub use combat::{CombatEvent, Encounter, Settlement, TurnOutcome, TurnReport};
pub use self::core::{Balance, XpCurve};
