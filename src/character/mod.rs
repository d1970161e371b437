//! Character entities: stats, spell state, player, and enemies.

pub mod combatant;
pub mod enemy;
pub mod player;
pub mod spellbook;
pub mod stats;

pub use combatant::*;
pub use enemy::*;
pub use player::*;
pub use spellbook::*;
pub use stats::*;
