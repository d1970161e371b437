//! Structured results the combat resolver hands back to its caller.
//!
//! The core does no rendering or text formatting; every action returns the
//! discrete facts of what happened and the presentation layer decides how
//! to show them.

use serde::{Deserialize, Serialize};

use crate::catalog::{ItemId, SpellId};

/// Why a player cast was refused. Refusals are expected outcomes, not
/// errors; nothing changes when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastRejection {
    /// The player does not know this spell.
    UnknownToCaster,
    /// The spell has not come off cooldown yet.
    OnCooldown { remaining: u32 },
    /// A buff is already active; only one may run at a time.
    BuffActive,
    /// Healing at full health does nothing.
    FullHealth,
}

/// One discrete fact about a resolved turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    PlayerAttack { damage: u32 },
    PlayerBlocking,
    PlayerCast { spell: SpellId },
    CastRejected { spell: SpellId, reason: CastRejection },
    EnemyCast { spell: SpellId },
    EnemyAttack { damage: u32 },
    EnemyDied,
    PlayerDied,
    LeveledUp { level: u32 },
    /// Fleeing a boss is not permitted.
    FleeBlocked,
    Fled,
}

/// End-of-combat bookkeeping applied after a victory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub xp: u32,
    pub coins: u32,
    /// The single rolled loot item transferred to the player, if any.
    pub loot: Option<ItemId>,
    pub leveled_up: bool,
}

/// Where the encounter stands after an action resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Combat continues; the caller may issue the next action.
    Continue,
    /// The enemy died and settlement has been applied. The caller owns the
    /// location's enemy list and drops the defeated instance.
    Victory(Settlement),
    /// The player died; it has been respawned at full health and the enemy
    /// reset. The caller shows its defeat screen.
    Defeat,
    /// The player fled; no rewards, no state reset.
    Fled,
}

/// Everything the caller needs to render one resolved player action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    pub events: Vec<CombatEvent>,
    pub outcome: TurnOutcome,
}

impl TurnReport {
    pub fn ended(&self) -> bool {
        !matches!(self.outcome, TurnOutcome::Continue)
    }
}
