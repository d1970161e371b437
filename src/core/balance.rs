//! Shared balance constants and the injectable rule set.
//!
//! All core balance numbers are defined here. The authored content went
//! through several balance passes that disagree on a few values (xp curve,
//! inventory cap), so everything is also reachable through the [`Balance`]
//! struct that the combat and progression code take by reference.

use serde::{Deserialize, Serialize};

// =============================================================================
// PROGRESSION
// =============================================================================

/// Flat part of the xp threshold for level 2 and above.
pub const XP_CURVE_BASE: u32 = 30;

/// Per-level part of the xp threshold for level 2 and above.
pub const XP_CURVE_PER_LEVEL: u32 = 10;

/// Flat part of the steep xp curve variant.
pub const STEEP_XP_CURVE_BASE: u32 = 100;

/// Per-level part of the steep xp curve variant.
pub const STEEP_XP_CURVE_PER_LEVEL: u32 = 50;

/// Attack gained on every level-up.
pub const ATTACK_PER_LEVEL: u32 = 2;

/// Defence gained on every level-up.
pub const DEFENCE_PER_LEVEL: u32 = 1;

/// Every Nth level grants bonus max health.
pub const HEALTH_BONUS_INTERVAL: u32 = 5;

/// Max health gained at every [`HEALTH_BONUS_INTERVAL`]th level.
pub const HEALTH_BONUS_AMOUNT: u32 = 20;

// =============================================================================
// COMBAT
// =============================================================================

/// Defence multiplier while the blocking flag is set.
pub const BLOCK_DEFENCE_MULTIPLIER: u32 = 2;

// =============================================================================
// INVENTORY
// =============================================================================

/// Default inventory capacity (distinct consumable names + other instances).
pub const INVENTORY_CAP: usize = 9;

/// Smaller capacity used by one balance variant.
pub const COMPACT_INVENTORY_CAP: usize = 6;

/// Experience threshold curve: level 1 requires 1 xp, level `n >= 2`
/// requires `base + n * per_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpCurve {
    pub base: u32,
    pub per_level: u32,
}

impl XpCurve {
    /// The steep curve variant (`100 + level * 50`).
    pub fn steep() -> Self {
        Self {
            base: STEEP_XP_CURVE_BASE,
            per_level: STEEP_XP_CURVE_PER_LEVEL,
        }
    }
}

impl Default for XpCurve {
    fn default() -> Self {
        Self {
            base: XP_CURVE_BASE,
            per_level: XP_CURVE_PER_LEVEL,
        }
    }
}

/// The complete tunable rule set, passed by reference into progression,
/// inventory, and combat code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub xp_curve: XpCurve,
    pub attack_per_level: u32,
    pub defence_per_level: u32,
    /// Every Nth level grants `health_bonus_amount` max health. Must be > 0.
    pub health_bonus_interval: u32,
    pub health_bonus_amount: u32,
    pub block_defence_multiplier: u32,
    pub inventory_cap: usize,
    /// When true, a single experience grant may trigger several level-ups.
    /// The shipped rules check once per grant, banking any surplus.
    pub chain_level_ups: bool,
}

impl Default for Balance {
    fn default() -> Self {
        Self {
            xp_curve: XpCurve::default(),
            attack_per_level: ATTACK_PER_LEVEL,
            defence_per_level: DEFENCE_PER_LEVEL,
            health_bonus_interval: HEALTH_BONUS_INTERVAL,
            health_bonus_amount: HEALTH_BONUS_AMOUNT,
            block_defence_multiplier: BLOCK_DEFENCE_MULTIPLIER,
            inventory_cap: INVENTORY_CAP,
            chain_level_ups: false,
        }
    }
}
