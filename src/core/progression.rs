//! Experience accrual and level-up stat growth.

use crate::character::stats::StatBlock;
use crate::core::balance::{Balance, XpCurve};

/// Experience needed to leave the given level. Level 1 takes a single
/// point; from level 2 on the threshold grows linearly with the curve.
pub fn xp_required(level: u32, curve: &XpCurve) -> u32 {
    let required = if level <= 1 {
        1
    } else {
        curve.base + level * curve.per_level
    };
    debug_assert!(required > 0, "xp threshold must be positive");
    required
}

/// Adds experience and applies any level-up it pays for. Returns true when
/// at least one level was gained.
///
/// By default only one threshold check runs per grant, so surplus
/// experience stays banked until the next grant; `Balance::chain_level_ups`
/// turns the check into a loop.
pub fn grant_experience(stats: &mut StatBlock, amount: u32, balance: &Balance) -> bool {
    stats.xp += amount;
    let mut leveled = false;
    while stats.xp >= xp_required(stats.level, &balance.xp_curve) {
        level_up(stats, balance);
        leveled = true;
        if !balance.chain_level_ups {
            break;
        }
    }
    leveled
}

/// One level gained: the old level's threshold is paid from banked xp,
/// attack and defence grow, and every Nth level adds max health. Current
/// health is left alone so the growth never substitutes for healing.
pub fn level_up(stats: &mut StatBlock, balance: &Balance) {
    debug_assert!(balance.health_bonus_interval > 0, "bonus interval must be positive");
    stats.xp = stats
        .xp
        .saturating_sub(xp_required(stats.level, &balance.xp_curve));
    stats.level += 1;
    stats.attack += balance.attack_per_level;
    stats.defence += balance.defence_per_level;
    if stats.level % balance.health_bonus_interval == 0 {
        stats.max_health += balance.health_bonus_amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_at_level(level: u32) -> StatBlock {
        let mut stats = StatBlock::new(1, 20, 10, 5);
        stats.level = level;
        stats
    }

    #[test]
    fn test_level_one_requires_single_point() {
        assert_eq!(xp_required(1, &XpCurve::default()), 1);
    }

    #[test]
    fn test_default_curve_values() {
        let curve = XpCurve::default();
        assert_eq!(xp_required(2, &curve), 50);
        assert_eq!(xp_required(3, &curve), 60);
        assert_eq!(xp_required(10, &curve), 130);
    }

    #[test]
    fn test_steep_curve_values() {
        let curve = XpCurve::steep();
        assert_eq!(xp_required(2, &curve), 200);
        assert_eq!(xp_required(3, &curve), 250);
    }

    #[test]
    fn test_threshold_is_strictly_increasing() {
        let curve = XpCurve::default();
        for level in 1..100 {
            assert!(xp_required(level + 1, &curve) > xp_required(level, &curve));
        }
    }

    #[test]
    fn test_grant_below_threshold_banks_xp() {
        let balance = Balance::default();
        let mut stats = stats_at_level(2);

        assert!(!grant_experience(&mut stats, 49, &balance));
        assert_eq!(stats.level, 2);
        assert_eq!(stats.xp, 49);
    }

    #[test]
    fn test_grant_at_threshold_levels_up() {
        let balance = Balance::default();
        let mut stats = stats_at_level(2);

        assert!(grant_experience(&mut stats, 50, &balance));
        assert_eq!(stats.level, 3);
        assert_eq!(stats.xp, 0);
        assert_eq!(stats.attack, 12);
        assert_eq!(stats.defence, 6);
    }

    #[test]
    fn test_grant_never_decreases_level() {
        let balance = Balance::default();
        let mut stats = stats_at_level(4);
        grant_experience(&mut stats, 0, &balance);
        assert_eq!(stats.level, 4);
    }

    #[test]
    fn test_single_level_per_grant_by_default() {
        let balance = Balance::default();
        let mut stats = stats_at_level(2);

        // Enough xp for two levels, but only one is applied; the surplus
        // stays banked and pays out on the next grant.
        assert!(grant_experience(&mut stats, 120, &balance));
        assert_eq!(stats.level, 3);
        assert_eq!(stats.xp, 70);

        assert!(grant_experience(&mut stats, 0, &balance));
        assert_eq!(stats.level, 4);
    }

    #[test]
    fn test_chained_level_ups_when_enabled() {
        let balance = Balance {
            chain_level_ups: true,
            ..Balance::default()
        };
        let mut stats = stats_at_level(2);

        assert!(grant_experience(&mut stats, 120, &balance));
        assert_eq!(stats.level, 4);
        assert_eq!(stats.xp, 10);
    }

    #[test]
    fn test_every_fifth_level_adds_max_health_only() {
        let balance = Balance::default();
        let mut stats = stats_at_level(4);
        stats.health = 12;
        stats.xp = xp_required(4, &balance.xp_curve);

        assert!(grant_experience(&mut stats, 0, &balance));
        assert_eq!(stats.level, 5);
        assert_eq!(stats.max_health, 40);
        // Current health is not retroactively raised.
        assert_eq!(stats.health, 12);
    }

    #[test]
    fn test_ordinary_level_leaves_max_health_alone() {
        let balance = Balance::default();
        let mut stats = stats_at_level(2);
        stats.xp = xp_required(2, &balance.xp_curve);

        assert!(grant_experience(&mut stats, 0, &balance));
        assert_eq!(stats.level, 3);
        assert_eq!(stats.max_health, 20);
    }
}
