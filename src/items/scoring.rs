//! Combat math: expected damage per round (EDPR) and damage rolls.
//!
//! EDPR is the scalar metric every equip decision ranks by. These are pure
//! functions over an item plus the currently equipped gear bonuses.

use super::inventory::GearBonuses;
use super::types::Item;
use crate::core::constants::{
    BASE_ATTACKS_PER_ROUND, BASE_CRIT_CHANCE, CRIT_CHANCE_CAP, CRIT_MULTIPLIER,
    MIN_ATTACKS_PER_ROUND,
};
use crate::core::rng::chance;
use rand::Rng;

/// Total crit chance for a weapon under the given gear bonuses,
/// clamped to `[0, CRIT_CHANCE_CAP]`.
pub fn effective_crit_chance(weapon: &Item, bonuses: &GearBonuses) -> f64 {
    (BASE_CRIT_CHANCE + weapon.crit_chance() + bonuses.crit_chance).clamp(0.0, CRIT_CHANCE_CAP)
}

/// Attacks per round, floored at `MIN_ATTACKS_PER_ROUND`.
pub fn attacks_per_round(weapon: &Item, bonuses: &GearBonuses) -> f64 {
    (BASE_ATTACKS_PER_ROUND + weapon.attack_speed() + bonuses.attack_speed)
        .max(MIN_ATTACKS_PER_ROUND)
}

/// Expected damage of a single swing:
/// average roll, scaled by percentage damage, times the crit factor.
pub fn expected_damage_per_swing(weapon: &Item, bonuses: &GearBonuses) -> f64 {
    let avg = (weapon.min_damage() + weapon.max_damage()) as f64 / 2.0;
    let scaled = avg * (1.0 + weapon.pct_damage() + bonuses.pct_damage);
    let crit_factor = 1.0 + effective_crit_chance(weapon, bonuses) * (CRIT_MULTIPLIER - 1.0);
    scaled * crit_factor
}

/// Expected damage per round = per-swing expectation times attacks per round.
pub fn expected_dpr(weapon: &Item, bonuses: &GearBonuses) -> f64 {
    expected_damage_per_swing(weapon, bonuses) * attacks_per_round(weapon, bonuses)
}

/// Roll one swing's damage before armor: a uniform roll in the damage range,
/// scaled by percentage damage, multiplied on a crit, rounded, floored at 0.
pub fn roll_damage(weapon: &Item, bonuses: &GearBonuses, rng: &mut impl Rng) -> i32 {
    let base = rng.gen_range(weapon.min_damage()..=weapon.max_damage());
    let mut scaled = base as f64 * (1.0 + weapon.pct_damage() + bonuses.pct_damage);
    if chance(effective_crit_chance(weapon, bonuses), rng) {
        scaled *= CRIT_MULTIPLIER;
    }
    (scaled.round() as i32).max(0)
}

/// Flat armor reduction, floored at 0.
pub fn damage_after_armor(raw: i32, armor: i32) -> i32 {
    (raw - armor).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::seeded;
    use crate::items::types::Affix;

    fn plain(min: i32, max: i32) -> Item {
        Item::weapon("Test Blade", min, max)
    }

    #[test]
    fn test_expected_dpr_plain_weapon() {
        // avg 5.0, no pct, crit 5% * 0.5 extra, 1 attack/round
        let w = plain(4, 6);
        let b = GearBonuses::default();
        let expected = 5.0 * (1.0 + 0.05 * 0.5);
        assert!((expected_dpr(&w, &b) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_pct_damage_raises_dpr() {
        let mut w = plain(4, 6);
        let b = GearBonuses::default();
        let before = expected_dpr(&w, &b);
        w.affixes.push(Affix::new("of Embers", 0, 0, 0.12, 0.0, 0.0));
        assert!(expected_dpr(&w, &b) > before);
    }

    #[test]
    fn test_gear_bonuses_raise_dpr() {
        let w = plain(4, 6);
        let base = expected_dpr(&w, &GearBonuses::default());
        let boosted = GearBonuses {
            armor: 0,
            pct_damage: 0.25,
            crit_chance: 0.10,
            attack_speed: 0.30,
        };
        assert!(expected_dpr(&w, &boosted) > base);
    }

    #[test]
    fn test_crit_chance_is_capped() {
        let mut w = plain(4, 6);
        w.affixes.push(Affix::new("Lucky", 0, 0, 0.0, 2.0, 0.0));
        let c = effective_crit_chance(&w, &GearBonuses::default());
        assert!((c - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_crit_chance_never_negative() {
        let mut w = plain(4, 6);
        w.affixes.push(Affix::new("Dull", 0, 0, 0.0, -1.0, 0.0));
        assert!(effective_crit_chance(&w, &GearBonuses::default()) >= 0.0);
    }

    #[test]
    fn test_attack_speed_floor() {
        let mut w = plain(4, 6);
        w.affixes.push(Affix::new("Leaden", 0, 0, 0.0, 0.0, -5.0));
        let aps = attacks_per_round(&w, &GearBonuses::default());
        assert!((aps - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_roll_damage_within_scaled_bounds() {
        let w = plain(3, 7);
        let b = GearBonuses::default();
        let mut rng = seeded(2024);
        for _ in 0..500 {
            let dmg = roll_damage(&w, &b, &mut rng);
            // Worst case: max roll with crit = 7 * 1.5 = 10.5 -> 11
            assert!((3..=11).contains(&dmg), "roll {dmg} out of bounds");
        }
    }

    #[test]
    fn test_roll_damage_crits_show_up() {
        let mut w = plain(10, 10);
        w.affixes.push(Affix::new("Keen", 0, 0, 0.0, 0.45, 0.0));
        let b = GearBonuses::default();
        let mut rng = seeded(5);
        let crits = (0..1000)
            .filter(|_| roll_damage(&w, &b, &mut rng) == 15)
            .count();
        // 50% crit chance; expect plenty of both outcomes
        assert!(crits > 300 && crits < 700, "got {crits} crits");
    }

    #[test]
    fn test_damage_after_armor_floors_at_zero() {
        assert_eq!(damage_after_armor(5, 2), 3);
        assert_eq!(damage_after_armor(2, 5), 0);
        assert_eq!(damage_after_armor(0, 0), 0);
    }
}
