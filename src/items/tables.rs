//! Loot generation: weighted rarity/base tables and affix pools.

use super::types::{Affix, Item, Rarity, Slot};
use crate::core::constants::{GEAR_DROP_CHANCE, RARITY_WEIGHTS};
use crate::core::rng::chance;
use crate::core::weighted::WeightedTable;
use rand::Rng;

/// A weapon archetype before rarity and affixes are rolled.
#[derive(Debug, Clone)]
pub struct WeaponBase {
    pub name: &'static str,
    pub min: i32,
    pub max: i32,
    pub two_handed: bool,
}

/// A gear archetype; armor is rolled uniformly in `armor_min..=armor_max`.
#[derive(Debug, Clone)]
pub struct GearBase {
    pub name: &'static str,
    pub slot: Slot,
    pub armor_min: i32,
    pub armor_max: i32,
}

/// All the roll tables a drop needs: rarity weights, base archetypes, and
/// the prefix/suffix affix pools.
#[derive(Debug, Clone, Default)]
pub struct LootTables {
    pub rarity: WeightedTable<Rarity>,
    pub weapons: WeightedTable<WeaponBase>,
    pub gear: WeightedTable<GearBase>,
    pub prefixes: Vec<Affix>,
    pub suffixes: Vec<Affix>,
    pub gear_chance: f64,
}

impl LootTables {
    /// Whether the next drop is a gear piece rather than a weapon.
    pub fn roll_is_gear(&self, rng: &mut impl Rng) -> bool {
        chance(self.gear_chance, rng)
    }

    /// Roll a complete weapon: rarity, base, then affixes per rarity.
    /// `None` if the rarity or weapon table is empty.
    pub fn roll_weapon(&self, rng: &mut impl Rng) -> Option<Item> {
        let rarity = *self.rarity.pick(rng)?;
        let base = self.weapons.pick(rng)?.clone();

        let mut item = Item::weapon(base.name, base.min, base.max);
        item.rarity = rarity;
        item.two_handed = base.two_handed;
        item.affixes = self.roll_affixes(rarity, rng);
        Some(item)
    }

    /// Roll a complete gear piece: rarity, base, armor value, then affixes.
    /// `None` if the rarity or gear table is empty.
    pub fn roll_gear(&self, rng: &mut impl Rng) -> Option<Item> {
        let rarity = *self.rarity.pick(rng)?;
        let base = self.gear.pick(rng)?.clone();

        let armor = if base.armor_min < base.armor_max {
            rng.gen_range(base.armor_min..=base.armor_max)
        } else {
            base.armor_min
        };
        let mut item = Item::gear(base.name, base.slot, armor);
        item.rarity = rarity;
        item.affixes = self.roll_affixes(rarity, rng);
        Some(item)
    }

    /// Roll the next drop, splitting between gear and weapons by
    /// `gear_chance`. Falls back to the other kind if one table is empty.
    pub fn roll_drop(&self, rng: &mut impl Rng) -> Option<Item> {
        if self.roll_is_gear(rng) {
            self.roll_gear(rng).or_else(|| self.roll_weapon(rng))
        } else {
            self.roll_weapon(rng).or_else(|| self.roll_gear(rng))
        }
    }

    /// Uniform picks from the prefix and suffix pools, counts per rarity.
    /// Duplicate picks are allowed.
    fn roll_affixes(&self, rarity: Rarity, rng: &mut impl Rng) -> Vec<Affix> {
        let (prefix_count, suffix_count) = rarity.affix_counts();
        let mut affixes = Vec::with_capacity(prefix_count + suffix_count);
        for _ in 0..prefix_count {
            if let Some(a) = pick_uniform(&self.prefixes, rng) {
                affixes.push(a.clone());
            }
        }
        for _ in 0..suffix_count {
            if let Some(a) = pick_uniform(&self.suffixes, rng) {
                affixes.push(a.clone());
            }
        }
        affixes
    }
}

fn pick_uniform<'a, T>(pool: &'a [T], rng: &mut impl Rng) -> Option<&'a T> {
    if pool.is_empty() {
        return None;
    }
    Some(&pool[rng.gen_range(0..pool.len())])
}

/// The default drop tables for the prototype.
pub fn default_tables() -> LootTables {
    let mut tables = LootTables {
        gear_chance: GEAR_DROP_CHANCE,
        ..LootTables::default()
    };

    for (rarity, weight) in Rarity::all().into_iter().zip(RARITY_WEIGHTS) {
        tables.rarity.push(rarity, weight);
    }

    let weapon_bases = [
        (WeaponBase { name: "Shortsword", min: 3, max: 7, two_handed: false }, 25.0),
        (WeaponBase { name: "Longsword", min: 5, max: 11, two_handed: false }, 25.0),
        (WeaponBase { name: "Axe", min: 6, max: 13, two_handed: false }, 20.0),
        (WeaponBase { name: "Mace", min: 7, max: 12, two_handed: false }, 15.0),
        (WeaponBase { name: "Spear", min: 4, max: 10, two_handed: false }, 15.0),
        (WeaponBase { name: "Greatsword", min: 9, max: 16, two_handed: true }, 10.0),
    ];
    for (base, weight) in weapon_bases {
        tables.weapons.push(base, weight);
    }

    let gear_bases = [
        (GearBase { name: "Wooden Shield", slot: Slot::Offhand, armor_min: 1, armor_max: 2 }, 15.0),
        (GearBase { name: "Iron Shield", slot: Slot::Offhand, armor_min: 2, armor_max: 4 }, 8.0),
        (GearBase { name: "Leather Armor", slot: Slot::Armor, armor_min: 2, armor_max: 4 }, 18.0),
        (GearBase { name: "Chain Mail", slot: Slot::Armor, armor_min: 3, armor_max: 6 }, 10.0),
        (GearBase { name: "Helm", slot: Slot::Helmet, armor_min: 1, armor_max: 3 }, 14.0),
        (GearBase { name: "Boots", slot: Slot::Boots, armor_min: 1, armor_max: 2 }, 14.0),
        (GearBase { name: "Belt", slot: Slot::Belt, armor_min: 0, armor_max: 2 }, 10.0),
        (GearBase { name: "Amulet", slot: Slot::Amulet, armor_min: 0, armor_max: 1 }, 6.0),
        (GearBase { name: "Ring", slot: Slot::Ring, armor_min: 0, armor_max: 1 }, 5.0),
    ];
    for (base, weight) in gear_bases {
        tables.gear.push(base, weight);
    }

    tables.prefixes = vec![
        Affix::new("Jagged", 1, 2, 0.0, 0.0, 0.0),
        Affix::new("Heavy", 2, 4, 0.10, 0.0, -0.05),
        Affix::new("Keen", 0, 0, 0.0, 0.05, 0.0),
        Affix::new("Swift", 0, 0, 0.0, 0.0, 0.15),
        Affix::new("Brutal", 2, 3, 0.20, 0.02, -0.05),
    ];
    tables.suffixes = vec![
        Affix::new("of Embers", 0, 0, 0.12, 0.0, 0.0),
        Affix::new("of Frost", 0, 0, 0.10, 0.02, 0.0),
        Affix::new("of Haste", 0, 0, 0.0, 0.0, 0.20),
        Affix::new("of Slaying", 1, 2, 0.08, 0.03, 0.0),
        Affix::new("of Mauling", 3, 3, 0.0, 0.0, -0.05),
    ];

    tables
}
