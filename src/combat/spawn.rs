//! Enemy archetypes and pack spawning.

use super::types::Actor;
use crate::core::constants::{MAX_PACK_SIZE, MIN_PACK_SIZE, PLAYER_BASE_ARMOR, PLAYER_MAX_HP};
use crate::items::Item;
use rand::Rng;

/// An enemy template; HP and armor are rolled per spawn.
#[derive(Debug, Clone)]
pub struct EnemyArchetype {
    pub name: &'static str,
    pub hp_min: i32,
    pub hp_max: i32,
    pub armor_min: i32,
    pub armor_max: i32,
    pub weapon_name: &'static str,
    pub dmg_min: i32,
    pub dmg_max: i32,
}

impl EnemyArchetype {
    pub fn spawn(&self, rng: &mut impl Rng) -> Actor {
        let hp = rng.gen_range(self.hp_min..=self.hp_max);
        let armor = rng.gen_range(self.armor_min..=self.armor_max);
        let weapon = Item::weapon(self.weapon_name, self.dmg_min, self.dmg_max);
        Actor::new(self.name, hp, armor, weapon)
    }
}

pub fn archetypes() -> [EnemyArchetype; 5] {
    [
        EnemyArchetype {
            name: "Goblin",
            hp_min: 16,
            hp_max: 24,
            armor_min: 0,
            armor_max: 1,
            weapon_name: "Shiv",
            dmg_min: 1,
            dmg_max: 4,
        },
        EnemyArchetype {
            name: "Raider",
            hp_min: 22,
            hp_max: 30,
            armor_min: 0,
            armor_max: 1,
            weapon_name: "Hatchet",
            dmg_min: 2,
            dmg_max: 6,
        },
        EnemyArchetype {
            name: "Brute",
            hp_min: 32,
            hp_max: 44,
            armor_min: 1,
            armor_max: 3,
            weapon_name: "Club",
            dmg_min: 3,
            dmg_max: 7,
        },
        EnemyArchetype {
            name: "Skirmisher",
            hp_min: 18,
            hp_max: 26,
            armor_min: 0,
            armor_max: 1,
            weapon_name: "Twin Knives",
            dmg_min: 2,
            dmg_max: 5,
        },
        EnemyArchetype {
            name: "Boneguard",
            hp_min: 20,
            hp_max: 34,
            armor_min: 1,
            armor_max: 2,
            weapon_name: "Rusty Blade",
            dmg_min: 3,
            dmg_max: 6,
        },
    ]
}

/// Roll a pack of 3-5 enemies drawn at random from the archetypes.
pub fn spawn_pack(rng: &mut impl Rng) -> Vec<Actor> {
    let pool = archetypes();
    let count = rng.gen_range(MIN_PACK_SIZE..=MAX_PACK_SIZE);
    (0..count)
        .map(|_| pool[rng.gen_range(0..pool.len())].spawn(rng))
        .collect()
}

/// The fixed Goblin/Brute/Raider trio used by the prototype battle.
pub fn starter_pack() -> Vec<Actor> {
    vec![
        Actor::new("Goblin", 20, 0, Item::weapon("Shiv", 1, 4)),
        Actor::new("Brute", 35, 1, Item::weapon("Club", 3, 7)),
        Actor::new("Raider", 25, 0, Item::weapon("Hatchet", 2, 6)),
    ]
}

pub fn starter_weapon() -> Item {
    Item::weapon("Rusty Sword", 2, 6)
}

pub fn starter_player() -> Actor {
    Actor::new("Player", PLAYER_MAX_HP, PLAYER_BASE_ARMOR, starter_weapon())
}
