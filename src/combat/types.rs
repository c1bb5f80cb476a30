use crate::items::{Item, Rarity};
use serde::{Deserialize, Serialize};

/// A combatant: the player or one enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub max_hp: i32,
    pub hp: i32,
    /// Flat damage reduction per hit.
    pub armor: i32,
    pub weapon: Item,
}

impl Actor {
    pub fn new(name: &str, max_hp: i32, armor: i32, weapon: Item) -> Self {
        Self {
            name: name.to_string(),
            max_hp,
            hp: max_hp,
            armor,
            weapon,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Apply post-armor damage. HP may go negative; displays clamp at 0.
    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    /// HP clamped at 0 for display and event payloads.
    pub fn hp_display(&self) -> i32 {
        self.hp.max(0)
    }
}

/// What happened during a combat round. Front-ends render these; the
/// simulator aggregates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    PlayerHit {
        target: String,
        damage: i32,
        target_hp: i32,
        target_max_hp: i32,
    },
    /// Extra swing from an off-hand weapon.
    OffHandHit {
        target: String,
        damage: i32,
        target_hp: i32,
        target_max_hp: i32,
    },
    EnemySlain {
        name: String,
    },
    LootDropped {
        label: String,
        rarity: Rarity,
    },
    /// A dropped weapon beat the current main hand's EDPR and was equipped.
    AutoEquipped {
        label: String,
        new_dpr: f64,
        old_dpr: f64,
    },
    EnemyHit {
        attacker: String,
        damage: i32,
        player_hp: i32,
        player_max_hp: i32,
    },
    PlayerDied,
    Victory,
}

/// Summary of a finished encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterOutcome {
    pub victory: bool,
    pub rounds: u32,
    pub player_hp: i32,
    pub drops: u32,
}
