//! The round-based encounter loop.
//!
//! Each round is: player turn (main-hand swings, optional off-hand swing,
//! kill/drop/auto-equip handling), then every alive enemy swings back.
//! Logic emits `CombatEvent`s instead of printing; front-ends and the
//! simulator consume them.

use super::spawn::{starter_pack, starter_player, starter_weapon};
use super::types::{Actor, CombatEvent, EncounterOutcome};
use crate::items::{
    attacks_per_round, damage_after_armor, expected_dpr, roll_damage, GearBonuses, Inventory,
    LootTables,
};
use rand::Rng;

/// Whole swings per round from a fractional attacks-per-round value,
/// never below one.
pub fn swings_per_round(aps: f64) -> u32 {
    (aps.round() as i64).max(1) as u32
}

#[derive(Debug, Clone)]
pub struct Encounter {
    pub player: Actor,
    pub enemies: Vec<Actor>,
    pub inventory: Inventory,
    pub tables: LootTables,
    /// Equip weapon drops automatically when they beat the main hand's EDPR.
    pub auto_equip: bool,
    /// Preferred target; falls back to the first alive enemy.
    pub target: Option<usize>,
    round: u32,
}

impl Encounter {
    pub fn new(player: Actor, enemies: Vec<Actor>, inventory: Inventory, tables: LootTables) -> Self {
        let mut enc = Self {
            player,
            enemies,
            inventory,
            tables,
            auto_equip: true,
            target: None,
            round: 0,
        };
        enc.sync_player_weapon();
        enc
    }

    /// The prototype setup: starter player wielding the Rusty Sword against
    /// the fixed Goblin/Brute/Raider trio.
    pub fn starter(tables: LootTables) -> Self {
        let mut inventory = Inventory::new();
        if let Some(idx) = inventory.add_weapon(starter_weapon()) {
            inventory.equip(idx);
        }
        Self::new(starter_player(), starter_pack(), inventory, tables)
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn any_enemies_alive(&self) -> bool {
        self.enemies.iter().any(|e| e.is_alive())
    }

    pub fn is_over(&self) -> bool {
        !self.player.is_alive() || !self.any_enemies_alive()
    }

    /// Select a preferred enemy index. False if out of bounds.
    pub fn set_target(&mut self, idx: usize) -> bool {
        if idx >= self.enemies.len() {
            return false;
        }
        self.target = Some(idx);
        true
    }

    pub fn toggle_auto_equip(&mut self) -> bool {
        self.auto_equip = !self.auto_equip;
        self.auto_equip
    }

    /// Heal the player and face a new pack; inventory and equipment persist.
    pub fn reset_battle(&mut self, enemies: Vec<Actor>) {
        self.player.hp = self.player.max_hp;
        self.enemies = enemies;
        self.target = None;
        self.round = 0;
        self.sync_player_weapon();
    }

    /// Run one full round. No-op when the encounter is already over.
    pub fn run_round(&mut self, rng: &mut impl Rng) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if self.is_over() {
            return events;
        }
        self.round += 1;
        self.player_turn(rng, &mut events);
        self.enemy_turn(rng, &mut events);

        if !self.player.is_alive() {
            events.push(CombatEvent::PlayerDied);
        } else if !self.any_enemies_alive() {
            events.push(CombatEvent::Victory);
        }
        events
    }

    /// Run rounds until the encounter ends or `max_rounds` is hit.
    pub fn run(&mut self, rng: &mut impl Rng, max_rounds: u32) -> EncounterOutcome {
        let mut drops = 0;
        while !self.is_over() && self.round < max_rounds {
            let events = self.run_round(rng);
            drops += events
                .iter()
                .filter(|e| matches!(e, CombatEvent::LootDropped { .. }))
                .count() as u32;
        }
        EncounterOutcome {
            victory: self.player.is_alive() && !self.any_enemies_alive(),
            rounds: self.round,
            player_hp: self.player.hp_display(),
            drops,
        }
    }

    fn player_turn(&mut self, rng: &mut impl Rng, events: &mut Vec<CombatEvent>) {
        let Some(main_hand) = self.inventory.main_hand().cloned() else {
            return;
        };
        let Some(target_idx) = self.resolve_target() else {
            return;
        };
        let bonuses = self.inventory.bonuses();

        let swings = swings_per_round(attacks_per_round(&main_hand, &bonuses));
        for _ in 0..swings {
            if !self.enemies[target_idx].is_alive() {
                break;
            }
            let raw = roll_damage(&main_hand, &bonuses, rng);
            let damage = damage_after_armor(raw, self.enemies[target_idx].armor);
            let target = &mut self.enemies[target_idx];
            target.take_damage(damage);
            events.push(CombatEvent::PlayerHit {
                target: target.name.clone(),
                damage,
                target_hp: target.hp_display(),
                target_max_hp: target.max_hp,
            });
        }

        // Off-hand weapon gets one extra swing
        if self.enemies[target_idx].is_alive() {
            if let Some(off_hand) = self.inventory.off_hand_weapon().cloned() {
                let raw = roll_damage(&off_hand, &bonuses, rng);
                let damage = damage_after_armor(raw, self.enemies[target_idx].armor);
                let target = &mut self.enemies[target_idx];
                target.take_damage(damage);
                events.push(CombatEvent::OffHandHit {
                    target: target.name.clone(),
                    damage,
                    target_hp: target.hp_display(),
                    target_max_hp: target.max_hp,
                });
            }
        }

        if !self.enemies[target_idx].is_alive() {
            events.push(CombatEvent::EnemySlain {
                name: self.enemies[target_idx].name.clone(),
            });
            self.handle_drop(&main_hand, &bonuses, rng, events);
        }
    }

    fn handle_drop(
        &mut self,
        main_hand: &crate::items::Item,
        bonuses: &GearBonuses,
        rng: &mut impl Rng,
        events: &mut Vec<CombatEvent>,
    ) {
        let Some(drop) = self.tables.roll_drop(rng) else {
            return;
        };
        events.push(CombatEvent::LootDropped {
            label: drop.label(),
            rarity: drop.rarity,
        });

        if drop.is_weapon() {
            let Some(idx) = self.inventory.add_weapon(drop) else {
                return;
            };
            if self.auto_equip {
                let old_dpr = expected_dpr(main_hand, bonuses);
                if self.inventory.auto_equip_if_better(idx) {
                    self.sync_player_weapon();
                    let label = self
                        .inventory
                        .main_hand()
                        .map(|w| w.label())
                        .unwrap_or_default();
                    let new_dpr = self
                        .inventory
                        .main_hand()
                        .map(|w| expected_dpr(w, &self.inventory.bonuses()))
                        .unwrap_or(0.0);
                    events.push(CombatEvent::AutoEquipped {
                        label,
                        new_dpr,
                        old_dpr,
                    });
                }
            }
        } else {
            self.inventory.add_gear(drop);
        }
    }

    fn enemy_turn(&mut self, rng: &mut impl Rng, events: &mut Vec<CombatEvent>) {
        let player_armor = self.player.armor + self.inventory.bonuses().armor;
        let no_bonuses = GearBonuses::default();
        for i in 0..self.enemies.len() {
            if !self.enemies[i].is_alive() || !self.player.is_alive() {
                continue;
            }
            let weapon = self.enemies[i].weapon.clone();
            let swings = swings_per_round(attacks_per_round(&weapon, &no_bonuses));
            for _ in 0..swings {
                if !self.player.is_alive() {
                    break;
                }
                let raw = roll_damage(&weapon, &no_bonuses, rng);
                let damage = damage_after_armor(raw, player_armor);
                self.player.take_damage(damage);
                events.push(CombatEvent::EnemyHit {
                    attacker: self.enemies[i].name.clone(),
                    damage,
                    player_hp: self.player.hp_display(),
                    player_max_hp: self.player.max_hp,
                });
            }
        }
    }

    /// Preferred target if alive, otherwise the first alive enemy.
    fn resolve_target(&self) -> Option<usize> {
        if let Some(idx) = self.target {
            if self.enemies.get(idx).is_some_and(|e| e.is_alive()) {
                return Some(idx);
            }
        }
        self.enemies.iter().position(|e| e.is_alive())
    }

    /// Keep the player actor's weapon mirroring the equipped main hand.
    fn sync_player_weapon(&mut self) {
        if let Some(main_hand) = self.inventory.main_hand() {
            self.player.weapon = main_hand.clone();
        }
    }
}
