//! Inventory and slot-aware equipment rules.
//!
//! Items stay in their list when equipped; the `EquippedSlots` record holds
//! indices into the weapon and gear lists. That keeps indices stable for
//! front-ends listing the inventory with EDPR annotations.

use super::scoring::expected_dpr;
use super::types::{Item, Slot};
use serde::{Deserialize, Serialize};

/// Additive bonuses aggregated over all equipped gear pieces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GearBonuses {
    pub armor: i32,
    pub pct_damage: f64,
    pub crit_chance: f64,
    pub attack_speed: f64,
}

/// Indices of currently equipped items. Weapon slots index into the weapon
/// list, everything else into the gear list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquippedSlots {
    pub main_hand: Option<usize>,
    pub off_hand_weapon: Option<usize>,
    pub off_hand_shield: Option<usize>,
    pub armor: Option<usize>,
    pub helmet: Option<usize>,
    pub boots: Option<usize>,
    pub belt: Option<usize>,
    pub amulet: Option<usize>,
    pub ring1: Option<usize>,
    pub ring2: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    weapons: Vec<Item>,
    gear: Vec<Item>,
    pub equipped: EquippedSlots,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a weapon to the inventory. `None` if the item is not a weapon.
    pub fn add_weapon(&mut self, item: Item) -> Option<usize> {
        if !item.is_weapon() {
            return None;
        }
        self.weapons.push(item);
        Some(self.weapons.len() - 1)
    }

    /// Add a gear piece to the inventory. `None` if the item is a weapon.
    pub fn add_gear(&mut self, item: Item) -> Option<usize> {
        if item.is_weapon() {
            return None;
        }
        self.gear.push(item);
        Some(self.gear.len() - 1)
    }

    /// Equip a weapon in the main hand.
    ///
    /// A two-handed weapon clears the whole off-hand; equipping the weapon
    /// currently held off-hand vacates that slot.
    pub fn equip(&mut self, idx: usize) -> bool {
        let Some(item) = self.weapons.get(idx) else {
            return false;
        };
        if self.equipped.off_hand_weapon == Some(idx) {
            self.equipped.off_hand_weapon = None;
        }
        if item.two_handed {
            self.equipped.off_hand_weapon = None;
            self.equipped.off_hand_shield = None;
        }
        self.equipped.main_hand = Some(idx);
        true
    }

    /// Equip a weapon in the off-hand, displacing any shield.
    ///
    /// Fails for two-handed candidates, when the main hand holds a two-handed
    /// weapon, or when the candidate is the main-hand weapon itself.
    pub fn equip_off_hand(&mut self, idx: usize) -> bool {
        let Some(item) = self.weapons.get(idx) else {
            return false;
        };
        if item.two_handed || self.equipped.main_hand == Some(idx) {
            return false;
        }
        if self.main_hand().is_some_and(|mh| mh.two_handed) {
            return false;
        }
        self.equipped.off_hand_weapon = Some(idx);
        self.equipped.off_hand_shield = None;
        true
    }

    /// Equip a gear piece in its slot. Shields displace an off-hand weapon
    /// (and are blocked by a two-handed main hand); rings fill ring1 then
    /// ring2, then replace ring2; other slots replace in place.
    pub fn equip_gear(&mut self, idx: usize) -> bool {
        let Some(item) = self.gear.get(idx) else {
            return false;
        };
        match item.slot {
            Slot::Offhand => {
                if self.main_hand().is_some_and(|mh| mh.two_handed) {
                    return false;
                }
                self.equipped.off_hand_weapon = None;
                self.equipped.off_hand_shield = Some(idx);
            }
            Slot::Armor => self.equipped.armor = Some(idx),
            Slot::Helmet => self.equipped.helmet = Some(idx),
            Slot::Boots => self.equipped.boots = Some(idx),
            Slot::Belt => self.equipped.belt = Some(idx),
            Slot::Amulet => self.equipped.amulet = Some(idx),
            Slot::Ring => {
                if self.equipped.ring1.is_none() {
                    self.equipped.ring1 = Some(idx);
                } else {
                    self.equipped.ring2 = Some(idx);
                }
            }
            Slot::Weapon => return false,
        }
        true
    }

    pub fn main_hand(&self) -> Option<&Item> {
        self.equipped.main_hand.and_then(|i| self.weapons.get(i))
    }

    pub fn off_hand_weapon(&self) -> Option<&Item> {
        self.equipped
            .off_hand_weapon
            .and_then(|i| self.weapons.get(i))
    }

    /// The gear piece equipped in the given slot. `Slot::Ring` resolves to
    /// the first ring socket; use `rings()` for both.
    pub fn equipped_gear(&self, slot: Slot) -> Option<&Item> {
        let idx = match slot {
            Slot::Offhand => self.equipped.off_hand_shield,
            Slot::Armor => self.equipped.armor,
            Slot::Helmet => self.equipped.helmet,
            Slot::Boots => self.equipped.boots,
            Slot::Belt => self.equipped.belt,
            Slot::Amulet => self.equipped.amulet,
            Slot::Ring => self.equipped.ring1,
            Slot::Weapon => None,
        };
        idx.and_then(|i| self.gear.get(i))
    }

    pub fn rings(&self) -> (Option<&Item>, Option<&Item>) {
        (
            self.equipped.ring1.and_then(|i| self.gear.get(i)),
            self.equipped.ring2.and_then(|i| self.gear.get(i)),
        )
    }

    fn equipped_gear_indices(&self) -> impl Iterator<Item = usize> + '_ {
        [
            self.equipped.off_hand_shield,
            self.equipped.armor,
            self.equipped.helmet,
            self.equipped.boots,
            self.equipped.belt,
            self.equipped.amulet,
            self.equipped.ring1,
            self.equipped.ring2,
        ]
        .into_iter()
        .flatten()
    }

    /// Aggregate the additive bonuses from all equipped gear.
    pub fn bonuses(&self) -> GearBonuses {
        let mut total = GearBonuses::default();
        for idx in self.equipped_gear_indices() {
            let Some(piece) = self.gear.get(idx) else {
                continue;
            };
            total.armor += piece.armor_bonus;
            total.pct_damage += piece.pct_damage();
            total.crit_chance += piece.crit_chance();
            total.attack_speed += piece.attack_speed();
        }
        total
    }

    /// Equip the weapon with the highest EDPR under the current gear
    /// bonuses. False on an empty weapon list.
    pub fn equip_best(&mut self) -> bool {
        if self.weapons.is_empty() {
            return false;
        }
        let bonuses = self.bonuses();
        let mut best = f64::NEG_INFINITY;
        let mut best_idx = 0;
        for (i, weapon) in self.weapons.iter().enumerate() {
            let dpr = expected_dpr(weapon, &bonuses);
            if dpr > best {
                best = dpr;
                best_idx = i;
            }
        }
        self.equip(best_idx)
    }

    /// Equip weapon `idx` iff it strictly beats the current main hand's
    /// EDPR. An empty main hand loses to any candidate.
    pub fn auto_equip_if_better(&mut self, idx: usize) -> bool {
        let Some(candidate) = self.weapons.get(idx) else {
            return false;
        };
        let bonuses = self.bonuses();
        let current = self
            .main_hand()
            .map(|w| expected_dpr(w, &bonuses))
            .unwrap_or(f64::NEG_INFINITY);
        if expected_dpr(candidate, &bonuses) > current {
            self.equip(idx)
        } else {
            false
        }
    }

    pub fn weapon_count(&self) -> usize {
        self.weapons.len()
    }

    pub fn gear_count(&self) -> usize {
        self.gear.len()
    }

    pub fn weapon_at(&self, idx: usize) -> Option<&Item> {
        self.weapons.get(idx)
    }

    pub fn gear_at(&self, idx: usize) -> Option<&Item> {
        self.gear.get(idx)
    }
}
