use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Magic = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Magic => "Magic",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Number of (prefix, suffix) affixes an item of this rarity rolls.
    pub fn affix_counts(&self) -> (usize, usize) {
        match self {
            Rarity::Common => (0, 0),
            Rarity::Magic => (1, 0),
            Rarity::Rare => (1, 1),
            Rarity::Epic => (2, 1),
            Rarity::Legendary => (2, 2),
        }
    }

    pub fn all() -> [Rarity; 5] {
        [
            Rarity::Common,
            Rarity::Magic,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
        ]
    }
}

/// Where an item can be worn. Dropped rings carry the generic `Ring` slot;
/// the equipment layout has two ring sockets (see `EquippedSlots`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Weapon,
    Offhand,
    Armor,
    Helmet,
    Boots,
    Belt,
    Amulet,
    Ring,
}

impl Slot {
    pub fn name(&self) -> &'static str {
        match self {
            Slot::Weapon => "Weapon",
            Slot::Offhand => "Off-hand",
            Slot::Armor => "Armor",
            Slot::Helmet => "Helmet",
            Slot::Boots => "Boots",
            Slot::Belt => "Belt",
            Slot::Amulet => "Amulet",
            Slot::Ring => "Ring",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Gear,
}

/// A named modifier adding flat or percentage bonuses to an item.
///
/// Percentage fields are fractions (0.15 = +15%) and may be negative:
/// "Heavy" trades attack speed for flat damage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affix {
    pub name: String,
    pub flat_min: i32,
    pub flat_max: i32,
    pub pct_damage: f64,
    pub crit_chance: f64,
    pub attack_speed: f64,
}

impl Affix {
    pub fn new(
        name: &str,
        flat_min: i32,
        flat_max: i32,
        pct_damage: f64,
        crit_chance: f64,
        attack_speed: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            flat_min,
            flat_max,
            pct_damage,
            crit_chance,
            attack_speed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub rarity: Rarity,
    pub kind: ItemKind,
    pub slot: Slot,
    /// Weapon damage range before affixes (zero for gear).
    pub base_min: i32,
    pub base_max: i32,
    /// Flat armor from this piece (zero for weapons).
    pub armor_bonus: i32,
    /// Two-handed weapons block the off-hand.
    pub two_handed: bool,
    pub affixes: Vec<Affix>,
}

impl Item {
    pub fn weapon(name: &str, base_min: i32, base_max: i32) -> Self {
        Self {
            name: name.to_string(),
            rarity: Rarity::Common,
            kind: ItemKind::Weapon,
            slot: Slot::Weapon,
            base_min,
            base_max,
            armor_bonus: 0,
            two_handed: false,
            affixes: Vec::new(),
        }
    }

    pub fn gear(name: &str, slot: Slot, armor_bonus: i32) -> Self {
        Self {
            name: name.to_string(),
            rarity: Rarity::Common,
            kind: ItemKind::Gear,
            slot,
            base_min: 0,
            base_max: 0,
            armor_bonus,
            two_handed: false,
            affixes: Vec::new(),
        }
    }

    pub fn is_weapon(&self) -> bool {
        self.kind == ItemKind::Weapon
    }

    pub fn is_shield(&self) -> bool {
        self.kind == ItemKind::Gear && self.slot == Slot::Offhand && self.armor_bonus > 0
    }

    /// Minimum damage after flat affixes, never below 1 for weapons.
    pub fn min_damage(&self) -> i32 {
        if !self.is_weapon() {
            return 0;
        }
        let m: i32 = self.base_min + self.affixes.iter().map(|a| a.flat_min).sum::<i32>();
        m.max(1)
    }

    /// Maximum damage after flat affixes, never below `min_damage`.
    pub fn max_damage(&self) -> i32 {
        if !self.is_weapon() {
            return 0;
        }
        let m: i32 = self.base_max + self.affixes.iter().map(|a| a.flat_max).sum::<i32>();
        m.max(self.min_damage())
    }

    /// Sum of percentage damage affixes (fraction).
    pub fn pct_damage(&self) -> f64 {
        self.affixes.iter().map(|a| a.pct_damage).sum()
    }

    /// Sum of crit chance affixes. Baseline and cap are applied by the
    /// combat math, not here.
    pub fn crit_chance(&self) -> f64 {
        self.affixes.iter().map(|a| a.crit_chance).sum()
    }

    /// Sum of attack speed affixes. Baseline and floor are applied by the
    /// combat math, not here.
    pub fn attack_speed(&self) -> f64 {
        self.affixes.iter().map(|a| a.attack_speed).sum()
    }

    /// One-line display label, e.g.
    /// `[Rare] Longsword {6-13} (Jagged, of Haste)`.
    pub fn label(&self) -> String {
        let mut out = format!("[{}] {}", self.rarity.name(), self.name);
        if self.is_weapon() {
            out.push_str(&format!(" {{{}-{}}}", self.min_damage(), self.max_damage()));
        } else if self.armor_bonus != 0 {
            out.push_str(&format!(" (Armor +{})", self.armor_bonus));
        }
        if !self.affixes.is_empty() {
            let names: Vec<&str> = self.affixes.iter().map(|a| a.name.as_str()).collect();
            out.push_str(&format!(" ({})", names.join(", ")));
        }
        out
    }
}
