// Combat math baselines
pub const BASE_CRIT_CHANCE: f64 = 0.05;
pub const CRIT_CHANCE_CAP: f64 = 0.75;
pub const CRIT_MULTIPLIER: f64 = 1.5;
pub const BASE_ATTACKS_PER_ROUND: f64 = 1.0;
pub const MIN_ATTACKS_PER_ROUND: f64 = 0.2;

// Loot
pub const GEAR_DROP_CHANCE: f64 = 0.35;

// Rarity weights (Common, Magic, Rare, Epic, Legendary)
pub const RARITY_WEIGHTS: [f64; 5] = [60.0, 25.0, 10.0, 4.0, 1.0];

// Enemy packs
pub const MIN_PACK_SIZE: u32 = 3;
pub const MAX_PACK_SIZE: u32 = 5;

// Starter player
pub const PLAYER_MAX_HP: i32 = 60;
pub const PLAYER_BASE_ARMOR: i32 = 1;
