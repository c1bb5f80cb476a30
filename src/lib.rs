//! Oathbound - turn-based loot-combat core.
//!
//! A player and a pack of enemies trade blows round by round; kills drop
//! weapons and gear with randomized affixes, ranked and auto-equipped by
//! expected damage per round (EDPR). Front-ends are external: the library
//! exposes state plus a `CombatEvent` stream to render.

pub mod combat;
pub mod core;
pub mod items;
pub mod simulator;

pub use combat::{Actor, CombatEvent, Encounter, EncounterOutcome};
pub use items::{Inventory, Item, LootTables, Rarity, Slot};
