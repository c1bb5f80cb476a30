//! Item system: types, loot tables, inventory, and EDPR scoring.

pub mod inventory;
pub mod scoring;
pub mod tables;
pub mod types;

pub use inventory::*;
pub use scoring::*;
pub use tables::*;
pub use types::*;
