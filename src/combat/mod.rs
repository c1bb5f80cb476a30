//! Round-based combat: actors, encounters, and enemy packs.

#![allow(unused_imports)]

pub mod logic;
pub mod spawn;
pub mod types;

pub use logic::*;
pub use spawn::*;
pub use types::*;
