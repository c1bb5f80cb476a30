//! Core plumbing: tuning constants, RNG helpers, weighted random selection.

#![allow(unused_imports)]

pub mod constants;
pub mod rng;
pub mod weighted;

pub use constants::*;
pub use rng::*;
pub use weighted::*;
