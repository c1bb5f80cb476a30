//! Monte Carlo balance simulator.
//!
//! Runs many independent encounters headlessly and aggregates win rate,
//! round counts, and loot statistics.

pub mod config;
pub mod report;
pub mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;
