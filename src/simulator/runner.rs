//! Simulation driver: runs independent encounters and aggregates results.

use super::config::SimConfig;
use super::report::SimReport;
use crate::combat::{spawn_pack, starter_pack, CombatEvent, Encounter};
use crate::core::rng::{from_entropy, seeded};
use crate::items::{default_tables, expected_dpr};

/// Run the configured number of encounters and aggregate a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut rng = match config.seed {
        Some(seed) => seeded(seed),
        None => from_entropy(),
    };

    let mut report = SimReport {
        runs: config.num_runs,
        ..SimReport::default()
    };

    for _ in 0..config.num_runs {
        let mut encounter = Encounter::starter(default_tables());
        encounter.auto_equip = config.auto_equip;
        if config.randomize_packs {
            encounter.enemies = spawn_pack(&mut rng);
        } else {
            encounter.enemies = starter_pack();
        }

        while !encounter.is_over() && encounter.round() < config.max_rounds_per_run {
            for event in encounter.run_round(&mut rng) {
                match event {
                    CombatEvent::LootDropped { rarity, .. } => {
                        report.total_drops += 1;
                        report.drops_by_rarity[rarity as usize] += 1;
                    }
                    CombatEvent::AutoEquipped { .. } => report.auto_equips += 1,
                    _ => {}
                }
            }
        }

        report.total_rounds += encounter.round() as u64;
        if !encounter.is_over() {
            report.stalls += 1;
        } else if encounter.player.is_alive() {
            report.victories += 1;
            report.total_victory_hp += encounter.player.hp_display() as u64;
        }
        if let Some(main_hand) = encounter.inventory.main_hand() {
            report.total_final_edpr += expected_dpr(main_hand, &encounter.inventory.bonuses());
        }
    }

    report
}
