//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of encounters to simulate
    pub num_runs: u32,

    /// Random seed for reproducibility (None = entropy)
    pub seed: Option<u64>,

    /// Round cap per encounter before it counts as a stall
    pub max_rounds_per_run: u32,

    /// Whether weapon drops auto-equip on EDPR improvement
    pub auto_equip: bool,

    /// Random 3-5 enemy packs instead of the fixed starter trio
    pub randomize_packs: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_rounds_per_run: 1000,
            auto_equip: true,
            randomize_packs: true,
        }
    }
}

impl SimConfig {
    /// Quick config for checking the fixed prototype battle
    pub fn starter_battle(num_runs: u32) -> Self {
        Self {
            num_runs,
            randomize_packs: false,
            ..Default::default()
        }
    }

    /// Quick config for measuring auto-equip impact
    pub fn no_auto_equip(num_runs: u32) -> Self {
        Self {
            num_runs,
            auto_equip: false,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.num_runs, 1000);
        assert!(config.auto_equip);
        assert!(config.randomize_packs);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_presets() {
        let fixed = SimConfig::starter_battle(50);
        assert_eq!(fixed.num_runs, 50);
        assert!(!fixed.randomize_packs);

        let manual = SimConfig::no_auto_equip(10);
        assert!(!manual.auto_equip);
    }
}
