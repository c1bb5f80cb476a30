//! Aggregated simulation results.

use crate::items::Rarity;
use serde::{Deserialize, Serialize};

/// Results across all simulated encounters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimReport {
    pub runs: u32,
    pub victories: u32,
    /// Encounters that hit the round cap without resolving
    pub stalls: u32,
    pub total_rounds: u64,
    pub total_drops: u64,
    /// Drop counts indexed by rarity tier (Common..Legendary)
    pub drops_by_rarity: [u64; 5],
    pub auto_equips: u64,
    /// Sum over runs of the final main-hand EDPR
    pub total_final_edpr: f64,
    /// Sum of surviving HP over victorious runs
    pub total_victory_hp: u64,
}

impl SimReport {
    pub fn win_rate(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.victories as f64 / self.runs as f64
    }

    pub fn avg_rounds(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total_rounds as f64 / self.runs as f64
    }

    pub fn avg_drops(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total_drops as f64 / self.runs as f64
    }

    pub fn avg_final_edpr(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total_final_edpr / self.runs as f64
    }

    pub fn avg_victory_hp(&self) -> f64 {
        if self.victories == 0 {
            return 0.0;
        }
        self.total_victory_hp as f64 / self.victories as f64
    }

    /// Human-readable summary table.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== SIMULATION REPORT ===\n");
        out.push_str(&format!("Runs:             {}\n", self.runs));
        out.push_str(&format!(
            "Victories:        {} ({:.1}%)\n",
            self.victories,
            self.win_rate() * 100.0
        ));
        if self.stalls > 0 {
            out.push_str(&format!("Stalled runs:     {}\n", self.stalls));
        }
        out.push_str(&format!("Avg rounds:       {:.2}\n", self.avg_rounds()));
        out.push_str(&format!("Avg HP on win:    {:.1}\n", self.avg_victory_hp()));
        out.push_str(&format!("Avg drops/run:    {:.2}\n", self.avg_drops()));
        out.push_str(&format!("Auto-equips:      {}\n", self.auto_equips));
        out.push_str(&format!(
            "Avg final EDPR:   {:.2}\n",
            self.avg_final_edpr()
        ));
        out.push_str("Drops by rarity:\n");
        for (rarity, count) in Rarity::all().into_iter().zip(self.drops_by_rarity) {
            let pct = if self.total_drops > 0 {
                count as f64 / self.total_drops as f64 * 100.0
            } else {
                0.0
            };
            out.push_str(&format!(
                "  {:<10} {:>8}  ({:.1}%)\n",
                rarity.name(),
                count,
                pct
            ));
        }
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_rates_are_zero() {
        let report = SimReport::default();
        assert_eq!(report.win_rate(), 0.0);
        assert_eq!(report.avg_rounds(), 0.0);
        assert_eq!(report.avg_final_edpr(), 0.0);
        assert_eq!(report.avg_victory_hp(), 0.0);
    }

    #[test]
    fn test_rates() {
        let report = SimReport {
            runs: 10,
            victories: 7,
            total_rounds: 55,
            total_drops: 20,
            total_victory_hp: 140,
            ..SimReport::default()
        };
        assert!((report.win_rate() - 0.7).abs() < 1e-12);
        assert!((report.avg_rounds() - 5.5).abs() < 1e-12);
        assert!((report.avg_drops() - 2.0).abs() < 1e-12);
        assert!((report.avg_victory_hp() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_text_report_mentions_every_rarity() {
        let report = SimReport {
            runs: 1,
            drops_by_rarity: [5, 3, 1, 1, 0],
            total_drops: 10,
            ..SimReport::default()
        };
        let text = report.to_text();
        for rarity in Rarity::all() {
            assert!(text.contains(rarity.name()), "missing {}", rarity.name());
        }
    }

    #[test]
    fn test_json_round_trips() {
        let report = SimReport {
            runs: 3,
            victories: 2,
            drops_by_rarity: [1, 0, 2, 0, 0],
            ..SimReport::default()
        };
        let parsed: SimReport = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(parsed.runs, 3);
        assert_eq!(parsed.victories, 2);
        assert_eq!(parsed.drops_by_rarity, [1, 0, 2, 0, 0]);
    }
}
