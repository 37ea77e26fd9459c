//! Tunable constants for the derived metrics.
//!
//! None of these are invariants of the data; they are the documented
//! defaults of approximations and custom scores. A dashboard config may
//! override any subset.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Field-goal percentage assumed by the TS% approximation when absent
    pub fallback_fg_percentage: f64,
    /// Three-point percentage assumed when neither makes nor a percentage exist
    pub fallback_three_pt_percentage: f64,
    /// Attempts at which the volume half of the impact score saturates
    pub impact_attempts_cap: f64,
    /// Percentage at which the efficiency half of the impact score saturates
    pub impact_percentage_cap: f64,
    /// Trailing window (in seasons) for the consistency rating
    pub consistency_window: usize,
    /// Rating returned while there is not enough history
    pub consistency_neutral: f64,
    /// Points subtracted per unit of standard deviation
    pub consistency_scale: f64,
    /// Minimum attempts for a "prime" season
    pub prime_min_attempts: u32,
    /// Minimum three-point percentage for a "prime" season
    pub prime_min_percentage: f64,
    /// Wins needed for a team season to count as winning
    pub winning_min_wins: u32,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            fallback_fg_percentage: 45.0,
            fallback_three_pt_percentage: 35.0,
            impact_attempts_cap: 300.0,
            impact_percentage_cap: 45.0,
            consistency_window: 3,
            consistency_neutral: 50.0,
            consistency_scale: 10.0,
            prime_min_attempts: 250,
            prime_min_percentage: 38.0,
            winning_min_wins: 41,
        }
    }
}
