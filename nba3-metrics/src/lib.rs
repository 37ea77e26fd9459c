//! Derived shooting metrics over season records.
//!
//! Every function here is pure and stateless. Tunable constants (fallback
//! percentages, score caps, thresholds) come from [`MetricsConfig`]; empty
//! input is reported as [`MetricsError::EmptySeries`] rather than coerced
//! into a zero so callers can render an explicit "no data" state.

pub mod career;
pub mod config;
pub mod consistency;
pub mod delta;
pub mod efficiency;
pub mod error;
pub mod stats;

pub use career::{
    career_summary, team_summary, window_aggregate, CareerSummary, TeamSummary, WindowAggregate,
};
pub use config::MetricsConfig;
pub use consistency::consistency_rating;
pub use delta::{
    career_progression, growth_percentage, league_trends, season_deltas, year_over_year_delta,
    LeagueTrendPoint, SeasonDelta,
};
pub use efficiency::{impact_score, true_shooting_approx, TrueShootingInputs};
pub use error::MetricsError;
pub use stats::{
    league_benchmarks, pearson_correlation, percentile, percentile_rank, BenchmarkMetric,
    Benchmarks,
};

#[cfg(test)]
pub(crate) mod fixtures {
    use nba3_core::SeasonRecord;

    /// Tolerance for float assertions.
    pub const EPS: f64 = 1e-9;

    pub fn season(year: i32, attempts: u32, made: u32, rate: f64) -> SeasonRecord {
        SeasonRecord {
            year,
            three_pt_attempts: attempts,
            three_pt_made: made,
            three_pt_percentage: if attempts > 0 {
                made as f64 / attempts as f64 * 100.0
            } else {
                0.0
            },
            total_shots: 1000,
            mid_range_rate: 25.0,
            efg_percentage: 50.0,
            three_pt_rate: Some(rate),
            fg_percentage: None,
            wins: None,
            playoffs: None,
        }
    }
}
