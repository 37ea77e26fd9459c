//! Career and window aggregates for the stats panel.

use crate::config::MetricsConfig;
use crate::error::{MetricsError, Result};
use nba3_core::SeasonRecord;
use serde::Serialize;

/// Career-level figures derived from a full season series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerSummary {
    pub total_seasons: usize,
    pub first_year: i32,
    pub last_year: i32,
    pub peak_three_point_rate: f64,
    pub peak_efficiency: f64,
    pub total_made: u64,
    pub total_attempts: u64,
    /// Made over attempted threes, in percent
    pub career_accuracy: f64,
    pub average_rate: f64,
    /// Last season's three-point rate minus the first season's
    pub career_trend: f64,
    /// Seasons meeting both the volume and the accuracy threshold
    pub prime_seasons: usize,
}

pub fn career_summary(seasons: &[SeasonRecord], config: &MetricsConfig) -> Result<CareerSummary> {
    let (first, last) = match (seasons.first(), seasons.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(MetricsError::EmptySeries),
    };

    let total_made: u64 = seasons.iter().map(|s| s.three_pt_made as u64).sum();
    let total_attempts: u64 = seasons.iter().map(|s| s.three_pt_attempts as u64).sum();
    let rates: Vec<f64> = seasons.iter().map(|s| s.three_point_rate()).collect();

    Ok(CareerSummary {
        total_seasons: seasons.len(),
        first_year: first.year,
        last_year: last.year,
        peak_three_point_rate: rates.iter().copied().fold(f64::MIN, f64::max),
        peak_efficiency: seasons
            .iter()
            .map(|s| s.efg_percentage)
            .fold(f64::MIN, f64::max),
        total_made,
        total_attempts,
        career_accuracy: accuracy(total_made, total_attempts),
        average_rate: rates.iter().sum::<f64>() / rates.len() as f64,
        career_trend: last.three_point_rate() - first.three_point_rate(),
        prime_seasons: seasons
            .iter()
            .filter(|s| {
                s.three_pt_attempts >= config.prime_min_attempts
                    && s.three_pt_percentage >= config.prime_min_percentage
            })
            .count(),
    })
}

/// Franchise-level figures over a team's full season series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub total_seasons: usize,
    pub first_year: i32,
    pub last_year: i32,
    /// Wins summed over seasons that record them
    pub total_wins: u32,
    /// `None` when no season records wins
    pub average_wins: Option<f64>,
    pub playoff_seasons: usize,
    pub average_rate: f64,
    pub peak_rate: f64,
}

pub fn team_summary(seasons: &[SeasonRecord]) -> Result<TeamSummary> {
    let (first, last) = match (seasons.first(), seasons.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(MetricsError::EmptySeries),
    };
    let wins: Vec<u32> = seasons.iter().filter_map(|s| s.wins).collect();
    let total_wins: u32 = wins.iter().sum();
    let rates: Vec<f64> = seasons.iter().map(|s| s.three_point_rate()).collect();

    Ok(TeamSummary {
        total_seasons: seasons.len(),
        first_year: first.year,
        last_year: last.year,
        total_wins,
        average_wins: (!wins.is_empty()).then(|| total_wins as f64 / wins.len() as f64),
        playoff_seasons: seasons.iter().filter(|s| s.playoffs == Some(true)).count(),
        average_rate: rates.iter().sum::<f64>() / rates.len() as f64,
        peak_rate: rates.iter().copied().fold(f64::MIN, f64::max),
    })
}

/// Totals over the seasons that fall inside the active window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowAggregate {
    pub seasons: usize,
    pub total_shots: u64,
    pub total_made: u64,
    pub total_attempts: u64,
    pub accuracy: f64,
    pub average_rate: f64,
}

pub fn window_aggregate(seasons: &[SeasonRecord]) -> Result<WindowAggregate> {
    if seasons.is_empty() {
        return Err(MetricsError::EmptySeries);
    }
    let total_made: u64 = seasons.iter().map(|s| s.three_pt_made as u64).sum();
    let total_attempts: u64 = seasons.iter().map(|s| s.three_pt_attempts as u64).sum();
    Ok(WindowAggregate {
        seasons: seasons.len(),
        total_shots: seasons.iter().map(|s| s.total_shots as u64).sum(),
        total_made,
        total_attempts,
        accuracy: accuracy(total_made, total_attempts),
        average_rate: seasons.iter().map(|s| s.three_point_rate()).sum::<f64>()
            / seasons.len() as f64,
    })
}

fn accuracy(made: u64, attempts: u64) -> f64 {
    if attempts == 0 {
        0.0
    } else {
        made as f64 / attempts as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{season, EPS};

    fn curry_like() -> Vec<SeasonRecord> {
        let mut seasons = vec![
            season(2010, 380, 166, 31.0),
            season(2013, 600, 272, 38.0),
            season(2016, 886, 402, 55.0),
            season(2020, 50, 12, 40.0),
        ];
        seasons[2].efg_percentage = 63.0;
        seasons
    }

    #[test]
    fn summary_tracks_peaks_and_totals() {
        let cfg = MetricsConfig::default();
        let s = career_summary(&curry_like(), &cfg).unwrap();
        assert_eq!(s.total_seasons, 4);
        assert_eq!(s.first_year, 2010);
        assert_eq!(s.last_year, 2020);
        assert_eq!(s.peak_three_point_rate, 55.0);
        assert_eq!(s.peak_efficiency, 63.0);
        assert_eq!(s.total_made, 852);
        assert_eq!(s.total_attempts, 1916);
        assert!((s.career_accuracy - 852.0 / 1916.0 * 100.0).abs() < EPS);
        assert!((s.career_trend - 9.0).abs() < EPS);
        assert!((s.average_rate - 41.0).abs() < EPS);
    }

    #[test]
    fn prime_seasons_need_volume_and_accuracy() {
        let cfg = MetricsConfig::default();
        // 2010: 43.7% on 380, 2013: 45.3% on 600, 2016: 45.4% on 886 -> prime
        // 2020: only 50 attempts -> not prime
        let s = career_summary(&curry_like(), &cfg).unwrap();
        assert_eq!(s.prime_seasons, 3);

        let strict = MetricsConfig {
            prime_min_attempts: 700,
            ..MetricsConfig::default()
        };
        assert_eq!(career_summary(&curry_like(), &strict).unwrap().prime_seasons, 1);
    }

    #[test]
    fn summary_of_empty_career_is_an_error() {
        assert_eq!(
            career_summary(&[], &MetricsConfig::default()),
            Err(MetricsError::EmptySeries)
        );
    }

    #[test]
    fn team_summary_counts_wins_and_playoffs() {
        let mut seasons = vec![
            season(2010, 1500, 540, 22.0),
            season(2011, 1600, 590, 24.0),
            season(2012, 1700, 600, 27.0),
        ];
        seasons[0].wins = Some(50);
        seasons[0].playoffs = Some(true);
        seasons[1].wins = Some(30);
        seasons[1].playoffs = Some(false);
        let s = team_summary(&seasons).unwrap();
        assert_eq!(s.total_seasons, 3);
        assert_eq!((s.first_year, s.last_year), (2010, 2012));
        assert_eq!(s.total_wins, 80);
        // 2012 records no wins and stays out of the average
        assert_eq!(s.average_wins, Some(40.0));
        assert_eq!(s.playoff_seasons, 1);
        assert!((s.average_rate - 73.0 / 3.0).abs() < EPS);
        assert_eq!(s.peak_rate, 27.0);
    }

    #[test]
    fn team_summary_without_wins() {
        let s = team_summary(&[season(2015, 100, 40, 30.0)]).unwrap();
        assert_eq!(s.total_wins, 0);
        assert_eq!(s.average_wins, None);
        assert_eq!(team_summary(&[]), Err(MetricsError::EmptySeries));
    }

    #[test]
    fn window_aggregate_sums_inside_window() {
        let seasons = curry_like();
        let agg = window_aggregate(&seasons[1..3]).unwrap();
        assert_eq!(agg.seasons, 2);
        assert_eq!(agg.total_made, 674);
        assert_eq!(agg.total_attempts, 1486);
        assert_eq!(agg.total_shots, 2000);
        assert!((agg.average_rate - 46.5).abs() < EPS);
        assert_eq!(window_aggregate(&[]), Err(MetricsError::EmptySeries));
    }

    #[test]
    fn zero_attempt_window_has_zero_accuracy() {
        let agg = window_aggregate(&[season(2005, 0, 0, 0.0)]).unwrap();
        assert_eq!(agg.accuracy, 0.0);
    }
}
