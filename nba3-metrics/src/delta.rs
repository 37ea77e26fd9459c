//! Year-over-year changes and career progression.

use crate::error::{MetricsError, Result};
use nba3_core::{LeagueSeasonRecord, SeasonRecord};
use serde::Serialize;

/// Change of each value relative to the one before it; the first entry is 0.
pub fn year_over_year_delta(values: &[f64]) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(MetricsError::EmptySeries);
    }
    let mut deltas = Vec::with_capacity(values.len());
    deltas.push(0.0);
    for pair in values.windows(2) {
        deltas.push(pair[1] - pair[0]);
    }
    Ok(deltas)
}

/// Per-season deltas of three-point rate and efficiency (eFG%).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonDelta {
    pub year: i32,
    pub rate_delta: f64,
    pub efficiency_delta: f64,
}

pub fn season_deltas(seasons: &[SeasonRecord]) -> Result<Vec<SeasonDelta>> {
    let rates: Vec<f64> = seasons.iter().map(|s| s.three_point_rate()).collect();
    let efficiency: Vec<f64> = seasons.iter().map(|s| s.efg_percentage).collect();
    let rate_deltas = year_over_year_delta(&rates)?;
    let efficiency_deltas = year_over_year_delta(&efficiency)?;
    Ok(seasons
        .iter()
        .zip(rate_deltas.into_iter().zip(efficiency_deltas))
        .map(|(s, (rate_delta, efficiency_delta))| SeasonDelta {
            year: s.year,
            rate_delta,
            efficiency_delta,
        })
        .collect())
}

/// A league season with its changes versus the preceding season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueTrendPoint {
    pub year: i32,
    pub three_pt_rate: f64,
    pub mid_range_rate: f64,
    pub efg_percentage: f64,
    pub three_pt_rate_delta: f64,
    pub efficiency_delta: f64,
}

/// League seasons (ascending) annotated with `Δ3PTRate` and `ΔEfficiency`.
pub fn league_trends(league: &[LeagueSeasonRecord]) -> Result<Vec<LeagueTrendPoint>> {
    let rates: Vec<f64> = league.iter().map(|l| l.three_pt_rate).collect();
    let efficiency: Vec<f64> = league.iter().map(|l| l.efg_percentage).collect();
    let rate_deltas = year_over_year_delta(&rates)?;
    let efficiency_deltas = year_over_year_delta(&efficiency)?;
    Ok(league
        .iter()
        .enumerate()
        .map(|(i, l)| LeagueTrendPoint {
            year: l.year,
            three_pt_rate: l.three_pt_rate,
            mid_range_rate: l.mid_range_rate,
            efg_percentage: l.efg_percentage,
            three_pt_rate_delta: rate_deltas[i],
            efficiency_delta: efficiency_deltas[i],
        })
        .collect())
}

/// Each season's three-point rate minus the first season's.
pub fn career_progression(seasons: &[SeasonRecord]) -> Result<Vec<f64>> {
    let baseline = seasons
        .first()
        .ok_or(MetricsError::EmptySeries)?
        .three_point_rate();
    Ok(seasons
        .iter()
        .map(|s| s.three_point_rate() - baseline)
        .collect())
}

/// Relative growth from `first` to `last` in percent. `None` when the
/// baseline is zero.
pub fn growth_percentage(first: f64, last: f64) -> Option<f64> {
    if first == 0.0 {
        return None;
    }
    Some((last - first) / first * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{season, EPS};

    #[test]
    fn single_value_delta_is_zero() {
        assert_eq!(year_over_year_delta(&[37.2]).unwrap(), vec![0.0]);
    }

    #[test]
    fn empty_delta_is_an_error() {
        assert_eq!(year_over_year_delta(&[]), Err(MetricsError::EmptySeries));
    }

    #[test]
    fn deltas_are_relative_to_previous() {
        let d = year_over_year_delta(&[10.0, 12.5, 11.0]).unwrap();
        assert_eq!(d.len(), 3);
        assert!((d[1] - 2.5).abs() < EPS);
        assert!((d[2] + 1.5).abs() < EPS);
    }

    #[test]
    fn season_deltas_cover_rate_and_efficiency() {
        let mut a = season(2015, 200, 80, 30.0);
        let mut b = season(2016, 250, 100, 34.0);
        a.efg_percentage = 50.0;
        b.efg_percentage = 53.5;
        let d = season_deltas(&[a, b]).unwrap();
        assert_eq!(d[0].rate_delta, 0.0);
        assert_eq!(d[1].year, 2016);
        assert!((d[1].rate_delta - 4.0).abs() < EPS);
        assert!((d[1].efficiency_delta - 3.5).abs() < EPS);
    }

    #[test]
    fn league_trends_first_year_has_zero_delta() {
        let league = vec![
            LeagueSeasonRecord {
                year: 2004,
                three_pt_rate: 18.7,
                mid_range_rate: 38.0,
                efg_percentage: 47.0,
            },
            LeagueSeasonRecord {
                year: 2005,
                three_pt_rate: 19.7,
                mid_range_rate: 37.0,
                efg_percentage: 47.5,
            },
        ];
        let trends = league_trends(&league).unwrap();
        assert_eq!(trends[0].three_pt_rate_delta, 0.0);
        assert_eq!(trends[0].efficiency_delta, 0.0);
        assert!((trends[1].three_pt_rate_delta - 1.0).abs() < 1e-6);
        assert!((trends[1].efficiency_delta - 0.5).abs() < 1e-6);
    }

    #[test]
    fn progression_is_measured_from_first_season() {
        let seasons = vec![
            season(2010, 100, 35, 20.0),
            season(2011, 150, 55, 25.0),
            season(2012, 120, 40, 18.0),
        ];
        let p = career_progression(&seasons).unwrap();
        assert_eq!(p, vec![0.0, 5.0, -2.0]);
    }

    #[test]
    fn growth_handles_zero_baseline() {
        assert_eq!(growth_percentage(0.0, 10.0), None);
        let g = growth_percentage(18.7, 39.5).unwrap();
        assert!((g - 111.229946).abs() < 1e-4);
    }
}
