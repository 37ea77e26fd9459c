//! Distribution statistics: percentiles, league benchmarks, correlation.

use crate::config::MetricsConfig;
use crate::efficiency::impact_score;
use crate::error::{MetricsError, Result};
use nba3_core::SeasonRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Below this a variance product is treated as zero.
const DENOMINATOR_EPSILON: f64 = 1e-12;

/// Linear-interpolation percentile over an ascending slice.
///
/// The rank is `p/100 * (n-1)`; an integral rank returns that element,
/// otherwise the two neighbours are interpolated. `p` is clamped to 0..=100.
pub fn percentile(sorted: &[f64], p: f64) -> Result<f64> {
    if sorted.is_empty() {
        return Err(MetricsError::EmptySeries);
    }
    let rank = p.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }
    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64))
}

/// Share of values (in percent) at or below `value`.
pub fn percentile_rank(sorted: &[f64], value: f64) -> Result<f64> {
    if sorted.is_empty() {
        return Err(MetricsError::EmptySeries);
    }
    let at_or_below = sorted.partition_point(|v| *v <= value);
    Ok(at_or_below as f64 / sorted.len() as f64 * 100.0)
}

/// Metrics the league benchmarks are computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum BenchmarkMetric {
    ThreePointRate,
    ThreePointPercentage,
    ThreePointAttempts,
    EffectiveFgPercentage,
    MidRangeRate,
    ImpactScore,
}

impl BenchmarkMetric {
    pub const ALL: [BenchmarkMetric; 6] = [
        BenchmarkMetric::ThreePointRate,
        BenchmarkMetric::ThreePointPercentage,
        BenchmarkMetric::ThreePointAttempts,
        BenchmarkMetric::EffectiveFgPercentage,
        BenchmarkMetric::MidRangeRate,
        BenchmarkMetric::ImpactScore,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BenchmarkMetric::ThreePointRate => "3PT Rate",
            BenchmarkMetric::ThreePointPercentage => "3PT %",
            BenchmarkMetric::ThreePointAttempts => "3PT Attempts",
            BenchmarkMetric::EffectiveFgPercentage => "eFG %",
            BenchmarkMetric::MidRangeRate => "Mid-Range Rate",
            BenchmarkMetric::ImpactScore => "Impact Score",
        }
    }

    pub fn value(&self, season: &SeasonRecord, config: &MetricsConfig) -> f64 {
        match self {
            BenchmarkMetric::ThreePointRate => season.three_point_rate(),
            BenchmarkMetric::ThreePointPercentage => season.three_pt_percentage,
            BenchmarkMetric::ThreePointAttempts => season.three_pt_attempts as f64,
            BenchmarkMetric::EffectiveFgPercentage => season.efg_percentage,
            BenchmarkMetric::MidRangeRate => season.mid_range_rate,
            BenchmarkMetric::ImpactScore => impact_score(season, config),
        }
    }
}

/// Standard percentile cut points for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Benchmarks {
    pub p10: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
}

impl Benchmarks {
    pub fn from_sorted(sorted: &[f64]) -> Result<Self> {
        Ok(Self {
            p10: percentile(sorted, 10.0)?,
            p25: percentile(sorted, 25.0)?,
            p50: percentile(sorted, 50.0)?,
            p75: percentile(sorted, 75.0)?,
            p90: percentile(sorted, 90.0)?,
            p95: percentile(sorted, 95.0)?,
        })
    }
}

/// Percentile benchmarks for every [`BenchmarkMetric`] over seasons pooled
/// across entities.
pub fn league_benchmarks(
    seasons: &[SeasonRecord],
    config: &MetricsConfig,
) -> Result<BTreeMap<BenchmarkMetric, Benchmarks>> {
    if seasons.is_empty() {
        log::debug!("[NBA3] metrics: no pooled seasons, skipping league benchmarks");
        return Err(MetricsError::EmptySeries);
    }
    let mut out = BTreeMap::new();
    for metric in BenchmarkMetric::ALL {
        let mut values: Vec<f64> = seasons.iter().map(|s| metric.value(s, config)).collect();
        values.sort_by(|a, b| a.total_cmp(b));
        out.insert(metric, Benchmarks::from_sorted(&values)?);
    }
    Ok(out)
}

/// Pearson correlation coefficient of `(x, y)` pairs.
///
/// Zero-variance input has no defined coefficient and yields 0.
pub fn pearson_correlation(pairs: &[(f64, f64)]) -> Result<f64> {
    if pairs.is_empty() {
        return Err(MetricsError::EmptySeries);
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator < DENOMINATOR_EPSILON {
        log::debug!(
            "[NBA3] metrics: zero variance across {} pairs, correlation reported as 0",
            pairs.len()
        );
        return Ok(0.0);
    }
    Ok((covariance / denominator).clamp(-1.0, 1.0))
}
