use crate::config::MetricsConfig;
use crate::error::{MetricsError, Result};
use nba3_core::SeasonRecord;

/// Seasons of history a rating needs before it leaves neutral.
const MIN_HISTORY: usize = 2;

/// Population standard deviation. Callers guarantee a non-empty slice.
pub(crate) fn std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Consistency of three-point rate over the trailing window ending at
/// `index` (inclusive), scored 0-100.
///
/// The first two seasons always get the neutral rating, whatever the
/// configured window. Later seasons score `max(0, 100 - stddev * scale)`
/// over up to `consistency_window` trailing seasons.
pub fn consistency_rating(
    seasons: &[SeasonRecord],
    index: usize,
    config: &MetricsConfig,
) -> Result<f64> {
    if seasons.is_empty() {
        return Err(MetricsError::EmptySeries);
    }
    if index >= seasons.len() {
        return Err(MetricsError::IndexOutOfRange {
            index,
            len: seasons.len(),
        });
    }
    if index < MIN_HISTORY {
        return Ok(config.consistency_neutral);
    }
    let window = config.consistency_window.clamp(1, index + 1);
    let rates: Vec<f64> = seasons[index + 1 - window..=index]
        .iter()
        .map(|s| s.three_point_rate())
        .collect();
    Ok((100.0 - std_dev(&rates) * config.consistency_scale).max(0.0))
}
