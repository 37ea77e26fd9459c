//! Single-season efficiency metrics.

use crate::config::MetricsConfig;
use nba3_core::SeasonRecord;

/// Inputs to the true-shooting approximation.
///
/// Built from a [`SeasonRecord`] in the common case; the optional fields
/// fall back to the configured constants when absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrueShootingInputs {
    pub total_shots: u32,
    pub three_pt_attempts: u32,
    pub three_pt_made: Option<u32>,
    pub fg_percentage: Option<f64>,
    pub three_pt_percentage: Option<f64>,
}

impl From<&SeasonRecord> for TrueShootingInputs {
    fn from(season: &SeasonRecord) -> Self {
        Self {
            total_shots: season.total_shots,
            three_pt_attempts: season.three_pt_attempts,
            three_pt_made: Some(season.three_pt_made),
            fg_percentage: season.fg_percentage,
            three_pt_percentage: Some(season.three_pt_percentage),
        }
    }
}

/// Approximate true shooting percentage without free-throw data.
///
/// `TS ≈ (2·FGM + 3PM) / (2·FGA) · 100`, where `FGA` is total shots and
/// `FGM = FGA · FG%`. Missing FG% uses `fallback_fg_percentage`; missing
/// three-point makes are estimated as `3PA · 3P%` with
/// `fallback_three_pt_percentage` standing in for a missing 3P%.
/// Zero shots yields 0.
pub fn true_shooting_approx(inputs: TrueShootingInputs, config: &MetricsConfig) -> f64 {
    if inputs.total_shots == 0 {
        return 0.0;
    }
    let fga = inputs.total_shots as f64;
    let fg_pct = inputs
        .fg_percentage
        .unwrap_or(config.fallback_fg_percentage);
    let fgm = fga * fg_pct / 100.0;
    let made_threes = match inputs.three_pt_made {
        Some(made) => made as f64,
        None => {
            let pct = inputs
                .three_pt_percentage
                .unwrap_or(config.fallback_three_pt_percentage);
            inputs.three_pt_attempts as f64 * pct / 100.0
        }
    };
    (2.0 * fgm + made_threes) / (2.0 * fga) * 100.0
}

/// Custom 0-100 blend of volume and accuracy, each half saturating at its cap.
pub fn impact_score(season: &SeasonRecord, config: &MetricsConfig) -> f64 {
    let volume = (season.three_pt_attempts as f64 / config.impact_attempts_cap).min(1.0);
    let accuracy = (season.three_pt_percentage / config.impact_percentage_cap).min(1.0);
    (volume.max(0.0) * 50.0 + accuracy.max(0.0) * 50.0).clamp(0.0, 100.0)
}
