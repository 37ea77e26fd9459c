use crate::error::RecordViolation;
use crate::window::{MAX_YEAR, MIN_YEAR};
use serde::{Deserialize, Serialize};

/// One entity's shooting numbers for one season.
///
/// Field names follow the source JSON documents (`season`, `three_pt_shots`,
/// `made_threes`, ...) with aliases for the long-form names. The required
/// fields fail deserialization when absent; the optional ones feed derived
/// metrics that carry their own fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    #[serde(rename = "season", alias = "year")]
    pub year: i32,
    #[serde(rename = "three_pt_shots", alias = "three_pt_attempts")]
    pub three_pt_attempts: u32,
    #[serde(alias = "made_threes")]
    pub three_pt_made: u32,
    pub three_pt_percentage: f64,
    pub total_shots: u32,
    pub mid_range_rate: f64,
    pub efg_percentage: f64,
    /// Share of field-goal attempts taken from three, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_pt_rate: Option<f64>,
    /// Overall field-goal percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wins: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playoffs: Option<bool>,
}

impl SeasonRecord {
    /// Three-point rate in percent, derived from attempts when the source
    /// did not carry it. Zero total shots yields 0.
    pub fn three_point_rate(&self) -> f64 {
        match self.three_pt_rate {
            Some(rate) => rate,
            None if self.total_shots == 0 => 0.0,
            None => self.three_pt_attempts as f64 / self.total_shots as f64 * 100.0,
        }
    }

    /// Check the data-model invariants for a single record.
    pub fn validate(&self) -> Result<(), RecordViolation> {
        if self.year < MIN_YEAR || self.year > MAX_YEAR {
            return Err(RecordViolation::YearOutOfRange(self.year));
        }
        if self.three_pt_made > self.three_pt_attempts {
            return Err(RecordViolation::MadeExceedsAttempts {
                made: self.three_pt_made,
                attempts: self.three_pt_attempts,
            });
        }
        Ok(())
    }
}
