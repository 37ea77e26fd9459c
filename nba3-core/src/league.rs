use serde::{Deserialize, Serialize};

/// League-wide aggregate for one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueSeasonRecord {
    #[serde(rename = "season", alias = "year")]
    pub year: i32,
    pub three_pt_rate: f64,
    pub mid_range_rate: f64,
    pub efg_percentage: f64,
}

/// One row of the precomputed elite-shooter ranking.
///
/// The ranking document arrives sorted by career percentage, best first;
/// consumers keep that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EliteShooter {
    pub player: String,
    pub career_three_pt_percentage: f64,
    pub career_three_pt_made: u32,
    pub career_three_pt_attempts: u32,
    #[serde(default)]
    pub years_active: String,
    #[serde(default)]
    pub seasons_played: u32,
}
