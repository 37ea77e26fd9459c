//! Dashboard configuration.
//!
//! Every field has a default, so an empty or partial `dashboard.json` is
//! valid. Metric tuning nests under `metrics`.

use nba3_core::YearWindow;
use nba3_metrics::MetricsConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Series colors, assigned by selection position.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#ea580c", "#1e40af", "#16a34a", "#f59e0b", "#dc2626", "#7c3aed", "#0891b2", "#be185d",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("dashboard config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dashboard config palette must contain at least one color")]
    EmptyPalette,
}

/// Which render adapter the app mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Chart and selectors only
    Basic,
    /// Adds the stats, benchmark, insight and playback panels
    #[default]
    Advanced,
}

/// Where the four datasets are fetched from, relative to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataUrls {
    pub league: String,
    pub players: String,
    pub teams: String,
    pub shooters: String,
}

impl Default for DataUrls {
    fn default() -> Self {
        Self {
            league: "data/scene4_data.json".to_string(),
            players: "data/comprehensive_player_data.json".to_string(),
            teams: "data/comprehensive_team_data.json".to_string(),
            shooters: "data/top_30_three_point_shooters.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub layout: Layout,
    /// Window selected when the dashboard opens
    pub default_window: YearWindow,
    /// Ranking entries shown in shooters mode when no player is selected
    pub shooter_default_count: usize,
    pub palette: Vec<String>,
    /// Delay between timeline steps
    pub playback_interval_ms: u32,
    pub data: DataUrls,
    /// Player the "Revolutionary Players" scene follows
    pub featured_player: String,
    pub metrics: MetricsConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            default_window: YearWindow::full(),
            shooter_default_count: 10,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            playback_interval_ms: 500,
            data: DataUrls::default(),
            featured_player: "Stephen Curry".to_string(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse a config document. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: DashboardConfig = serde_json::from_str(json)?;
        if config.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(config)
    }

    /// Color for the entity at selection position `index`.
    pub fn color_for(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()];
        }
        &self.palette[index % self.palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_config_is_default() {
        let config = DashboardConfig::from_json("  \n").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.shooter_default_count, 10);
        assert_eq!(config.playback_interval_ms, 500);
        assert_eq!(config.layout, Layout::Advanced);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = DashboardConfig::from_json(
            r#"{"layout": "basic", "default_window": {"start": 2015, "end": 2020},
                "metrics": {"prime_min_attempts": 300}}"#,
        )
        .unwrap();
        assert_eq!(config.layout, Layout::Basic);
        assert_eq!(config.default_window, YearWindow::new(2015, 2020).unwrap());
        assert_eq!(config.metrics.prime_min_attempts, 300);
        assert_eq!(config.metrics.prime_min_percentage, 38.0);
        assert_eq!(config.data.league, "data/scene4_data.json");
        assert_eq!(config.featured_player, "Stephen Curry");
    }

    #[test]
    fn invalid_configs_are_rejected() {
        assert!(matches!(
            DashboardConfig::from_json(r#"{"palette": []}"#),
            Err(ConfigError::EmptyPalette)
        ));
        assert!(matches!(
            DashboardConfig::from_json(r#"{"default_window": {"start": 2020, "end": 2010}}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn colors_cycle_through_palette() {
        let config = DashboardConfig::default();
        assert_eq!(config.color_for(0), "#ea580c");
        assert_eq!(config.color_for(1), "#1e40af");
        assert_eq!(config.color_for(8), "#ea580c");
    }
}
