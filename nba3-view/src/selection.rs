//! The selection state store.
//!
//! Every user-visible choice (narrative scene, analysis mode, selected teams
//! and players, time window, chart sub-view, team season filter) lives in one
//! [`SelectionState`] and only changes through the named operations below.
//! The axes are independent: switching mode keeps both selections, and a
//! rejected window leaves everything as it was.

use crate::scene::{Scene, SceneNavError};
use nba3_core::{Era, InvalidWindowError, SeasonRecord, YearWindow};
use nba3_metrics::{impact_score, MetricsConfig};
use serde::{Deserialize, Serialize};

/// Which dataset the dashboard is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    Teams,
    Players,
    Shooters,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 3] = [
        AnalysisMode::Teams,
        AnalysisMode::Players,
        AnalysisMode::Shooters,
    ];

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::Teams => "Team Analysis",
            AnalysisMode::Players => "Player Comparison",
            AnalysisMode::Shooters => "Elite Shooters",
        }
    }

    /// Chart title shown above the main visualization.
    pub fn chart_title(&self) -> &'static str {
        match self {
            AnalysisMode::Teams => "Team Three-Point Trends",
            AnalysisMode::Players => "Player Comparison Analysis",
            AnalysisMode::Shooters => "Elite Shooter Performance",
        }
    }
}

/// An insertion-ordered set of entity keys.
///
/// Order matters: the Nth selected key gets the Nth palette color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeySelection {
    keys: Vec<String>,
}

impl KeySelection {
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Add `key` at the end. Returns false when it was already present.
    pub fn insert(&mut self, key: &str) -> bool {
        if self.contains(key) {
            return false;
        }
        self.keys.push(key.to_string());
        true
    }

    /// Remove `key`, keeping the order of the rest. Returns false when absent.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        self.keys.len() != before
    }

    /// Flip membership of `key`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.remove(key) {
            false
        } else {
            self.keys.push(key.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// The value plotted on the y-axis of a trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMetric {
    Attempts,
    Percentage,
    Rate,
    Efficiency,
    Impact,
}

impl ChartMetric {
    pub const ALL: [ChartMetric; 5] = [
        ChartMetric::Attempts,
        ChartMetric::Percentage,
        ChartMetric::Rate,
        ChartMetric::Efficiency,
        ChartMetric::Impact,
    ];

    /// Teams plot volume, players plot accuracy.
    pub fn default_for(mode: AnalysisMode) -> ChartMetric {
        match mode {
            AnalysisMode::Teams => ChartMetric::Attempts,
            AnalysisMode::Players | AnalysisMode::Shooters => ChartMetric::Percentage,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartMetric::Attempts => "Attempts",
            ChartMetric::Percentage => "Accuracy",
            ChartMetric::Rate => "3PT Rate",
            ChartMetric::Efficiency => "eFG%",
            ChartMetric::Impact => "Impact",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            ChartMetric::Attempts => "Three-Point Attempts",
            ChartMetric::Percentage => "Three-Point Percentage",
            ChartMetric::Rate => "Three-Point Rate (%)",
            ChartMetric::Efficiency => "Effective FG%",
            ChartMetric::Impact => "Impact Score",
        }
    }

    pub fn value(&self, season: &SeasonRecord, config: &MetricsConfig) -> f64 {
        match self {
            ChartMetric::Attempts => season.three_pt_attempts as f64,
            ChartMetric::Percentage => season.three_pt_percentage,
            ChartMetric::Rate => season.three_point_rate(),
            ChartMetric::Efficiency => season.efg_percentage,
            ChartMetric::Impact => impact_score(season, config),
        }
    }
}

/// Optional restrictions on which team seasons are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSeasonFilter {
    /// Keep only seasons that ended in a playoff appearance
    pub playoffs_only: bool,
    /// Keep only seasons with at least `winning_min_wins` wins
    pub winning_only: bool,
}

impl TeamSeasonFilter {
    pub fn is_active(&self) -> bool {
        self.playoffs_only || self.winning_only
    }

    /// Seasons missing the field a filter needs are excluded by that filter.
    pub fn admits(&self, season: &SeasonRecord, winning_min_wins: u32) -> bool {
        if self.playoffs_only && season.playoffs != Some(true) {
            return false;
        }
        if self.winning_only && !season.wins.is_some_and(|w| w >= winning_min_wins) {
            return false;
        }
        true
    }
}

/// Everything the user has chosen, in one place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectionState {
    scene: Scene,
    mode: AnalysisMode,
    teams: KeySelection,
    players: KeySelection,
    window: YearWindow,
    chart_metric: Option<ChartMetric>,
    team_filter: TeamSeasonFilter,
}

impl SelectionState {
    /// Empty selections in teams mode over `window`, on the first scene.
    pub fn new(window: YearWindow) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// Jump to the scene at `index`. Out-of-range indices are rejected.
    pub fn go_to_scene(&mut self, index: usize) -> Result<(), SceneNavError> {
        self.scene = Scene::from_index(index)?;
        Ok(())
    }

    pub fn next_scene(&mut self) -> Result<Scene, SceneNavError> {
        self.scene = self.scene.next()?;
        Ok(self.scene)
    }

    pub fn prev_scene(&mut self) -> Result<Scene, SceneNavError> {
        self.scene = self.scene.prev()?;
        Ok(self.scene)
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    /// Switch mode. Selections are kept.
    pub fn set_mode(&mut self, mode: AnalysisMode) {
        self.mode = mode;
    }

    pub fn teams(&self) -> &KeySelection {
        &self.teams
    }

    pub fn players(&self) -> &KeySelection {
        &self.players
    }

    pub fn toggle_team(&mut self, name: &str) -> bool {
        self.teams.toggle(name)
    }

    pub fn select_team(&mut self, name: &str) {
        self.teams.insert(name);
    }

    pub fn deselect_team(&mut self, name: &str) {
        self.teams.remove(name);
    }

    pub fn clear_teams(&mut self) {
        self.teams.clear();
    }

    pub fn toggle_player(&mut self, name: &str) -> bool {
        self.players.toggle(name)
    }

    pub fn select_player(&mut self, name: &str) {
        self.players.insert(name);
    }

    pub fn deselect_player(&mut self, name: &str) {
        self.players.remove(name);
    }

    pub fn clear_players(&mut self) {
        self.players.clear();
    }

    pub fn window(&self) -> YearWindow {
        self.window
    }

    /// Replace the window. An inverted or out-of-range window is rejected
    /// and the current one kept.
    pub fn set_window(&mut self, start: i32, end: i32) -> Result<(), InvalidWindowError> {
        self.window = YearWindow::new(start, end)?;
        Ok(())
    }

    /// Move the start bound, holding the end.
    pub fn set_window_start(&mut self, start: i32) -> Result<(), InvalidWindowError> {
        self.set_window(start, self.window.end())
    }

    /// Move the end bound, holding the start.
    pub fn set_window_end(&mut self, end: i32) -> Result<(), InvalidWindowError> {
        self.set_window(self.window.start(), end)
    }

    pub fn apply_era(&mut self, era: Era) {
        self.window = era.window();
    }

    /// The explicitly chosen chart metric, if any.
    pub fn chart_metric(&self) -> Option<ChartMetric> {
        self.chart_metric
    }

    /// The chart metric in effect: the chosen one or the mode default.
    pub fn effective_chart_metric(&self) -> ChartMetric {
        self.chart_metric
            .unwrap_or_else(|| ChartMetric::default_for(self.mode))
    }

    pub fn set_chart_metric(&mut self, metric: Option<ChartMetric>) {
        self.chart_metric = metric;
    }

    pub fn team_filter(&self) -> TeamSeasonFilter {
        self.team_filter
    }

    pub fn set_team_filter(&mut self, filter: TeamSeasonFilter) {
        self.team_filter = filter;
    }
}
