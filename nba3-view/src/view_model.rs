//! The render-ready output of a projection.
//!
//! A [`ViewModel`] is plain data: adapters serialize it to JSON for the
//! D3.js charts and read its panels directly for the Dioxus components.

use crate::scene::Scene;
use crate::selection::{AnalysisMode, ChartMetric};
use nba3_core::YearWindow;
use nba3_metrics::{
    BenchmarkMetric, Benchmarks, CareerSummary, LeagueTrendPoint, TeamSummary, WindowAggregate,
};
use serde::Serialize;

/// Whether there is something to draw, and if not, why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartReadiness {
    /// Nothing is selected for the active mode
    EmptySelection,
    /// Selections exist but none has data inside the window
    NoDataInRange,
    Ready,
}

impl ChartReadiness {
    /// Placeholder text for the empty states.
    pub fn message(&self, mode: AnalysisMode) -> Option<&'static str> {
        match (self, mode) {
            (ChartReadiness::Ready, _) => None,
            (ChartReadiness::EmptySelection, AnalysisMode::Teams) => {
                Some("Select teams from the left panel to view trends")
            }
            (ChartReadiness::EmptySelection, AnalysisMode::Players) => {
                Some("Select players to compare their three-point evolution")
            }
            (ChartReadiness::EmptySelection, AnalysisMode::Shooters) => {
                Some("Top 10 three-point shooters shown by default")
            }
            (ChartReadiness::NoDataInRange, AnalysisMode::Shooters) => {
                Some("No ranked shooters match the current selection")
            }
            (ChartReadiness::NoDataInRange, _) => Some("No data available for selected time range"),
        }
    }
}

/// One plotted season with the figures shown in its tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    /// Value of the active chart metric
    pub value: f64,
    pub attempts: u32,
    pub made: u32,
    pub percentage: f64,
    pub three_point_rate: f64,
    pub efg_percentage: f64,
    /// Change in three-point rate versus the entity's previous season
    pub rate_delta: f64,
    /// Three-point rate minus the entity's first recorded season
    pub progression: f64,
    pub impact_score: f64,
    pub consistency: f64,
    pub true_shooting: f64,
}

/// One line on a trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub key: String,
    pub color: String,
    /// League-wide aggregate rather than one entity; its points carry
    /// rates only, so tooltips skip the shot counts
    pub league: bool,
    pub points: Vec<TrendPoint>,
}

/// One bar of the elite-shooter chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingBar {
    /// 1-based position in the full ranking
    pub rank: usize,
    pub player: String,
    pub percentage: f64,
    pub made: u32,
    pub attempts: u32,
    pub years_active: String,
    pub seasons_played: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartData {
    Trend {
        metric: ChartMetric,
        y_label: String,
        series: Vec<Series>,
    },
    Ranking {
        bars: Vec<RankingBar>,
    },
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Career and in-window figures for one compared player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerPanel {
    pub player: String,
    pub color: String,
    pub career: CareerSummary,
    pub window: WindowAggregate,
    /// Where the in-window average rate sits among pooled player seasons
    pub rate_percentile: Option<f64>,
}

/// Franchise and in-window figures for one plotted team. The window
/// aggregate honours the season filters, like the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamPanel {
    pub team: String,
    pub color: String,
    pub summary: TeamSummary,
    pub window: WindowAggregate,
    /// Where the in-window average rate sits among pooled team seasons
    pub rate_percentile: Option<f64>,
}

/// The narrative frame around the chart for the current scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneView {
    pub scene: Scene,
    /// 1-based, for the "Scene N of M" counter
    pub position: usize,
    pub total: usize,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Year span the scene chart covers
    pub window: YearWindow,
    /// League-level chart for the guided scenes; `None` in the explorer
    pub chart: ChartData,
    /// Headline figures computed from the league data
    pub facts: Vec<Insight>,
    /// Whether the timeline playback controls belong to this scene
    pub has_timeline: bool,
}

impl SceneView {
    /// Frame for `scene` with nothing drawn yet.
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            position: scene.index() + 1,
            total: Scene::ALL.len(),
            title: scene.title(),
            subtitle: scene.subtitle(),
            window: YearWindow::full(),
            chart: ChartData::None,
            facts: Vec::new(),
            has_timeline: scene == Scene::Evolution,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub icon: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRow {
    pub metric: BenchmarkMetric,
    pub label: &'static str,
    pub benchmarks: Benchmarks,
}

/// Everything an adapter needs to draw the dashboard for one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub mode: AnalysisMode,
    pub readiness: ChartReadiness,
    pub title: &'static str,
    pub empty_message: Option<&'static str>,
    pub window: YearWindow,
    pub chart: ChartData,
    pub legend: Vec<LegendEntry>,
    pub careers: Vec<CareerPanel>,
    pub teams: Vec<TeamPanel>,
    pub insights: Vec<Insight>,
    pub quick_stats: Vec<QuickStat>,
    pub benchmarks: Vec<BenchmarkRow>,
    pub league_trend: Vec<LeagueTrendPoint>,
    /// Selected keys with no matching entity
    pub dropped_keys: Vec<String>,
    pub scene: SceneView,
}

impl ViewModel {
    /// A view with nothing to draw, framed by `scene`.
    pub fn empty(scene: Scene, mode: AnalysisMode, window: YearWindow) -> Self {
        let readiness = ChartReadiness::EmptySelection;
        Self {
            mode,
            readiness,
            title: mode.chart_title(),
            empty_message: readiness.message(mode),
            window,
            chart: ChartData::None,
            legend: Vec::new(),
            careers: Vec::new(),
            teams: Vec::new(),
            insights: Vec::new(),
            quick_stats: Vec::new(),
            benchmarks: Vec::new(),
            league_trend: Vec::new(),
            dropped_keys: Vec::new(),
            scene: SceneView::new(scene),
        }
    }

    pub fn set_readiness(&mut self, readiness: ChartReadiness) {
        self.readiness = readiness;
        self.empty_message = readiness.message(self.mode);
    }

    pub fn is_ready(&self) -> bool {
        self.readiness == ChartReadiness::Ready
    }

    /// The chart to draw: the explorer's chart on the explorer scene, the
    /// league chart of the guided scene otherwise.
    pub fn active_chart(&self) -> &ChartData {
        match self.scene.scene {
            Scene::Explorer => &self.chart,
            _ => &self.scene.chart,
        }
    }

    /// x-axis span of [`ViewModel::active_chart`].
    pub fn active_window(&self) -> YearWindow {
        match self.scene.scene {
            Scene::Explorer => self.window,
            _ => self.scene.window,
        }
    }

    /// Number of lines or bars in the explorer chart.
    pub fn mark_count(&self) -> usize {
        match &self.chart {
            ChartData::Trend { series, .. } => series.len(),
            ChartData::Ranking { bars } => bars.len(),
            ChartData::None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_states_have_distinct_messages() {
        let empty = ChartReadiness::EmptySelection.message(AnalysisMode::Teams);
        let no_data = ChartReadiness::NoDataInRange.message(AnalysisMode::Teams);
        assert!(empty.is_some());
        assert!(no_data.is_some());
        assert_ne!(empty, no_data);
        assert_eq!(ChartReadiness::Ready.message(AnalysisMode::Players), None);
    }

    #[test]
    fn chart_data_serializes_tagged() {
        let mut vm = ViewModel::empty(Scene::Explorer, AnalysisMode::Shooters, YearWindow::full());
        vm.chart = ChartData::Ranking { bars: Vec::new() };
        let json = serde_json::to_value(&vm).unwrap();
        assert_eq!(json["chart"]["kind"], "ranking");
        assert_eq!(json["mode"], "shooters");
        assert_eq!(json["readiness"], "empty_selection");
        assert_eq!(json["title"], "Elite Shooter Performance");
        assert_eq!(json["scene"]["scene"], "explorer");
        assert_eq!(json["scene"]["position"], 5);
    }

    #[test]
    fn active_chart_follows_scene() {
        let window = YearWindow::new(2010, 2015).unwrap();
        let mut vm = ViewModel::empty(Scene::Evolution, AnalysisMode::Teams, window);
        vm.chart = ChartData::Ranking { bars: Vec::new() };
        assert_eq!(vm.active_chart(), &ChartData::None);
        assert_eq!(vm.active_window(), YearWindow::full());
        assert!(vm.scene.has_timeline);

        vm.scene = SceneView::new(Scene::Explorer);
        assert_eq!(vm.active_chart(), &vm.chart);
        assert_eq!(vm.active_window(), window);
        assert!(!vm.scene.has_timeline);
    }
}
