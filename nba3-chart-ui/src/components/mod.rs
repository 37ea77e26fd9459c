//! Reusable Dioxus RSX components for the three-point dashboard.

mod chart_container;
mod chart_header;
mod chart_metric_selector;
mod era_buttons;
mod error_display;
mod insights_panel;
mod league_timeline;
mod legend;
mod loading_spinner;
mod mode_tabs;
mod playback_button;
mod player_selector;
mod quick_stats;
mod scene_nav;
mod stats_panel;
mod team_filter_toggles;
mod team_selector;
mod year_range;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use chart_metric_selector::ChartMetricSelector;
pub use era_buttons::EraButtons;
pub use error_display::ErrorDisplay;
pub use insights_panel::InsightsPanel;
pub use league_timeline::LeagueTimeline;
pub use legend::Legend;
pub use loading_spinner::LoadingSpinner;
pub use mode_tabs::ModeTabs;
pub use playback_button::PlaybackButton;
pub use player_selector::PlayerSelector;
pub use quick_stats::QuickStats;
pub use scene_nav::SceneNav;
pub use stats_panel::StatsPanel;
pub use team_filter_toggles::TeamFilterToggles;
pub use team_selector::TeamSelector;
pub use year_range::YearRange;
