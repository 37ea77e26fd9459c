//! The two dashboard layouts. Both render the same `ViewModel` and share
//! the scene header and the guided scenes; on the explorer scene the
//! advanced one adds the metric picker, season filters, stats, insights
//! and playback.

use crate::CHART_ID;
use nba3_chart_ui::components::{
    ChartContainer, ChartHeader, ChartMetricSelector, EraButtons, InsightsPanel, LeagueTimeline,
    Legend, ModeTabs, PlaybackButton, PlayerSelector, QuickStats, SceneNav, StatsPanel,
    TeamFilterToggles, TeamSelector, YearRange,
};
use nba3_view::{AnalysisMode, ChartData, LegendEntry, Scene, ViewModel};
use dioxus::prelude::*;

const PANEL_STYLE: &str = "background: white; border-radius: 12px; padding: 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.08);";

fn axis_label(chart: &ChartData) -> String {
    match chart {
        ChartData::Trend { y_label, .. } => y_label.clone(),
        ChartData::Ranking { .. } => "Career Three-Point Percentage".to_string(),
        ChartData::None => String::new(),
    }
}

fn legend_of(chart: &ChartData) -> Vec<LegendEntry> {
    match chart {
        ChartData::Trend { series, .. } => series
            .iter()
            .map(|s| LegendEntry {
                label: s.key.clone(),
                color: s.color.clone(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn window_label(vm: &ViewModel) -> String {
    match vm.mode {
        AnalysisMode::Shooters => "Career totals".to_string(),
        _ => format!("{} - {}", vm.window.start(), vm.window.end()),
    }
}

/// The entity picker for the current mode. Shooters mode has none.
#[component]
fn SelectorPanel(mode: AnalysisMode) -> Element {
    match mode {
        AnalysisMode::Teams => rsx! { TeamSelector {} },
        AnalysisMode::Players => rsx! { PlayerSelector {} },
        AnalysisMode::Shooters => rsx! {
            p {
                style: "font-size: 13px; color: #64748b; margin: 0;",
                "Top three-point shooters by career percentage."
            }
        },
    }
}

#[component]
fn ChartPanel(vm: ViewModel) -> Element {
    let empty_message = vm.empty_message.map(str::to_string);
    let dropped = vm.dropped_keys.join(", ");

    rsx! {
        ChartHeader {
            title: vm.title.to_string(),
            axis_label: axis_label(&vm.chart),
            window_label: window_label(&vm),
        }
        ChartContainer {
            id: CHART_ID.to_string(),
            empty_message,
        }
        Legend { entries: vm.legend.clone() }
        if !vm.dropped_keys.is_empty() {
            p {
                style: "font-size: 11px; color: #b45309; margin-top: 4px;",
                "No data found for: {dropped}"
            }
        }
    }
}

/// Scene title, narrative and navigation.
#[component]
fn SceneHeader(vm: ViewModel) -> Element {
    let scene = vm.scene.clone();
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h1 {
                style: "font-size: 26px; font-weight: 800; color: #0f172a; margin: 0 0 4px 0;",
                "{scene.title}"
            }
            p {
                style: "font-size: 14px; color: #64748b; margin: 0 0 12px 0;",
                "{scene.subtitle}"
            }
            SceneNav { scene: scene.clone() }
        }
    }
}

/// League chart and facts of a guided scene. The evolution scene also
/// carries the season timeline.
#[component]
fn GuidedScene(vm: ViewModel) -> Element {
    let scene = &vm.scene;
    let empty_message = matches!(scene.chart, ChartData::None)
        .then(|| "No league data to show for this scene.".to_string());
    let window_label = format!("{} - {}", scene.window.start(), scene.window.end());

    rsx! {
        div {
            style: "{PANEL_STYLE}",
            ChartHeader {
                title: scene.title.to_string(),
                axis_label: axis_label(&scene.chart),
                window_label,
            }
            ChartContainer {
                id: CHART_ID.to_string(),
                empty_message,
            }
            Legend { entries: legend_of(&scene.chart) }
            if scene.has_timeline {
                PlaybackButton { window: scene.window }
                LeagueTimeline { trend: vm.league_trend.clone() }
            }
            InsightsPanel { insights: scene.facts.clone() }
        }
    }
}

/// Scene header, then either the guided scene or the basic explorer.
#[component]
pub fn BasicLayout(vm: ViewModel) -> Element {
    let explorer = vm.scene.scene == Scene::Explorer;
    rsx! {
        SceneHeader { vm: vm.clone() }
        if explorer {
            BasicExplorer { vm: vm.clone() }
        } else {
            GuidedScene { vm: vm.clone() }
        }
    }
}

#[component]
pub fn AdvancedLayout(vm: ViewModel) -> Element {
    let explorer = vm.scene.scene == Scene::Explorer;
    rsx! {
        SceneHeader { vm: vm.clone() }
        if explorer {
            AdvancedExplorer { vm: vm.clone() }
        } else {
            GuidedScene { vm: vm.clone() }
        }
    }
}

/// Mode tabs, selectors, range controls and the chart.
#[component]
fn BasicExplorer(vm: ViewModel) -> Element {
    rsx! {
        ModeTabs {}
        div {
            style: "display: grid; grid-template-columns: 260px 1fr; gap: 16px;",
            div {
                style: "{PANEL_STYLE}",
                SelectorPanel { mode: vm.mode }
            }
            div {
                style: "{PANEL_STYLE}",
                ChartPanel { vm: vm.clone() }
                if vm.mode != AnalysisMode::Shooters {
                    EraButtons {}
                    YearRange {}
                }
            }
        }
    }
}

#[component]
fn AdvancedExplorer(vm: ViewModel) -> Element {
    let trend_mode = vm.mode != AnalysisMode::Shooters;

    rsx! {
        ModeTabs {}
        div {
            style: "display: grid; grid-template-columns: 260px 1fr 300px; gap: 16px;",
            div {
                style: "{PANEL_STYLE}",
                SelectorPanel { mode: vm.mode }
                if vm.mode == AnalysisMode::Teams {
                    TeamFilterToggles {}
                }
            }
            div {
                style: "{PANEL_STYLE}",
                if trend_mode {
                    ChartMetricSelector {}
                }
                ChartPanel { vm: vm.clone() }
                if trend_mode {
                    EraButtons {}
                    YearRange {}
                    PlaybackButton { window: vm.window }
                }
                InsightsPanel { insights: vm.insights.clone() }
            }
            div {
                style: "{PANEL_STYLE}",
                QuickStats { stats: vm.quick_stats.clone() }
                StatsPanel {
                    teams: vm.teams.clone(),
                    careers: vm.careers.clone(),
                    benchmarks: vm.benchmarks.clone(),
                }
            }
        }
    }
}
