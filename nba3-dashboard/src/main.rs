//! The Three-Point Revolution explorer.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/dashboard.json` into `OUT_DIR`; it is
//!    embedded with `include_str!` and parsed once on mount.
//! 2. On mount: fetch the four dataset documents named in the config
//!    concurrently, then load them into an in-memory database. Any failure
//!    is fatal.
//! 3. Every selection or scene change re-projects the session into a
//!    `ViewModel` (memoized), and an effect redraws the D3 chart from it.
//!    The arrow keys step between scenes.

mod layout;

use layout::{AdvancedLayout, BasicLayout};
use nba3_chart_ui::components::{ErrorDisplay, LoadingSpinner};
use nba3_chart_ui::js_bridge;
use nba3_chart_ui::state::AppState;
use nba3_core::DataLoadError;
use nba3_db::{Database, DatasetSources};
use nba3_view::{ChartData, DashboardConfig, DataUrls, Layout, Session, Timeline};
use nba3_view::{Scene, SceneNavError};
use dioxus::prelude::*;

const DASHBOARD_CONFIG_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/dashboard.json"));

/// DOM id for the D3 chart container div.
pub(crate) const CHART_ID: &str = "nba3-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("nba3-dashboard-root"))
        .launch(App);
}

fn load_config() -> DashboardConfig {
    DashboardConfig::from_json(DASHBOARD_CONFIG_JSON).unwrap_or_else(|e| {
        log::warn!("[NBA3] session: bad dashboard config ({}), using defaults", e);
        DashboardConfig::default()
    })
}

async fn fetch_source(source_name: &str, url: &str) -> Result<String, DataLoadError> {
    log::info!("[NBA3] loader: fetching {} from {}", source_name, url);
    js_bridge::fetch_text(url)
        .await
        .map_err(|detail| DataLoadError::Fetch {
            source_name: source_name.to_string(),
            detail,
        })
}

async fn load_datasets(urls: &DataUrls) -> Result<Database, DataLoadError> {
    let (league, players, teams, shooters) = futures::try_join!(
        fetch_source("league", &urls.league),
        fetch_source("players", &urls.players),
        fetch_source("teams", &urls.teams),
        fetch_source("shooters", &urls.shooters),
    )?;

    Database::load_all(&DatasetSources {
        league: &league,
        players: &players,
        teams: &teams,
        shooters: &shooters,
    })
}

type SceneStep = fn(&mut Session) -> Result<Scene, SceneNavError>;

/// Scene move bound to a key, if any.
fn scene_step_for(key: &Key) -> Option<SceneStep> {
    match key {
        Key::ArrowLeft => Some(Session::prev_scene),
        Key::ArrowRight => Some(Session::next_scene),
        _ => None,
    }
}

/// y-axis caption and visible window for the chart scripts.
fn chart_config_json(chart: &ChartData, window: nba3_core::YearWindow) -> String {
    let y_label = match chart {
        ChartData::Trend { y_label, .. } => y_label.as_str(),
        _ => "Career Three-Point Percentage",
    };
    serde_json::json!({
        "yAxisLabel": y_label,
        "window": window,
    })
    .to_string()
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let config = use_hook(load_config);

    // ─── Effect 1: fetch and load the datasets once on mount ───
    let startup_config = config.clone();
    use_effect(move || {
        let config = startup_config.clone();
        spawn(async move {
            match load_datasets(&config.data).await {
                Ok(db) => {
                    match db.team_directory() {
                        Ok(teams) => state.team_directory.set(teams),
                        Err(e) => log::error!("[NBA3] query: team directory failed: {}", e),
                    }
                    match db.player_names() {
                        Ok(names) => state.player_names.set(names),
                        Err(e) => log::error!("[NBA3] query: player names failed: {}", e),
                    }
                    state.timeline.set(Timeline::new(config.default_window));
                    state.session.set(Some(Session::new(db, config)));
                }
                Err(e) => {
                    log::error!("[NBA3] loader: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Error loading data: {}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    let view = use_memo(move || state.session.read().as_ref().map(Session::project));

    // ─── Effect 2: redraw the chart whenever the view changes ───
    use_effect(move || {
        let Some(vm) = view() else {
            return;
        };
        js_bridge::init_charts();

        let chart = vm.active_chart();
        if matches!(chart, ChartData::None) {
            js_bridge::destroy_chart(CHART_ID);
            return;
        }
        let data_json = match serde_json::to_string(chart) {
            Ok(json) => json,
            Err(e) => {
                log::error!("[NBA3] bridge: failed to serialize chart data: {}", e);
                return;
            }
        };
        let config_json = chart_config_json(chart, vm.active_window());
        match chart {
            ChartData::Ranking { .. } => {
                js_bridge::render_ranking_chart(CHART_ID, &data_json, &config_json)
            }
            _ => js_bridge::render_trend_chart(CHART_ID, &data_json, &config_json),
        }
    });

    // ─── Effect 3: keep the timeline inside the drawn window ───
    use_effect(move || {
        if let Some(window) = view().map(|vm| vm.active_window()) {
            state.timeline.write().retarget(window);
        }
    });

    // ─── Effect 4: mark the playback year on the chart ───
    use_effect(move || {
        let year = state.timeline.read().current_year();
        js_bridge::highlight_year(CHART_ID, year);
    });

    let body = match view() {
        None => rsx! {},
        Some(vm) => match config.layout {
            Layout::Basic => rsx! { BasicLayout { vm } },
            Layout::Advanced => rsx! { AdvancedLayout { vm } },
        },
    };

    let on_key = move |evt: KeyboardEvent| {
        if let Some(step) = scene_step_for(&evt.key()) {
            state.update(|s| {
                if let Err(e) = step(s) {
                    log::debug!("[NBA3] session: {}", e);
                }
            });
        }
    };

    rsx! {
        div {
            style: "max-width: 1280px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif; outline: none;",
            tabindex: "0",
            onkeydown: on_key,

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                {body}
            }
        }
    }
}
