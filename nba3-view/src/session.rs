//! The session: one selection state bound to the loaded datasets.
//!
//! Render adapters hold a [`Session`] and only ever call its mutations and
//! [`Session::project`]; they never touch the selection state directly.

use crate::config::DashboardConfig;
use crate::projector::project;
use crate::scene::{Scene, SceneNavError};
use crate::selection::{AnalysisMode, ChartMetric, SelectionState, TeamSeasonFilter};
use crate::view_model::ViewModel;
use nba3_core::{Era, InvalidWindowError};
use nba3_db::Database;

#[derive(Clone)]
pub struct Session {
    db: Database,
    config: DashboardConfig,
    state: SelectionState,
}

impl Session {
    /// A fresh session over `db`, opened on the configured default window.
    pub fn new(db: Database, config: DashboardConfig) -> Self {
        let state = SelectionState::new(config.default_window);
        Self { db, config, state }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Recompute the view model for the current state.
    pub fn project(&self) -> ViewModel {
        project(&self.state, &self.db, &self.config)
    }

    /// Jump straight to a scene, e.g. from a navigation pill.
    pub fn go_to_scene(&mut self, index: usize) -> Result<(), SceneNavError> {
        self.state.go_to_scene(index).inspect_err(|e| {
            log::warn!("[NBA3] session: {}", e);
        })
    }

    /// Step forward; a no-op error on the last scene.
    pub fn next_scene(&mut self) -> Result<Scene, SceneNavError> {
        let scene = self.state.next_scene()?;
        log::debug!("[NBA3] session: scene -> {:?}", scene);
        Ok(scene)
    }

    pub fn prev_scene(&mut self) -> Result<Scene, SceneNavError> {
        let scene = self.state.prev_scene()?;
        log::debug!("[NBA3] session: scene -> {:?}", scene);
        Ok(scene)
    }

    pub fn toggle_team(&mut self, name: &str) -> bool {
        self.state.toggle_team(name)
    }

    pub fn toggle_player(&mut self, name: &str) -> bool {
        self.state.toggle_player(name)
    }

    pub fn clear_teams(&mut self) {
        self.state.clear_teams();
    }

    pub fn clear_players(&mut self) {
        self.state.clear_players();
    }

    pub fn set_mode(&mut self, mode: AnalysisMode) {
        log::debug!("[NBA3] session: mode -> {:?}", mode);
        self.state.set_mode(mode);
    }

    pub fn set_window(&mut self, start: i32, end: i32) -> Result<(), InvalidWindowError> {
        self.state.set_window(start, end).inspect_err(|e| {
            log::warn!("[NBA3] session: {}", e);
        })
    }

    pub fn set_window_start(&mut self, start: i32) -> Result<(), InvalidWindowError> {
        self.set_window(start, self.state.window().end())
    }

    pub fn set_window_end(&mut self, end: i32) -> Result<(), InvalidWindowError> {
        self.set_window(self.state.window().start(), end)
    }

    pub fn apply_era(&mut self, era: Era) {
        self.state.apply_era(era);
    }

    pub fn set_chart_metric(&mut self, metric: Option<ChartMetric>) {
        self.state.set_chart_metric(metric);
    }

    pub fn set_team_filter(&mut self, filter: TeamSeasonFilter) {
        self.state.set_team_filter(filter);
    }
}
