//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`
//! and mutate the dashboard only through [`AppState::update`], which forwards to
//! the owned [`Session`].

use dioxus::core::Task;
use dioxus::prelude::*;
use nba3_db::models::TeamListing;
use nba3_view::{Session, Timeline};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Session over the loaded datasets (None until loaded)
    pub session: Signal<Option<Session>>,
    /// Whether the datasets are still loading
    pub loading: Signal<bool>,
    /// Fatal load error, shown full-screen
    pub error_msg: Signal<Option<String>>,
    /// Teams with conference and division, for the team selector
    pub team_directory: Signal<Vec<TeamListing>>,
    /// Sorted player names, for the player selector
    pub player_names: Signal<Vec<String>>,
    /// Timeline playback position
    pub timeline: Signal<Timeline>,
    /// The running playback timer, if any
    pub playback_task: Signal<Option<Task>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            team_directory: Signal::new(Vec::new()),
            player_names: Signal::new(Vec::new()),
            timeline: Signal::new(Timeline::new(Default::default())),
            playback_task: Signal::new(None),
        }
    }

    /// Apply a mutation to the session. A no-op before the data has loaded.
    pub fn update(mut self, f: impl FnOnce(&mut Session)) {
        if let Some(session) = self.session.write().as_mut() {
            f(session);
        }
    }

    /// Read from the session, if loaded.
    pub fn with_session<T>(&self, f: impl FnOnce(&Session) -> T) -> Option<T> {
        self.session.read().as_ref().map(f)
    }

    /// Stop playback and cancel its timer.
    pub fn stop_playback(mut self) {
        self.timeline.write().stop();
        let task = self.playback_task.write().take();
        if let Some(task) = task {
            task.cancel();
        }
    }

    /// Drop the timer handle after its loop has ended on its own.
    pub fn finish_playback(mut self) {
        self.playback_task.set(None);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
