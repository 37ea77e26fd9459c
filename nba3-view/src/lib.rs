//! Selection state, view projection and playback for the three-point
//! dashboard.
//!
//! The update loop is unidirectional: a user action mutates the
//! [`SelectionState`] (through a [`Session`]), [`project`] rebuilds the
//! [`ViewModel`] from that state and the loaded [`nba3_db::Database`], and a
//! render adapter draws the result.
//!
//! ```rust,ignore
//! let mut session = Session::new(db, DashboardConfig::default());
//! session.toggle_team("Warriors");
//! session.apply_era(Era::CurryEra);
//! let vm = session.project();
//! ```

pub mod config;
pub mod playback;
pub mod projector;
pub mod scene;
pub mod selection;
pub mod session;
pub mod view_model;

pub use config::{ConfigError, DashboardConfig, DataUrls, Layout, DEFAULT_PALETTE};
pub use playback::Timeline;
pub use projector::project;
pub use scene::{Scene, SceneNavError};
pub use selection::{AnalysisMode, ChartMetric, KeySelection, SelectionState, TeamSeasonFilter};
pub use session::Session;
pub use nba3_metrics::LeagueTrendPoint;
pub use view_model::{
    BenchmarkRow, CareerPanel, ChartData, ChartReadiness, Insight, LegendEntry, QuickStat,
    RankingBar, SceneView, Series, TeamPanel, TrendPoint, ViewModel,
};

#[cfg(test)]
pub(crate) mod fixtures {
    use nba3_db::{Database, DatasetSources};

    pub const LEAGUE_JSON: &str = include_str!("../tests/data/league.json");
    pub const PLAYERS_JSON: &str = include_str!("../tests/data/players.json");
    pub const TEAMS_JSON: &str = include_str!("../tests/data/teams.json");
    pub const SHOOTERS_JSON: &str = include_str!("../tests/data/shooters.json");

    pub fn sample_db() -> Database {
        Database::load_all(&DatasetSources {
            league: LEAGUE_JSON,
            players: PLAYERS_JSON,
            teams: TEAMS_JSON,
            shooters: SHOOTERS_JSON,
        })
        .unwrap()
    }
}
