//! In-memory SQLite dataset repository for the three-point dashboard.
//!
//! The four static JSON documents (league seasons, player series, team
//! series with conference/division placement, and the elite-shooter
//! ranking) are parsed once at startup and loaded into an in-memory SQLite
//! database. Everything after that is read-only lookups returning typed
//! records from [`nba3_core`].
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - Loading is all-or-nothing: [`Database::load_all`] either returns a fully
//!   populated database or a [`DataLoadError`], never a partial one
//! - Lookups are exact, case-sensitive matches on the entity name
//!
//! # Usage
//!
//! ```rust
//! use nba3_db::{Database, DatasetSources};
//!
//! let sources = DatasetSources {
//!     league: r#"[{"season": 2016, "three_pt_rate": 28.5, "mid_range_rate": 30.1, "efg_percentage": 50.2}]"#,
//!     players: r#"[]"#,
//!     teams: r#"[]"#,
//!     shooters: r#"[]"#,
//! };
//! let db = Database::load_all(&sources).unwrap();
//! assert_eq!(db.league_seasons().unwrap().len(), 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;

pub use loader::DatasetSources;
pub use nba3_core::DataLoadError;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding every loaded dataset.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new, empty in-memory database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Small but complete JSON documents shared by the crate's tests.

    use crate::{Database, DatasetSources};

    pub const LEAGUE_JSON: &str = r#"[
        {"season": 2004, "three_pt_rate": 18.7, "mid_range_rate": 38.2, "efg_percentage": 47.1},
        {"season": 2005, "three_pt_rate": 19.6, "mid_range_rate": 37.5, "efg_percentage": 47.9},
        {"season": 2006, "three_pt_rate": 20.4, "mid_range_rate": 36.8, "efg_percentage": 48.6}
    ]"#;

    pub const PLAYERS_JSON: &str = r#"[
        {"player": "Stephen Curry", "seasons": [
            {"season": 2010, "three_pt_shots": 380, "made_threes": 166, "three_pt_percentage": 43.7,
             "total_shots": 1143, "mid_range_rate": 28.0, "efg_percentage": 54.0},
            {"season": 2016, "three_pt_shots": 886, "made_threes": 402, "three_pt_percentage": 45.4,
             "total_shots": 1598, "mid_range_rate": 12.1, "efg_percentage": 63.0}
        ]},
        {"player": "Ray Allen", "seasons": [
            {"season": 2006, "three_pt_shots": 653, "made_threes": 269, "three_pt_percentage": 41.2,
             "total_shots": 1500, "mid_range_rate": 30.0, "efg_percentage": 53.0}
        ]}
    ]"#;

    pub const TEAMS_JSON: &str = r#"[
        {"team": "Celtics", "conference": "Eastern Conference", "division": "Atlantic", "seasons": [
            {"season": 2012, "three_pt_shots": 1400, "three_pt_made": 530, "three_pt_percentage": 37.9,
             "total_shots": 6500, "mid_range_rate": 31.0, "efg_percentage": 49.8, "wins": 39, "playoffs": true}
        ]},
        {"team": "Knicks", "conference": "Eastern", "division": "Atlantic", "seasons": []},
        {"team": "Heat", "conference": "Eastern", "division": "Southeast", "seasons": []},
        {"team": "Warriors", "conference": "Western Conference", "division": "Pacific", "seasons": [
            {"season": 2011, "three_pt_shots": 1600, "three_pt_made": 600, "three_pt_percentage": 37.5,
             "total_shots": 6900, "mid_range_rate": 29.0, "efg_percentage": 50.1, "wins": 36, "playoffs": false},
            {"season": 2010, "three_pt_shots": 1500, "three_pt_made": 560, "three_pt_percentage": 37.3,
             "total_shots": 6800, "mid_range_rate": 30.0, "efg_percentage": 49.9}
        ]}
    ]"#;

    pub const SHOOTERS_JSON: &str = r#"[
        {"player": "Stephen Curry", "career_three_pt_percentage": 44.1, "career_three_pt_made": 3000,
         "career_three_pt_attempts": 6800, "years_active": "2010-2024", "seasons_played": 15},
        {"player": "Ray Allen", "career_three_pt_percentage": 40.0, "career_three_pt_made": 2100,
         "career_three_pt_attempts": 5250, "years_active": "2004-2014", "seasons_played": 11}
    ]"#;

    pub fn sample_sources() -> DatasetSources<'static> {
        DatasetSources {
            league: LEAGUE_JSON,
            players: PLAYERS_JSON,
            teams: TEAMS_JSON,
            shooters: SHOOTERS_JSON,
        }
    }

    pub fn sample_db() -> Database {
        Database::load_all(&sample_sources()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        assert!(Database::new().is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = fixtures::sample_db();
        let db2 = db.clone();
        assert_eq!(
            db.player_names().unwrap(),
            db2.player_names().unwrap(),
            "Clone should see same data via shared Rc"
        );
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.player_names().unwrap().is_empty());
        assert!(db.league_seasons().unwrap().is_empty());
    }
}
