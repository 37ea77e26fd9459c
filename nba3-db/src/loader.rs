//! Dataset loading: JSON documents in, validated rows out.
//!
//! Each document is parsed into the typed records from [`nba3_core`], every
//! record is checked against its invariants, and only then are rows inserted.
//! Any failure aborts the whole load.

use crate::schema::{PLAYER_KIND, TEAM_KIND};
use crate::Database;
use nba3_core::{
    DataLoadError, EliteShooter, LeagueSeasonRecord, PlayerEntity, RecordViolation, SeasonRecord,
    TeamEntity,
};
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use std::collections::HashSet;

pub(crate) const LEAGUE_SOURCE: &str = "league";
pub(crate) const PLAYERS_SOURCE: &str = "players";
pub(crate) const TEAMS_SOURCE: &str = "teams";
pub(crate) const SHOOTERS_SOURCE: &str = "shooters";

/// The raw text of the four required JSON documents.
#[derive(Debug, Clone, Copy)]
pub struct DatasetSources<'a> {
    pub league: &'a str,
    pub players: &'a str,
    pub teams: &'a str,
    pub shooters: &'a str,
}

fn storage(e: rusqlite::Error) -> DataLoadError {
    DataLoadError::Storage(e.to_string())
}

fn parse_document<T: DeserializeOwned>(source_name: &str, json: &str) -> Result<Vec<T>, DataLoadError> {
    if json.trim().is_empty() {
        return Err(DataLoadError::MissingSource(source_name.to_string()));
    }
    serde_json::from_str(json).map_err(|e| DataLoadError::Malformed {
        source_name: source_name.to_string(),
        detail: e.to_string(),
    })
}

fn invalid(source_name: &str, entity: &str, violation: RecordViolation) -> DataLoadError {
    DataLoadError::InvalidRecord {
        source_name: source_name.to_string(),
        entity: entity.to_string(),
        violation,
    }
}

/// Validate one entity's season series: record invariants plus unique years.
fn check_seasons(source_name: &str, entity: &str, seasons: &[SeasonRecord]) -> Result<(), DataLoadError> {
    let mut years = HashSet::new();
    for season in seasons {
        season
            .validate()
            .map_err(|v| invalid(source_name, entity, v))?;
        if !years.insert(season.year) {
            return Err(DataLoadError::Duplicate {
                source_name: source_name.to_string(),
                what: format!("season {} for '{}'", season.year, entity),
            });
        }
    }
    Ok(())
}

fn check_unique_key<'a>(
    seen: &mut HashSet<&'a str>,
    source_name: &str,
    key: &'a str,
) -> Result<(), DataLoadError> {
    if !seen.insert(key) {
        return Err(DataLoadError::Duplicate {
            source_name: source_name.to_string(),
            what: format!("entity '{}'", key),
        });
    }
    Ok(())
}

fn insert_seasons(
    conn: &Connection,
    kind: &str,
    entity: &str,
    seasons: &[SeasonRecord],
) -> rusqlite::Result<()> {
    let mut stmt = conn.prepare(
        "INSERT INTO seasons
         (entity_kind, entity_name, year, three_pt_attempts, three_pt_made, three_pt_percentage,
          total_shots, mid_range_rate, efg_percentage, three_pt_rate, fg_percentage, wins, playoffs)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
    )?;
    for s in seasons {
        stmt.execute(params![
            kind,
            entity,
            s.year,
            s.three_pt_attempts,
            s.three_pt_made,
            s.three_pt_percentage,
            s.total_shots,
            s.mid_range_rate,
            s.efg_percentage,
            s.three_pt_rate,
            s.fg_percentage,
            s.wins,
            s.playoffs,
        ])?;
    }
    Ok(())
}

impl Database {
    /// Parse and load all four documents into a fresh database.
    ///
    /// Either every document loads or an error is returned and the
    /// half-built database is dropped; no caller ever sees a partial dataset.
    pub fn load_all(sources: &DatasetSources<'_>) -> Result<Database, DataLoadError> {
        let db = Database::new().map_err(|e| DataLoadError::Storage(e.to_string()))?;
        db.load_league(sources.league)?;
        db.load_players(sources.players)?;
        db.load_teams(sources.teams)?;
        db.load_shooters(sources.shooters)?;
        let summary = db
            .summary()
            .map_err(|e| DataLoadError::Storage(e.to_string()))?;
        log::info!(
            "[NBA3] loader: Loaded {} players, {} teams, {} seasons, {} league seasons, {} ranked shooters",
            summary.players,
            summary.teams,
            summary.seasons,
            summary.league_seasons,
            summary.elite_shooters
        );
        Ok(db)
    }

    /// Load league-wide season aggregates.
    ///
    /// Expected format: `[{"season", "three_pt_rate", "mid_range_rate", "efg_percentage"}, ...]`
    pub fn load_league(&self, json: &str) -> Result<usize, DataLoadError> {
        let records: Vec<LeagueSeasonRecord> = parse_document(LEAGUE_SOURCE, json)?;
        let mut years = HashSet::new();
        for r in &records {
            if r.year < nba3_core::MIN_YEAR || r.year > nba3_core::MAX_YEAR {
                return Err(invalid(LEAGUE_SOURCE, "league", RecordViolation::YearOutOfRange(r.year)));
            }
            if !years.insert(r.year) {
                return Err(DataLoadError::Duplicate {
                    source_name: LEAGUE_SOURCE.to_string(),
                    what: format!("season {}", r.year),
                });
            }
        }

        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction().map_err(storage)?;
        for r in &records {
            tx.execute(
                "INSERT INTO league_seasons (year, three_pt_rate, mid_range_rate, efg_percentage)
                 VALUES (?1, ?2, ?3, ?4)",
                params![r.year, r.three_pt_rate, r.mid_range_rate, r.efg_percentage],
            )
            .map_err(storage)?;
        }
        tx.commit().map_err(storage)?;
        log::debug!("[NBA3] loader: Loaded {} league seasons", records.len());
        Ok(records.len())
    }

    /// Load per-player season series.
    ///
    /// Expected format: `[{"player": "...", "seasons": [SeasonRecord, ...]}, ...]`
    pub fn load_players(&self, json: &str) -> Result<usize, DataLoadError> {
        let players: Vec<PlayerEntity> = parse_document(PLAYERS_SOURCE, json)?;
        let mut seen = HashSet::new();
        for p in &players {
            check_unique_key(&mut seen, PLAYERS_SOURCE, &p.name)?;
            check_seasons(PLAYERS_SOURCE, &p.name, &p.seasons)?;
        }

        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction().map_err(storage)?;
        for p in &players {
            tx.execute("INSERT INTO players (name) VALUES (?1)", params![p.name])
                .map_err(storage)?;
            insert_seasons(&tx, PLAYER_KIND, &p.name, &p.seasons).map_err(storage)?;
        }
        tx.commit().map_err(storage)?;
        log::debug!("[NBA3] loader: Loaded {} players", players.len());
        Ok(players.len())
    }

    /// Load per-team season series with conference and division.
    ///
    /// Expected format:
    /// `[{"team": "...", "conference": "Eastern", "division": "Atlantic", "seasons": [...]}, ...]`
    pub fn load_teams(&self, json: &str) -> Result<usize, DataLoadError> {
        let teams: Vec<TeamEntity> = parse_document(TEAMS_SOURCE, json)?;
        let mut seen = HashSet::new();
        for t in &teams {
            check_unique_key(&mut seen, TEAMS_SOURCE, &t.name)?;
            check_seasons(TEAMS_SOURCE, &t.name, &t.seasons)?;
        }

        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction().map_err(storage)?;
        for t in &teams {
            tx.execute(
                "INSERT INTO teams (name, conference, division) VALUES (?1, ?2, ?3)",
                params![t.name, t.conference.as_str(), t.division],
            )
            .map_err(storage)?;
            insert_seasons(&tx, TEAM_KIND, &t.name, &t.seasons).map_err(storage)?;
        }
        tx.commit().map_err(storage)?;
        log::debug!("[NBA3] loader: Loaded {} teams", teams.len());
        Ok(teams.len())
    }

    /// Load the precomputed elite-shooter ranking, keeping document order.
    pub fn load_shooters(&self, json: &str) -> Result<usize, DataLoadError> {
        let shooters: Vec<EliteShooter> = parse_document(SHOOTERS_SOURCE, json)?;
        let mut seen = HashSet::new();
        for s in &shooters {
            check_unique_key(&mut seen, SHOOTERS_SOURCE, &s.player)?;
            if s.career_three_pt_made > s.career_three_pt_attempts {
                return Err(invalid(
                    SHOOTERS_SOURCE,
                    &s.player,
                    RecordViolation::MadeExceedsAttempts {
                        made: s.career_three_pt_made,
                        attempts: s.career_three_pt_attempts,
                    },
                ));
            }
        }

        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction().map_err(storage)?;
        for (position, s) in shooters.iter().enumerate() {
            tx.execute(
                "INSERT INTO elite_shooters
                 (position, player, career_three_pt_percentage, career_three_pt_made,
                  career_three_pt_attempts, years_active, seasons_played)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    position as i64,
                    s.player,
                    s.career_three_pt_percentage,
                    s.career_three_pt_made,
                    s.career_three_pt_attempts,
                    s.years_active,
                    s.seasons_played,
                ],
            )
            .map_err(storage)?;
        }
        tx.commit().map_err(storage)?;
        log::debug!("[NBA3] loader: Loaded {} ranked shooters", shooters.len());
        Ok(shooters.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_sources, LEAGUE_JSON, PLAYERS_JSON, SHOOTERS_JSON, TEAMS_JSON};

    #[test]
    fn load_all_populates_every_table() {
        let db = Database::load_all(&sample_sources()).unwrap();
        let summary = db.summary().unwrap();
        assert_eq!(summary.players, 2);
        assert_eq!(summary.teams, 4);
        assert_eq!(summary.seasons, 6);
        assert_eq!(summary.league_seasons, 3);
        assert_eq!(summary.elite_shooters, 2);
    }

    #[test]
    fn missing_document_fails_the_whole_load() {
        let sources = DatasetSources {
            shooters: "  ",
            ..sample_sources()
        };
        match Database::load_all(&sources) {
            Err(DataLoadError::MissingSource(name)) => assert_eq!(name, "shooters"),
            other => panic!("expected MissingSource, got {:?}", other.err()),
        }
    }

    #[test]
    fn season_without_year_is_malformed() {
        let players = r#"[{"player": "Nobody", "seasons": [
            {"three_pt_shots": 10, "made_threes": 4, "three_pt_percentage": 40.0,
             "total_shots": 30, "mid_range_rate": 10.0, "efg_percentage": 50.0}
        ]}]"#;
        let sources = DatasetSources {
            players,
            ..sample_sources()
        };
        assert!(matches!(
            Database::load_all(&sources),
            Err(DataLoadError::Malformed { ref source_name, .. }) if source_name == "players"
        ));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let sources = DatasetSources {
            league: "{not json",
            ..sample_sources()
        };
        assert!(matches!(
            Database::load_all(&sources),
            Err(DataLoadError::Malformed { .. })
        ));
    }

    #[test]
    fn made_over_attempts_is_rejected() {
        let teams = r#"[{"team": "Bad", "conference": "Western", "division": "Pacific", "seasons": [
            {"season": 2012, "three_pt_shots": 10, "three_pt_made": 11, "three_pt_percentage": 110.0,
             "total_shots": 50, "mid_range_rate": 20.0, "efg_percentage": 50.0}
        ]}]"#;
        let db = Database::new().unwrap();
        assert!(matches!(
            db.load_teams(teams),
            Err(DataLoadError::InvalidRecord {
                violation: RecordViolation::MadeExceedsAttempts { made: 11, attempts: 10 },
                ..
            })
        ));
    }

    #[test]
    fn year_out_of_range_is_rejected() {
        let league = r#"[{"season": 1999, "three_pt_rate": 16.0, "mid_range_rate": 40.0, "efg_percentage": 47.0}]"#;
        let db = Database::new().unwrap();
        assert!(matches!(
            db.load_league(league),
            Err(DataLoadError::InvalidRecord {
                violation: RecordViolation::YearOutOfRange(1999),
                ..
            })
        ));
    }

    #[test]
    fn duplicate_years_and_keys_are_rejected() {
        let players = r#"[{"player": "Twice", "seasons": [
            {"season": 2012, "three_pt_shots": 10, "made_threes": 4, "three_pt_percentage": 40.0,
             "total_shots": 30, "mid_range_rate": 10.0, "efg_percentage": 50.0},
            {"season": 2012, "three_pt_shots": 12, "made_threes": 5, "three_pt_percentage": 41.7,
             "total_shots": 31, "mid_range_rate": 10.0, "efg_percentage": 50.0}
        ]}]"#;
        let db = Database::new().unwrap();
        assert!(matches!(
            db.load_players(players),
            Err(DataLoadError::Duplicate { .. })
        ));

        let db = Database::new().unwrap();
        let twice = format!("[{0},{0}]", r#"{"player": "A", "seasons": []}"#);
        assert!(matches!(
            db.load_players(&twice),
            Err(DataLoadError::Duplicate { .. })
        ));
    }

    #[test]
    fn individual_loaders_report_counts() {
        let db = Database::new().unwrap();
        assert_eq!(db.load_league(LEAGUE_JSON).unwrap(), 3);
        assert_eq!(db.load_players(PLAYERS_JSON).unwrap(), 2);
        assert_eq!(db.load_teams(TEAMS_JSON).unwrap(), 4);
        assert_eq!(db.load_shooters(SHOOTERS_JSON).unwrap(), 2);
    }
}
