//! Typed read-only queries over the loaded datasets.
//!
//! Entities come back as [`nba3_core`] records with their season series
//! ascending by year, whatever order the source document used. Name matches
//! are exact and case-sensitive.

use crate::models::{DatasetSummary, TeamListing};
use crate::schema::{PLAYER_KIND, TEAM_KIND};
use crate::Database;
use anyhow::anyhow;
use nba3_core::{
    Conference, EliteShooter, LeagueSeasonRecord, PlayerEntity, SeasonRecord, TeamEntity,
};
use rusqlite::{params, Connection, Row};
use std::collections::BTreeMap;

const SEASON_COLUMNS: &str = "year, three_pt_attempts, three_pt_made, three_pt_percentage,
    total_shots, mid_range_rate, efg_percentage, three_pt_rate, fg_percentage, wins, playoffs";

fn season_from_row(row: &Row<'_>) -> rusqlite::Result<SeasonRecord> {
    Ok(SeasonRecord {
        year: row.get(0)?,
        three_pt_attempts: row.get(1)?,
        three_pt_made: row.get(2)?,
        three_pt_percentage: row.get(3)?,
        total_shots: row.get(4)?,
        mid_range_rate: row.get(5)?,
        efg_percentage: row.get(6)?,
        three_pt_rate: row.get(7)?,
        fg_percentage: row.get(8)?,
        wins: row.get(9)?,
        playoffs: row.get(10)?,
    })
}

fn seasons_for(conn: &Connection, kind: &str, name: &str) -> rusqlite::Result<Vec<SeasonRecord>> {
    let sql = format!(
        "SELECT {} FROM seasons WHERE entity_kind = ?1 AND entity_name = ?2 ORDER BY year",
        SEASON_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![kind, name], season_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn pooled_seasons(conn: &Connection, kind: &str) -> rusqlite::Result<Vec<SeasonRecord>> {
    let sql = format!(
        "SELECT {} FROM seasons WHERE entity_kind = ?1 ORDER BY entity_name, year",
        SEASON_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![kind], season_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn parse_conference(stored: &str) -> anyhow::Result<Conference> {
    Conference::parse(stored).ok_or_else(|| anyhow!("unknown conference '{}' in store", stored))
}

fn count(conn: &Connection, table: &str) -> anyhow::Result<usize> {
    let n: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })?;
    Ok(n as usize)
}

impl Database {
    // ───────────────────── Entity lookups ─────────────────────

    /// Look up a player by exact name. `None` when no such player exists.
    pub fn find_player(&self, name: &str) -> anyhow::Result<Option<PlayerEntity>> {
        let conn = self.conn.borrow();
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM players WHERE name = ?1)",
            params![name],
            |row| row.get(0),
        )?;
        if !exists {
            return Ok(None);
        }
        let seasons = seasons_for(&conn, PLAYER_KIND, name)?;
        Ok(Some(PlayerEntity {
            name: name.to_string(),
            seasons,
        }))
    }

    /// Look up a team by exact name. `None` when no such team exists.
    pub fn find_team(&self, name: &str) -> anyhow::Result<Option<TeamEntity>> {
        let conn = self.conn.borrow();
        let placement = {
            let mut stmt = conn.prepare("SELECT conference, division FROM teams WHERE name = ?1")?;
            let mut rows = stmt.query_map(params![name], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?;
            let first = rows.next().transpose()?;
            first
        };
        let Some((conference, division)) = placement else {
            return Ok(None);
        };
        let seasons = seasons_for(&conn, TEAM_KIND, name)?;
        Ok(Some(TeamEntity {
            name: name.to_string(),
            conference: parse_conference(&conference)?,
            division,
            seasons,
        }))
    }

    /// Teams of one conference grouped by division, each division ordered by
    /// team name.
    pub fn teams_by_conference(
        &self,
        conference: Conference,
    ) -> anyhow::Result<BTreeMap<String, Vec<TeamEntity>>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT name, division FROM teams WHERE conference = ?1 ORDER BY division, name",
        )?;
        let keys = stmt
            .query_map(params![conference.as_str()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut grouped: BTreeMap<String, Vec<TeamEntity>> = BTreeMap::new();
        for (name, division) in keys {
            let seasons = seasons_for(&conn, TEAM_KIND, &name)?;
            grouped.entry(division.clone()).or_default().push(TeamEntity {
                name,
                conference,
                division,
                seasons,
            });
        }
        log::info!(
            "[NBA3] query: teams_by_conference({}) returned {} divisions",
            conference,
            grouped.len()
        );
        Ok(grouped)
    }

    /// Every team's name and placement, ordered by conference, division, name.
    pub fn team_directory(&self) -> anyhow::Result<Vec<TeamListing>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT name, conference, division FROM teams ORDER BY conference, division, name",
        )?;
        let raw = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        raw.into_iter()
            .map(|(name, conference, division)| {
                Ok(TeamListing {
                    name,
                    conference: parse_conference(&conference)?,
                    division,
                })
            })
            .collect()
    }

    // ───────────────────── League + ranking ─────────────────────

    /// League-wide aggregates, ascending by year.
    pub fn league_seasons(&self) -> anyhow::Result<Vec<LeagueSeasonRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year, three_pt_rate, mid_range_rate, efg_percentage
             FROM league_seasons ORDER BY year",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(LeagueSeasonRecord {
                    year: row.get(0)?,
                    three_pt_rate: row.get(1)?,
                    mid_range_rate: row.get(2)?,
                    efg_percentage: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("[NBA3] query: league_seasons returned {} records", rows.len());
        Ok(rows)
    }

    /// The elite-shooter ranking in document order.
    pub fn elite_shooters(&self) -> anyhow::Result<Vec<EliteShooter>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT player, career_three_pt_percentage, career_three_pt_made,
                    career_three_pt_attempts, years_active, seasons_played
             FROM elite_shooters ORDER BY position",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(EliteShooter {
                    player: row.get(0)?,
                    career_three_pt_percentage: row.get(1)?,
                    career_three_pt_made: row.get(2)?,
                    career_three_pt_attempts: row.get(3)?,
                    years_active: row.get(4)?,
                    seasons_played: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("[NBA3] query: elite_shooters returned {} records", rows.len());
        Ok(rows)
    }

    // ───────────────────── Selector lists ─────────────────────

    /// All player names, sorted.
    pub fn player_names(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT name FROM players ORDER BY name")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// All team names, sorted.
    pub fn team_names(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT name FROM teams ORDER BY name")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    // ───────────────────── Pooled seasons ─────────────────────

    /// Every player season across all players, for league benchmarks.
    pub fn pooled_player_seasons(&self) -> anyhow::Result<Vec<SeasonRecord>> {
        let conn = self.conn.borrow();
        Ok(pooled_seasons(&conn, PLAYER_KIND)?)
    }

    /// Every team season across all teams, for league benchmarks.
    pub fn pooled_team_seasons(&self) -> anyhow::Result<Vec<SeasonRecord>> {
        let conn = self.conn.borrow();
        Ok(pooled_seasons(&conn, TEAM_KIND)?)
    }

    /// Row counts per table.
    pub fn summary(&self) -> anyhow::Result<DatasetSummary> {
        let conn = self.conn.borrow();
        Ok(DatasetSummary {
            players: count(&conn, "players")?,
            teams: count(&conn, "teams")?,
            seasons: count(&conn, "seasons")?,
            league_seasons: count(&conn, "league_seasons")?,
            elite_shooters: count(&conn, "elite_shooters")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures::sample_db;
    use nba3_core::Conference;

    #[test]
    fn find_player_is_case_sensitive() {
        let db = sample_db();
        let curry = db.find_player("Stephen Curry").unwrap().unwrap();
        assert_eq!(curry.seasons.len(), 2);
        assert_eq!(curry.seasons[1].three_pt_made, 402);
        assert!(db.find_player("stephen curry").unwrap().is_none());
        assert!(db.find_player("Steph").unwrap().is_none());
    }

    #[test]
    fn team_seasons_come_back_ascending() {
        let db = sample_db();
        let warriors = db.find_team("Warriors").unwrap().unwrap();
        assert_eq!(warriors.conference, Conference::Western);
        assert_eq!(warriors.division, "Pacific");
        let years: Vec<i32> = warriors.seasons.iter().map(|s| s.year).collect();
        assert_eq!(years, vec![2010, 2011]);
        assert_eq!(warriors.seasons[1].wins, Some(36));
        assert_eq!(warriors.seasons[1].playoffs, Some(false));
        assert_eq!(warriors.seasons[0].playoffs, None);
    }

    #[test]
    fn missing_team_is_none() {
        let db = sample_db();
        assert!(db.find_team("Sonics").unwrap().is_none());
    }

    #[test]
    fn teams_grouped_by_division_and_sorted() {
        let db = sample_db();
        let east = db.teams_by_conference(Conference::Eastern).unwrap();
        let divisions: Vec<&String> = east.keys().collect();
        assert_eq!(divisions, vec!["Atlantic", "Southeast"]);
        let atlantic: Vec<&str> = east["Atlantic"].iter().map(|t| t.name.as_str()).collect();
        assert_eq!(atlantic, vec!["Celtics", "Knicks"]);
        assert_eq!(east["Atlantic"][0].seasons.len(), 1);

        let west = db.teams_by_conference(Conference::Western).unwrap();
        assert_eq!(west.len(), 1);
        assert_eq!(west["Pacific"][0].name, "Warriors");
    }

    #[test]
    fn team_directory_lists_every_team() {
        let db = sample_db();
        let directory = db.team_directory().unwrap();
        let names: Vec<&str> = directory.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Celtics", "Knicks", "Heat", "Warriors"]);
        assert_eq!(directory[2].division, "Southeast");
    }

    #[test]
    fn shooters_keep_document_order() {
        let db = sample_db();
        let shooters = db.elite_shooters().unwrap();
        assert_eq!(shooters.len(), 2);
        assert_eq!(shooters[0].player, "Stephen Curry");
        assert_eq!(shooters[1].player, "Ray Allen");
        assert_eq!(shooters[1].seasons_played, 11);
    }

    #[test]
    fn league_seasons_ascending() {
        let db = sample_db();
        let years: Vec<i32> = db.league_seasons().unwrap().iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2004, 2005, 2006]);
    }

    #[test]
    fn selector_names_sorted() {
        let db = sample_db();
        assert_eq!(db.player_names().unwrap(), vec!["Ray Allen", "Stephen Curry"]);
        assert_eq!(
            db.team_names().unwrap(),
            vec!["Celtics", "Heat", "Knicks", "Warriors"]
        );
    }

    #[test]
    fn pooled_seasons_split_by_kind() {
        let db = sample_db();
        assert_eq!(db.pooled_player_seasons().unwrap().len(), 3);
        assert_eq!(db.pooled_team_seasons().unwrap().len(), 3);
    }
}
