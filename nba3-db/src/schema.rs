//! SQL schema definitions for the in-memory SQLite database.

/// Stored `seasons.entity_kind` value for player rows.
pub const PLAYER_KIND: &str = "player";
/// Stored `seasons.entity_kind` value for team rows.
pub const TEAM_KIND: &str = "team";

/// Returns the full SQL schema as a single batch string.
///
/// - `players` / `teams` - entity keys (teams carry conference and division)
/// - `seasons` - one row per entity per year, keyed by `(entity_kind, entity_name, year)`
///   so a duplicate year inside one entity is rejected by the store itself
/// - `league_seasons` - league-wide aggregates, one row per year
/// - `elite_shooters` - precomputed ranking; `position` preserves document order
///
/// Text comparisons use SQLite's default BINARY collation, which keeps
/// name lookups case-sensitive.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS players (
        name TEXT PRIMARY KEY
    );

    CREATE TABLE IF NOT EXISTS teams (
        name TEXT PRIMARY KEY,
        conference TEXT NOT NULL,
        division TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_teams_conference ON teams(conference);

    CREATE TABLE IF NOT EXISTS seasons (
        entity_kind TEXT NOT NULL,
        entity_name TEXT NOT NULL,
        year INTEGER NOT NULL,
        three_pt_attempts INTEGER NOT NULL,
        three_pt_made INTEGER NOT NULL,
        three_pt_percentage REAL NOT NULL,
        total_shots INTEGER NOT NULL,
        mid_range_rate REAL NOT NULL,
        efg_percentage REAL NOT NULL,
        three_pt_rate REAL,
        fg_percentage REAL,
        wins INTEGER,
        playoffs INTEGER,
        PRIMARY KEY (entity_kind, entity_name, year)
    );

    CREATE TABLE IF NOT EXISTS league_seasons (
        year INTEGER PRIMARY KEY,
        three_pt_rate REAL NOT NULL,
        mid_range_rate REAL NOT NULL,
        efg_percentage REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS elite_shooters (
        position INTEGER PRIMARY KEY,
        player TEXT NOT NULL UNIQUE,
        career_three_pt_percentage REAL NOT NULL,
        career_three_pt_made INTEGER NOT NULL,
        career_three_pt_attempts INTEGER NOT NULL,
        years_active TEXT NOT NULL,
        seasons_played INTEGER NOT NULL
    );
    "#
}
