//! Core types for NBA three-point shooting data.
//!
//! Everything here is plain data: season records, the entities that own
//! them, the league-wide aggregates and the precomputed shooter ranking.
//! Records are deserialized straight from the dashboard's JSON documents.

pub mod entity;
pub mod error;
pub mod league;
pub mod season;
pub mod window;

pub use entity::{Conference, PlayerEntity, TeamEntity};
pub use error::{DataLoadError, InvalidWindowError, LookupMiss, RecordViolation};
pub use league::{EliteShooter, LeagueSeasonRecord};
pub use season::SeasonRecord;
pub use window::{Era, YearWindow, MAX_YEAR, MIN_YEAR};
