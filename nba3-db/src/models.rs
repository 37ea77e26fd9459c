//! Lightweight query result structs.
//!
//! Full entities come back as [`nba3_core`] types; these cover the listings
//! and counts the selectors and logs need.

use nba3_core::Conference;
use serde::Serialize;

/// A team's name and placement, for selector lists.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeamListing {
    pub name: String,
    pub conference: Conference,
    pub division: String,
}

/// Row counts per table after a load.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct DatasetSummary {
    pub players: usize,
    pub teams: usize,
    pub seasons: usize,
    pub league_seasons: usize,
    pub elite_shooters: usize,
}
