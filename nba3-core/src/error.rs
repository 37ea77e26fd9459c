//! Error taxonomy shared by the repository, metrics and view crates.
use thiserror::Error;

/// A season record that parsed but breaks a data-model invariant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordViolation {
    /// Season year outside the supported range
    #[error("season {0} outside supported range 2004-2024")]
    YearOutOfRange(i32),

    /// More threes made than attempted
    #[error("three_pt_made ({made}) exceeds three_pt_attempts ({attempts})")]
    MadeExceedsAttempts { made: u32, attempts: u32 },
}

/// Fatal startup error: one or more datasets could not be loaded.
///
/// Loading is all-or-nothing, so any variant means no dataset is exposed.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// A required document was not provided (or was empty)
    #[error("required dataset '{0}' is missing")]
    MissingSource(String),

    /// A document failed to fetch
    #[error("failed to fetch dataset '{source_name}': {detail}")]
    Fetch { source_name: String, detail: String },

    /// A document is not valid JSON or lacks a required field
    #[error("dataset '{source_name}' is malformed: {detail}")]
    Malformed { source_name: String, detail: String },

    /// A record parsed but violates a data-model invariant
    #[error("dataset '{source_name}', entity '{entity}': {violation}")]
    InvalidRecord {
        source_name: String,
        entity: String,
        violation: RecordViolation,
    },

    /// An entity key or an entity's season year appears twice
    #[error("dataset '{source_name}' contains duplicate {what}")]
    Duplicate { source_name: String, what: String },

    /// The backing store rejected the data
    #[error("dataset storage failed: {0}")]
    Storage(String),
}

/// A selected key that no longer matches any entity.
///
/// Never fatal; the projector drops the key and reports it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no {kind} named '{key}'")]
pub struct LookupMiss {
    pub kind: &'static str,
    pub key: String,
}

/// A time window that is inverted or leaves the supported year range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid time window {start}-{end} (must satisfy 2004 <= start <= end <= 2024)")]
pub struct InvalidWindowError {
    pub start: i32,
    pub end: i32,
}
