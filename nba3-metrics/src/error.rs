use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsError {
    /// No samples to compute over
    #[error("metric requested over an empty season series")]
    EmptySeries,

    /// A per-season metric was asked for a season that does not exist
    #[error("season index {index} out of range for series of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, MetricsError>;
