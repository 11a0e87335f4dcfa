use thiserror::Error;

/// Error type for binstat-stats operations.
#[derive(Error, Debug)]
pub enum StatsError {
    /// No records were produced across all sources; there is nothing to
    /// aggregate. A terminal condition for the run, not a crash.
    #[error("No raw-data records found in any source")]
    EmptyCorpus,
}

/// Result type alias for binstat-stats operations.
pub type Result<T> = std::result::Result<T, StatsError>;
