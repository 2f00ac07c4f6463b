use billfold_domain::InvalidDate;
use thiserror::Error;

/// Unified error type for core and storage layers.
///
/// Every variant is recoverable at the operation boundary; none is fatal to
/// the process. Persistence failures do not roll back in-memory state, so a
/// caller seeing `Storage` should warn that changes may not survive a
/// restart.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Bill not found: {0}")]
    BillNotFound(u64),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Recurring series ends before its first due date")]
    EmptySeries,
    #[error("Recurrence exceeded {cap} occurrences")]
    RecurrenceOverflow { cap: usize },
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<InvalidDate> for CoreError {
    fn from(err: InvalidDate) -> Self {
        CoreError::InvalidDate(err.to_string())
    }
}
