use thiserror::Error;

/// Errors raised while turning one time range into a submittable worklog.
/// These are caught per range by the row driver; everything else in the crate
/// goes through anyhow and aborts the run.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SyncError {
    #[error("invalid time range: {0:?}")]
    Format(String),

    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    #[error("time range ends on or before its start: {0:?}")]
    NonPositiveRange(String),

    #[error("ambiguous or nonexistent local time: {0}")]
    AmbiguousLocalTime(String),
}
