use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::errors::SyncError;

const CLOCK_FORMAT: &str = "%I:%M %p";
const DATE_FORMAT: &str = "%m/%d/%y";

/// One parsed `"H:MM AM/PM - H:MM AM/PM"` pair. Times of day only, the date
/// comes from the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub seconds: i64,
}

/// Splits a range string on `" - "` and parses both halves as 12-hour clock
/// times. Ranges crossing midnight are not supported and are rejected rather
/// than producing a non-positive duration.
pub fn parse_time_range(raw: &str) -> Result<TimeRange, SyncError> {
    let raw = raw.trim();
    let parts: Vec<&str> = raw.split(" - ").collect();
    if parts.len() != 2 {
        return Err(SyncError::Format(raw.to_string()));
    }
    let start = parse_clock(parts[0])?;
    let end = parse_clock(parts[1])?;
    let seconds = (end - start).num_seconds();
    if seconds <= 0 {
        return Err(SyncError::NonPositiveRange(raw.to_string()));
    }
    Ok(TimeRange {
        start,
        end,
        seconds,
    })
}

fn parse_clock(raw: &str) -> Result<NaiveTime, SyncError> {
    NaiveTime::parse_from_str(raw.trim(), CLOCK_FORMAT)
        .map_err(|_| SyncError::Format(raw.trim().to_string()))
}

/// Combines an `MM/DD/YY` date with a time of day, interprets the pair in
/// `local_tz` and renders the UTC instant the way Jira expects it, e.g.
/// `2024-07-04T18:00:00.000+0000`.
///
/// Local times the zone cannot resolve to a single instant (DST fall-back
/// repeats, spring-forward gaps) are errors, not guesses.
pub fn to_utc_timestamp(date_str: &str, time: NaiveTime, local_tz: Tz) -> Result<String, SyncError> {
    let date = NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT)
        .map_err(|_| SyncError::InvalidDate(date_str.trim().to_string()))?;
    let civil = date.and_time(time);
    let local = local_tz
        .from_local_datetime(&civil)
        .single()
        .ok_or_else(|| SyncError::AmbiguousLocalTime(civil.to_string()))?;
    Ok(local
        .with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%S%.3f%z")
        .to_string())
}
