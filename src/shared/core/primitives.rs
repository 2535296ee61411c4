use chrono::{DateTime, Utc};

/// Milliseconds since the Unix epoch, the unit stored instants are kept in.
pub type EpochMillis = i64;

pub const MILLIS_PER_HOUR: u64 = 3_600_000;

pub fn instant_from_millis(millis: EpochMillis) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}
