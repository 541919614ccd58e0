use chrono::{DateTime, Duration, Utc};

/// Timestamp to store as `updated_at` when a row changes.
///
/// Never earlier than one microsecond past the previous value, so two
/// updates landing inside the same clock tick still order strictly.
/// Microseconds match the resolution of Postgres `TIMESTAMPTZ`.
pub fn next_updated_at(previous: DateTime<Utc>) -> DateTime<Utc> {
    let floor = previous + Duration::microseconds(1);
    Utc::now().max(floor)
}
