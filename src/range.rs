use chrono::{DateTime, Duration, Utc};

use crate::models::{ActivityRecord, TimeRange};

/// `[now - range.days(), now]`, both ends inclusive.
pub fn window(range: TimeRange, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    (now - Duration::days(range.days()), now)
}

pub fn filter_by_range(
    records: &[ActivityRecord],
    range: TimeRange,
    now: DateTime<Utc>,
) -> Vec<&ActivityRecord> {
    let (start, end) = window(range, now);
    records
        .iter()
        .filter(|record| record.created_at >= start && record.created_at <= end)
        .collect()
}
