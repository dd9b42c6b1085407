//! Built-in activity log used when no external source is available.
//!
//! It deliberately contains a few exact duplicates so that deduplication is
//! exercised on every run.

use chrono::{DateTime, Utc};

use crate::ingest::{RawActivity, TimestampText};
use crate::models::ActivityRecord;

// (teacher_id, teacher_name, activity_type, created_at, subject, class)
type SeedRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const SEED_ROWS: &[SeedRow] = &[
    ("T001", "Dilpaal", "lesson", "2025-02-18T10:00:00Z", "Science", "Class 7"),
    ("T001", "Dilpaal", "lesson", "2025-02-18T10:00:00Z", "Science", "Class 7"),
    ("T001", "Dilpaal", "quiz", "2025-02-17T14:30:00Z", "Physics", "Class 8"),
    ("T001", "Dilpaal", "assessment", "2025-02-16T09:15:00Z", "Maths", "Class 9"),
    ("T001", "Dilpaal", "lesson", "2025-02-15T11:00:00Z", "Biology", "Class 10"),
    ("T001", "Dilpaal", "quiz", "2025-02-14T16:00:00Z", "Mentoring", "Class 7"),
    ("T001", "Dilpaal", "assessment", "2025-02-13T08:00:00Z", "Business Studies", "Class 10"),
    ("T001", "Dilpaal", "lesson", "2025-02-12T10:30:00Z", "Science", "Class 8"),
    ("T001", "Dilpaal", "quiz", "2025-02-11T13:00:00Z", "Physics", "Class 9"),
    ("T002", "Mohan Ray", "lesson", "2025-02-19T09:00:00Z", "Maths", "Class 7"),
    ("T002", "Mohan Ray", "quiz", "2025-02-18T15:00:00Z", "Science", "Class 8"),
    ("T002", "Mohan Ray", "assessment", "2025-02-17T11:00:00Z", "Physics", "Class 9"),
    ("T002", "Mohan Ray", "lesson", "2025-02-16T14:00:00Z", "Biology", "Class 10"),
    ("T002", "Mohan Ray", "lesson", "2025-02-16T14:00:00Z", "Biology", "Class 10"),
    ("T002", "Mohan Ray", "quiz", "2025-02-15T10:00:00Z", "Chemistry", "Class 7"),
    ("T002", "Mohan Ray", "assessment", "2025-02-14T09:30:00Z", "Maths", "Class 8"),
    ("T003", "Malabika Sharma", "lesson", "2025-02-19T08:00:00Z", "English", "Class 7"),
    ("T003", "Malabika Sharma", "quiz", "2025-02-18T12:00:00Z", "English", "Class 8"),
    ("T003", "Malabika Sharma", "assessment", "2025-02-17T16:00:00Z", "Hindi", "Class 9"),
    ("T003", "Malabika Sharma", "lesson", "2025-02-16T10:00:00Z", "English", "Class 10"),
    ("T003", "Malabika Sharma", "quiz", "2025-02-15T11:00:00Z", "Hindi", "Class 7"),
    ("T003", "Malabika Sharma", "assessment", "2025-02-14T14:00:00Z", "English", "Class 8"),
    ("T004", "Ashish", "lesson", "2025-02-18T09:30:00Z", "Maths", "Class 9"),
    ("T004", "Ashish", "quiz", "2025-02-17T13:00:00Z", "Maths", "Class 10"),
    ("T004", "Ashish", "quiz", "2025-02-17T13:00:00Z", "Maths", "Class 10"),
    ("T004", "Ashish", "assessment", "2025-02-16T15:00:00Z", "Maths", "Class 7"),
    ("T004", "Ashish", "lesson", "2025-02-15T10:00:00Z", "Maths", "Class 8"),
    ("T005", "Varun", "lesson", "2025-02-19T11:00:00Z", "Science", "Class 7"),
    ("T005", "Varun", "quiz", "2025-02-18T14:00:00Z", "Science", "Class 8"),
    ("T005", "Varun", "assessment", "2025-02-17T09:00:00Z", "Physics", "Class 9"),
    ("T005", "Varun", "lesson", "2025-02-16T12:00:00Z", "Chemistry", "Class 10"),
    ("T005", "Varun", "quiz", "2025-02-15T16:00:00Z", "Biology", "Class 7"),
    ("T001", "Dilpaal", "lesson", "2025-02-10T10:00:00Z", "Science", "Class 7"),
    ("T002", "Mohan Ray", "quiz", "2025-02-10T14:00:00Z", "Maths", "Class 9"),
    ("T003", "Malabika Sharma", "assessment", "2025-02-11T09:00:00Z", "English", "Class 10"),
    ("T004", "Ashish", "lesson", "2025-02-11T11:00:00Z", "Maths", "Class 9"),
    ("T005", "Varun", "quiz", "2025-02-12T15:00:00Z", "Science", "Class 8"),
];

pub fn raw_rows() -> impl Iterator<Item = RawActivity<'static>> {
    SEED_ROWS.iter().map(
        |&(teacher_id, teacher_name, activity_type, created_at, subject, class)| RawActivity {
            teacher_id,
            teacher_name,
            activity_type,
            created_at,
            subject,
            class,
        },
    )
}

/// The seed log, normalized but not yet deduplicated.
pub fn records(now: DateTime<Utc>) -> Vec<ActivityRecord> {
    raw_rows()
        .enumerate()
        .filter_map(|(index, raw)| raw.normalize(index + 1, now, TimestampText::Verbatim))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_seed_row_normalizes() {
        let now = Utc::now();
        let records = records(now);
        assert_eq!(records.len(), SEED_ROWS.len());
        assert!(records.iter().all(|r| r.created_at != now));
        assert!(records.iter().all(|r| r.teacher_id.starts_with('T')));
    }

    #[test]
    fn seed_timestamps_keep_their_literal_text() {
        let records = records(Utc::now());
        for (record, row) in records.iter().zip(SEED_ROWS) {
            assert_eq!(record.created_at_text, row.3);
        }
    }
}
