use std::collections::HashSet;

use crate::models::{ActivityRecord, ActivityType};

/// Two records with equal keys describe the same activity. The timestamp is
/// compared as its normalized text.
type IdentityKey<'a> = (&'a str, ActivityType, &'a str, &'a str, &'a str);

fn identity(record: &ActivityRecord) -> IdentityKey<'_> {
    (
        &record.teacher_id,
        record.activity_type,
        &record.created_at_text,
        &record.subject,
        &record.class,
    )
}

/// Drop every record whose identity was already seen, keeping first occurrences in order.
pub fn deduplicate(records: &[ActivityRecord]) -> Vec<ActivityRecord> {
    let mut seen: HashSet<IdentityKey<'_>> = HashSet::with_capacity(records.len());
    records
        .iter()
        .filter(|record| seen.insert(identity(*record)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::iso_millis;
    use crate::seed;
    use chrono::{TimeZone, Utc};

    fn record(teacher_id: &str, hour: u32, class: &str) -> ActivityRecord {
        let created_at = Utc.with_ymd_and_hms(2025, 2, 18, hour, 0, 0).unwrap();
        ActivityRecord {
            teacher_id: teacher_id.to_string(),
            teacher_name: "Dilpaal".to_string(),
            activity_type: ActivityType::Lesson,
            created_at,
            created_at_text: iso_millis(&created_at),
            subject: "Science".to_string(),
            class: class.to_string(),
        }
    }

    #[test]
    fn collapses_exact_duplicates_in_first_seen_order() {
        let records = vec![
            record("T001", 10, "Class 7"),
            record("T002", 10, "Class 7"),
            record("T001", 10, "Class 7"),
            record("T001", 11, "Class 7"),
            record("T001", 10, "Class 8"),
        ];

        let unique = deduplicate(&records);
        assert_eq!(unique.len(), 4);
        assert_eq!(unique[0], records[0]);
        assert_eq!(unique[1], records[1]);
        assert_eq!(unique[2], records[3]);
        assert_eq!(unique[3], records[4]);
    }

    #[test]
    fn name_is_not_part_of_identity() {
        let mut renamed = record("T001", 10, "Class 7");
        renamed.teacher_name = "D. Paal".to_string();
        let unique = deduplicate(&[record("T001", 10, "Class 7"), renamed]);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].teacher_name, "Dilpaal");
    }

    #[test]
    fn timestamp_text_decides_identity() {
        let millis = record("T001", 10, "Class 7");
        let mut seconds = millis.clone();
        seconds.created_at_text = "2025-02-18T10:00:00Z".to_string();
        assert_eq!(millis.created_at, seconds.created_at);
        assert_eq!(deduplicate(&[millis, seconds]).len(), 2);
    }

    #[test]
    fn deduplication_is_a_fixed_point() {
        let raw = seed::records(Utc::now());
        let once = deduplicate(&raw);
        let twice = deduplicate(&once);
        assert_eq!(once, twice);
        assert_eq!(raw.len(), 37);
        assert_eq!(once.len(), 34);
    }

    #[test]
    fn empty_input_is_fine() {
        assert!(deduplicate(&[]).is_empty());
    }
}
