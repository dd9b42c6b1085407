use std::collections::HashMap;

use crate::models::{ActivityRecord, ActivityType, InsightCards, TeacherOption, TeacherSummary};

/// Denominator for the retention card: the size of a typical roster.
pub const RETENTION_ROSTER_SIZE: usize = 5;

/// Roll records up per teacher, in the order teachers first appear.
///
/// The name comes from the first record seen for each id.
pub fn teacher_summaries(records: &[&ActivityRecord]) -> Vec<TeacherSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<TeacherSummary> = Vec::new();

    for &record in records {
        let slot = *index.entry(record.teacher_id.as_str()).or_insert_with(|| {
            summaries.push(TeacherSummary {
                teacher_id: record.teacher_id.clone(),
                teacher_name: record.teacher_name.clone(),
                lessons: 0,
                quizzes: 0,
                assessments: 0,
                subjects: Vec::new(),
                classes: Vec::new(),
            });
            summaries.len() - 1
        });

        let entry = &mut summaries[slot];
        match record.activity_type {
            ActivityType::Lesson => entry.lessons += 1,
            ActivityType::Quiz => entry.quizzes += 1,
            ActivityType::Assessment => entry.assessments += 1,
        }
        push_unique(&mut entry.subjects, &record.subject);
        push_unique(&mut entry.classes, &record.class);
    }

    summaries
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}

pub fn insight_cards(summaries: &[TeacherSummary]) -> InsightCards {
    let active_teachers = summaries.len();
    let retention = (active_teachers as f64 / RETENTION_ROSTER_SIZE as f64 * 100.0).round() as u32;

    InsightCards {
        active_teachers,
        assessments_created: summaries.iter().map(|s| s.assessments).sum(),
        lessons_created: summaries.iter().map(|s| s.lessons).sum(),
        quizzes_created: summaries.iter().map(|s| s.quizzes).sum(),
        retention_rate: retention.min(100),
    }
}

pub fn teacher_options(summaries: &[TeacherSummary]) -> Vec<TeacherOption> {
    summaries
        .iter()
        .map(|s| TeacherOption {
            teacher_id: s.teacher_id.clone(),
            teacher_name: s.teacher_name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(
        teacher_id: &str,
        name: &str,
        activity_type: ActivityType,
        subject: &str,
        class: &str,
    ) -> ActivityRecord {
        ActivityRecord {
            teacher_id: teacher_id.to_string(),
            teacher_name: name.to_string(),
            activity_type,
            created_at: Utc.with_ymd_and_hms(2025, 2, 18, 10, 0, 0).unwrap(),
            created_at_text: "2025-02-18T10:00:00.000Z".to_string(),
            subject: subject.to_string(),
            class: class.to_string(),
        }
    }

    #[test]
    fn counts_accumulate_per_teacher() {
        let records = vec![
            record("T002", "Mohan Ray", ActivityType::Quiz, "Science", "Class 8"),
            record("T001", "Dilpaal", ActivityType::Lesson, "Science", "Class 7"),
            record("T002", "Mohan Ray", ActivityType::Lesson, "Maths", "Class 8"),
            record("T002", "Mohan Ray", ActivityType::Assessment, "Science", "Class 9"),
        ];
        let refs: Vec<&ActivityRecord> = records.iter().collect();

        let summaries = teacher_summaries(&refs);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].teacher_id, "T002");
        assert_eq!(summaries[0].lessons, 1);
        assert_eq!(summaries[0].quizzes, 1);
        assert_eq!(summaries[0].assessments, 1);
        assert_eq!(summaries[0].subjects, vec!["Science", "Maths"]);
        assert_eq!(summaries[0].classes, vec!["Class 8", "Class 9"]);
        assert_eq!(summaries[1].total(), 1);
    }

    #[test]
    fn first_seen_name_wins() {
        let records = vec![
            record("T001", "Dilpaal", ActivityType::Lesson, "Science", "Class 7"),
            record("T001", "Dil Paal", ActivityType::Quiz, "Science", "Class 7"),
        ];
        let refs: Vec<&ActivityRecord> = records.iter().collect();
        let summaries = teacher_summaries(&refs);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].teacher_name, "Dilpaal");
    }

    #[test]
    fn no_records_means_no_summaries() {
        assert!(teacher_summaries(&[]).is_empty());
        assert_eq!(insight_cards(&[]), InsightCards::default());
    }

    #[test]
    fn retention_is_capped() {
        let records: Vec<ActivityRecord> = (0..7)
            .map(|i| record(&format!("T{i}"), "Teacher", ActivityType::Lesson, "", "Class 7"))
            .collect();
        let refs: Vec<&ActivityRecord> = records.iter().collect();
        let summaries = teacher_summaries(&refs);

        assert_eq!(insight_cards(&summaries[..2]).retention_rate, 40);
        assert_eq!(insight_cards(&summaries[..5]).retention_rate, 100);
        assert_eq!(insight_cards(&summaries).retention_rate, 100);
        assert_eq!(insight_cards(&summaries).lessons_created, 7);
    }
}
