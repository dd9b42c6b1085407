use std::collections::HashMap;

use crate::models::{ActivityRecord, ClassWiseBreakdown, RecentActivityItem};

/// Classes reported in a breakdown, in display order.
pub const CANONICAL_CLASSES: [&str; 4] = ["Class 7", "Class 8", "Class 9", "Class 10"];

/// Deterministic stand-in for completion data: the sum of the UTF-16 code
/// units of `teacher_id + class + created_at`.
///
/// The arithmetic is part of the output contract and must not change.
pub fn completion_seed(teacher_id: &str, class: &str, created_at: &str) -> u64 {
    [teacher_id, class, created_at]
        .iter()
        .flat_map(|part| part.encode_utf16())
        .map(u64::from)
        .sum()
}

/// A record counts as completed unless its seed is divisible by three.
pub fn is_completed(teacher_id: &str, record: &ActivityRecord) -> bool {
    completion_seed(teacher_id, &record.class, &record.created_at_text) % 3 != 0
}

pub fn avg_score(completed: usize, assigned: usize) -> u32 {
    if assigned == 0 {
        return 0;
    }
    (completed as f64 / assigned as f64 * 100.0).round() as u32
}

/// Assigned and pseudo-completed counts per canonical class for one teacher.
/// Other class labels are left out.
pub fn class_breakdown(teacher_id: &str, records: &[&ActivityRecord]) -> Vec<ClassWiseBreakdown> {
    let mut by_class: HashMap<&str, (usize, usize)> = HashMap::new();

    for &record in records.iter().filter(|r| r.teacher_id == teacher_id) {
        let entry = by_class.entry(record.class.as_str()).or_insert((0, 0));
        entry.0 += 1;
        if is_completed(teacher_id, record) {
            entry.1 += 1;
        }
    }

    let dropped: Vec<&str> = by_class
        .keys()
        .filter(|class| !CANONICAL_CLASSES.contains(*class))
        .copied()
        .collect();
    if !dropped.is_empty() {
        tracing::debug!(
            teacher_id,
            ?dropped,
            "Classes outside the canonical set left out of breakdown"
        );
    }

    CANONICAL_CLASSES
        .iter()
        .filter_map(|&class| {
            by_class.get(class).map(|&(assigned, completed)| ClassWiseBreakdown {
                class_name: class.to_string(),
                assigned,
                completed,
                avg_score: avg_score(completed, assigned),
            })
        })
        .collect()
}

/// The teacher's latest activities, newest first. Ties keep log order.
pub fn recent_activity(
    teacher_id: &str,
    records: &[ActivityRecord],
    limit: usize,
) -> Vec<RecentActivityItem> {
    let mut own: Vec<&ActivityRecord> = records
        .iter()
        .filter(|r| r.teacher_id == teacher_id)
        .collect();
    own.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    own.into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, record)| RecentActivityItem {
            id: format!("{}-{}-{}", record.teacher_id, record.created_at_text, index),
            activity_type: record.activity_type,
            label: format!("{} in {} ({})", record.activity_type, record.subject, record.class),
            at: record.created_at,
        })
        .collect()
}
