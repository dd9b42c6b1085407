use std::fmt::Write;

use crate::engine::InsightsEngine;
use crate::models::{TeacherSummary, TimeRange};

/// Teachers by total activity, busiest first.
pub fn rank_by_activity(summaries: &[TeacherSummary]) -> Vec<&TeacherSummary> {
    let mut ranked: Vec<&TeacherSummary> = summaries.iter().collect();
    ranked.sort_by(|a, b| b.total().cmp(&a.total()));
    ranked
}

pub fn build_report(engine: &InsightsEngine, range: TimeRange, source_label: &str) -> String {
    let now = engine.clock().now();
    let dashboard = engine.dashboard(range);
    let summaries = engine.teacher_summaries(range);

    let mut output = String::new();

    let _ = writeln!(output, "# Teacher Activity Report");
    let _ = writeln!(
        output,
        "Generated {} for the past {} (source: {})",
        now.format("%Y-%m-%d %H:%M UTC"),
        range,
        source_label
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Snapshot");
    let cards = &dashboard.cards;
    let _ = writeln!(output, "- Active teachers: {}", cards.active_teachers);
    let _ = writeln!(output, "- Lessons created: {}", cards.lessons_created);
    let _ = writeln!(output, "- Quizzes created: {}", cards.quizzes_created);
    let _ = writeln!(output, "- Assessments created: {}", cards.assessments_created);
    let _ = writeln!(output, "- Retention rate: {}%", cards.retention_rate);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Highlights");
    for line in &dashboard.ai_summaries {
        let _ = writeln!(output, "- {line}");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Last 7 Days");
    let _ = writeln!(output, "| Day | Lessons | Quizzes | Assessments | Total |");
    let _ = writeln!(output, "|-----|---------|---------|-------------|-------|");
    for point in &dashboard.weekly {
        let _ = writeln!(
            output,
            "| {} | {} | {} | {} | {} |",
            point.date, point.lessons, point.quizzes, point.assessments, point.total
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Teachers");

    if summaries.is_empty() {
        let _ = writeln!(output, "No teacher activity recorded for this window.");
    } else {
        for summary in rank_by_activity(&summaries) {
            let _ = writeln!(
                output,
                "- {} ({}): {} lessons, {} quizzes, {} assessments across {}",
                summary.teacher_name,
                summary.teacher_id,
                summary.lessons,
                summary.quizzes,
                summary.assessments,
                summary.classes.join(", ")
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ActivityStore, Clock};
    use crate::seed;
    use chrono::{TimeZone, Utc};

    fn engine() -> InsightsEngine {
        let now = Utc.with_ymd_and_hms(2025, 2, 19, 12, 0, 0).unwrap();
        InsightsEngine::new(ActivityStore::new(&seed::records(now)), Clock::Fixed(now))
    }

    #[test]
    fn report_has_every_section() {
        let report = build_report(&engine(), TimeRange::Week, "seed");
        assert!(report.starts_with("# Teacher Activity Report"));
        assert!(report.contains("Generated 2025-02-19 12:00 UTC for the past week (source: seed)"));
        assert!(report.contains("- Active teachers: 5"));
        assert!(report.contains("| Feb 18 | 2 | 3 | 0 | 5 |"));
        assert!(report.contains("## Highlights"));
        assert!(report.contains("- Dilpaal (T001):"));
    }

    #[test]
    fn empty_window_says_so() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let store = ActivityStore::new(&seed::records(now));
        let engine = InsightsEngine::new(store, Clock::Fixed(now));
        let report = build_report(&engine, TimeRange::Year, "seed");
        assert!(report.contains("No teacher activity recorded for this window."));
        assert!(report.contains("No activity in this period."));
    }

    #[test]
    fn ranking_is_by_total_activity() {
        let summaries = engine().teacher_summaries(TimeRange::Month);
        let ranked = rank_by_activity(&summaries);
        assert_eq!(ranked[0].teacher_id, "T001");
        assert!(ranked.windows(2).all(|pair| pair[0].total() >= pair[1].total()));
    }
}
