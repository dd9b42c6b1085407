use crate::models::TeacherSummary;

pub const MAX_SUMMARY_LINES: usize = 3;

const NO_ACTIVITY: &str =
    "No activity in this period. Encourage teachers to create lessons and quizzes.";
const BUILDING_UP: &str =
    "Activity is building up. Keep adding lessons and assessments to see trends.";

/// Top two teachers by `key`, highest first; ties keep input order.
fn top_two<F>(summaries: &[TeacherSummary], key: F) -> Vec<&TeacherSummary>
where
    F: Fn(&TeacherSummary) -> usize,
{
    let mut ranked: Vec<&TeacherSummary> = summaries.iter().collect();
    ranked.sort_by(|a, b| key(b).cmp(&key(a)));
    ranked.truncate(2);
    ranked
}

fn joined_names(teachers: &[&TeacherSummary]) -> String {
    teachers
        .iter()
        .map(|t| t.teacher_name.as_str())
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Up to two distinct `Class ...` labels taught by the given teachers.
fn class_prefix(teachers: &[&TeacherSummary]) -> String {
    let mut labels: Vec<&str> = Vec::new();
    for class in teachers.iter().flat_map(|t| t.classes.iter()) {
        if !labels.contains(&class.as_str()) {
            labels.push(class);
        }
    }

    let labels: Vec<&str> = labels
        .into_iter()
        .filter(|label| label.starts_with("Class"))
        .take(2)
        .collect();

    if labels.is_empty() {
        "Teachers".to_string()
    } else {
        labels.join(", ")
    }
}

/// Heuristic one-line takeaways for the dashboard. Always returns between one
/// and three lines.
pub fn insight_summaries(summaries: &[TeacherSummary]) -> Vec<String> {
    if summaries.is_empty() {
        return vec![NO_ACTIVITY.to_string()];
    }

    let mut lines = Vec::new();

    let total_quizzes: usize = summaries.iter().map(|s| s.quizzes).sum();
    if total_quizzes > 0 && summaries.len() >= 2 {
        let leaders = top_two(summaries, |s| s.quizzes);
        let leader_quizzes: usize = leaders.iter().map(|s| s.quizzes).sum();
        let share = (leader_quizzes as f64 / total_quizzes as f64 * 100.0).round() as u32;
        lines.push(format!(
            "{} {} created {}% of quizzes this period.",
            class_prefix(&leaders),
            joined_names(&leaders),
            share
        ));
    }

    let total_lessons: usize = summaries.iter().map(|s| s.lessons).sum();
    if total_lessons > 0 && summaries.len() >= 2 {
        let leaders = top_two(summaries, |s| s.lessons);
        lines.push(format!(
            "{} lead in lessons created this period.",
            joined_names(&leaders)
        ));
    }

    if lines.is_empty() {
        lines.push(BUILDING_UP.to_string());
    }

    lines.truncate(MAX_SUMMARY_LINES);
    lines
}
