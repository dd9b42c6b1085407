use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Lesson,
    Quiz,
    Assessment,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Lesson => "lesson",
            ActivityType::Quiz => "quiz",
            ActivityType::Assessment => "assessment",
        }
    }

    /// Lenient mapping used at ingestion: anything that is not a quiz or an
    /// assessment counts as a lesson.
    pub fn from_loose(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "quiz" => ActivityType::Quiz,
            "assessment" => ActivityType::Assessment,
            _ => ActivityType::Lesson,
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selectable reporting window, anchored to the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[default]
    Week,
    Month,
    Year,
}

impl TimeRange {
    pub fn days(&self) -> i64 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Year => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
        }
    }

    /// Boundary coercion: unknown or missing values fall back to `week`.
    pub fn coerce(value: Option<&str>) -> Self {
        value
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            other => Err(format!("unknown range: {other}")),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityRecord {
    pub teacher_id: String,
    pub teacher_name: String,
    pub activity_type: ActivityType,
    pub created_at: DateTime<Utc>,
    /// `created_at` as text, fixed at normalization. Part of the record's
    /// identity and the input to ids and the completion seed.
    #[serde(skip)]
    pub created_at_text: String,
    pub subject: String,
    pub class: String,
}

/// UTC timestamp with millisecond precision, e.g. `2025-02-18T10:00:00.000Z`.
pub fn iso_millis(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherSummary {
    pub teacher_id: String,
    pub teacher_name: String,
    pub lessons: usize,
    pub quizzes: usize,
    pub assessments: usize,
    pub subjects: Vec<String>,
    pub classes: Vec<String>,
}

impl TeacherSummary {
    pub fn total(&self) -> usize {
        self.lessons + self.quizzes + self.assessments
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyActivityPoint {
    pub date: String,
    pub day: NaiveDate,
    pub lessons: usize,
    pub quizzes: usize,
    pub assessments: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassWiseBreakdown {
    pub class_name: String,
    pub assigned: usize,
    pub completed: usize,
    pub avg_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub label: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightCards {
    pub active_teachers: usize,
    pub assessments_created: usize,
    pub lessons_created: usize,
    pub quizzes_created: usize,
    pub retention_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherOption {
    pub teacher_id: String,
    pub teacher_name: String,
}

/// Everything the dashboard landing view needs for one range.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub cards: InsightCards,
    pub weekly: Vec<WeeklyActivityPoint>,
    pub ai_summaries: Vec<String>,
}

/// Per-teacher drill-down.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDetail {
    pub teacher: TeacherSummary,
    pub class_wise: Vec<ClassWiseBreakdown>,
    pub recent: Vec<RecentActivityItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn loose_activity_types_default_to_lesson() {
        assert_eq!(ActivityType::from_loose("Quiz"), ActivityType::Quiz);
        assert_eq!(ActivityType::from_loose(" ASSESSMENT "), ActivityType::Assessment);
        assert_eq!(ActivityType::from_loose("homework"), ActivityType::Lesson);
        assert_eq!(ActivityType::from_loose(""), ActivityType::Lesson);
    }

    #[test]
    fn unknown_ranges_coerce_to_week() {
        assert_eq!(TimeRange::coerce(Some("month")), TimeRange::Month);
        assert_eq!(TimeRange::coerce(Some("year")), TimeRange::Year);
        assert_eq!(TimeRange::coerce(Some("decade")), TimeRange::Week);
        assert_eq!(TimeRange::coerce(Some("YEAR")), TimeRange::Week);
        assert_eq!(TimeRange::coerce(None), TimeRange::Week);
    }

    #[test]
    fn iso_millis_always_prints_three_fraction_digits() {
        let at = Utc.with_ymd_and_hms(2025, 2, 18, 10, 0, 0).unwrap();
        assert_eq!(iso_millis(&at), "2025-02-18T10:00:00.000Z");

        let at = at + chrono::Duration::milliseconds(123);
        assert_eq!(iso_millis(&at), "2025-02-18T10:00:00.123Z");
    }
}
