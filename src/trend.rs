use chrono::{DateTime, Duration, Utc};

use crate::models::{ActivityRecord, ActivityType, WeeklyActivityPoint};

pub const TREND_DAYS: i64 = 7;

/// Daily counts for the seven UTC days ending today, oldest first.
///
/// The trailing week is always reported, whatever window `records` was
/// filtered with.
pub fn weekly_activity(
    records: &[&ActivityRecord],
    now: DateTime<Utc>,
) -> Vec<WeeklyActivityPoint> {
    (0..TREND_DAYS)
        .rev()
        .map(|days_ago| {
            let day = (now - Duration::days(days_ago)).date_naive();
            let mut point = WeeklyActivityPoint {
                date: day.format("%b %-d").to_string(),
                day,
                lessons: 0,
                quizzes: 0,
                assessments: 0,
                total: 0,
            };

            for record in records.iter().filter(|r| r.created_at.date_naive() == day) {
                match record.activity_type {
                    ActivityType::Lesson => point.lessons += 1,
                    ActivityType::Quiz => point.quizzes += 1,
                    ActivityType::Assessment => point.assessments += 1,
                }
            }
            point.total = point.lessons + point.quizzes + point.assessments;
            point
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedup::deduplicate;
    use crate::models::TimeRange;
    use crate::range::filter_by_range;
    use crate::seed;
    use chrono::{NaiveDate, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn always_seven_ascending_days() {
        let points = weekly_activity(&[], now());
        assert_eq!(points.len(), 7);
        assert_eq!(points[0].day, NaiveDate::from_ymd_opt(2025, 2, 13).unwrap());
        assert_eq!(points[6].day, NaiveDate::from_ymd_opt(2025, 2, 19).unwrap());
        assert_eq!(points[0].date, "Feb 13");
        assert!(points.windows(2).all(|pair| pair[0].day < pair[1].day));
        assert!(points.iter().all(|p| p.total == 0));
    }

    #[test]
    fn seed_week_buckets_by_day() {
        let records = deduplicate(&seed::records(now()));
        let filtered = filter_by_range(&records, TimeRange::Week, now());
        let points = weekly_activity(&filtered, now());

        let feb_18 = &points[5];
        assert_eq!(feb_18.date, "Feb 18");
        // T001 and T004 lessons; T001's duplicate collapsed.
        assert_eq!(feb_18.lessons, 2);
        assert_eq!(feb_18.quizzes, 3);
        assert_eq!(feb_18.assessments, 0);

        let feb_19 = &points[6];
        assert_eq!(feb_19.lessons, 3);
        assert_eq!(feb_19.total, 3);

        for point in &points {
            assert_eq!(point.total, point.lessons + point.quizzes + point.assessments);
        }
    }

    #[test]
    fn wider_ranges_still_chart_one_week() {
        let records = deduplicate(&seed::records(now()));
        let filtered = filter_by_range(&records, TimeRange::Year, now());
        let points = weekly_activity(&filtered, now());
        assert_eq!(points.len(), 7);
        let charted: usize = points.iter().map(|p| p.total).sum();
        assert!(charted < filtered.len());
    }
}
