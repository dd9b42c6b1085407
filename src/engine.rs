//! Query surface over one immutable, deduplicated activity log.
//!
//! Build an [`ActivityStore`] once, wrap it in an [`InsightsEngine`] and share
//! the engine freely: every query recomputes its view from the same records
//! and nothing is ever written back.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::aggregate;
use crate::breakdown;
use crate::dedup::deduplicate;
use crate::ingest::DataSource;
use crate::models::{
    ActivityRecord, ClassWiseBreakdown, DashboardView, InsightCards, RecentActivityItem,
    TeacherDetail, TeacherOption, TeacherSummary, TimeRange, WeeklyActivityPoint,
};
use crate::range::filter_by_range;
use crate::summary;
use crate::trend;

pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Deduplicated activity log. Cloning shares the underlying records.
#[derive(Debug, Clone)]
pub struct ActivityStore {
    records: Arc<[ActivityRecord]>,
}

impl ActivityStore {
    /// Deduplicates `records`; this is the only pass over the raw log.
    pub fn new(records: &[ActivityRecord]) -> Self {
        let unique = deduplicate(records);
        tracing::info!(
            raw = records.len(),
            unique = unique.len(),
            "Activity store ready"
        );
        Self {
            records: unique.into(),
        }
    }

    pub fn from_source(source: &DataSource) -> Self {
        tracing::info!(source = %source.label(), "Building activity store");
        Self::new(source.records())
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Source of "now" for window calculations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InsightsEngine {
    store: ActivityStore,
    clock: Clock,
}

impl InsightsEngine {
    pub fn new(store: ActivityStore, clock: Clock) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &ActivityStore {
        &self.store
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    fn in_range(&self, range: TimeRange, now: DateTime<Utc>) -> Vec<&ActivityRecord> {
        let filtered = filter_by_range(self.store.records(), range, now);
        tracing::debug!(%range, selected = filtered.len(), "Filtered activity");
        filtered
    }

    fn summaries_at(&self, range: TimeRange, now: DateTime<Utc>) -> Vec<TeacherSummary> {
        aggregate::teacher_summaries(&self.in_range(range, now))
    }

    fn weekly_at(&self, range: TimeRange, now: DateTime<Utc>) -> Vec<WeeklyActivityPoint> {
        trend::weekly_activity(&self.in_range(range, now), now)
    }

    pub fn teacher_summaries(&self, range: TimeRange) -> Vec<TeacherSummary> {
        self.summaries_at(range, self.clock.now())
    }

    pub fn insight_cards(&self, range: TimeRange) -> InsightCards {
        aggregate::insight_cards(&self.teacher_summaries(range))
    }

    pub fn weekly_activity(&self, range: TimeRange) -> Vec<WeeklyActivityPoint> {
        self.weekly_at(range, self.clock.now())
    }

    /// `None` covers both unknown ids and teachers with nothing in range.
    pub fn teacher_by_id(&self, teacher_id: &str, range: TimeRange) -> Option<TeacherSummary> {
        self.teacher_summaries(range)
            .into_iter()
            .find(|s| s.teacher_id == teacher_id)
    }

    pub fn class_wise_breakdown(
        &self,
        teacher_id: &str,
        range: TimeRange,
    ) -> Vec<ClassWiseBreakdown> {
        let now = self.clock.now();
        breakdown::class_breakdown(teacher_id, &self.in_range(range, now))
    }

    /// Drawn from the whole log, not a range.
    pub fn recent_activity(&self, teacher_id: &str, limit: usize) -> Vec<RecentActivityItem> {
        breakdown::recent_activity(teacher_id, self.store.records(), limit)
    }

    /// Every teacher active at any point in the past year.
    pub fn teachers_for_selector(&self) -> Vec<TeacherOption> {
        aggregate::teacher_options(&self.teacher_summaries(TimeRange::Year))
    }

    pub fn ai_insight_summaries(&self, range: TimeRange) -> Vec<String> {
        summary::insight_summaries(&self.teacher_summaries(range))
    }

    /// Cards, trend and highlights computed against a single reading of the clock.
    pub fn dashboard(&self, range: TimeRange) -> DashboardView {
        self.dashboard_at(range, self.clock.now())
    }

    fn dashboard_at(&self, range: TimeRange, now: DateTime<Utc>) -> DashboardView {
        let summaries = self.summaries_at(range, now);
        DashboardView {
            cards: aggregate::insight_cards(&summaries),
            weekly: self.weekly_at(range, now),
            ai_summaries: summary::insight_summaries(&summaries),
        }
    }

    pub fn teacher_detail(
        &self,
        teacher_id: &str,
        range: TimeRange,
        recent_limit: usize,
    ) -> Option<TeacherDetail> {
        let teacher = self.teacher_by_id(teacher_id, range)?;
        Some(TeacherDetail {
            teacher,
            class_wise: self.class_wise_breakdown(teacher_id, range),
            recent: self.recent_activity(teacher_id, recent_limit),
        })
    }
}
