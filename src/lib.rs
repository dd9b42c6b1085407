//! # teacher-insights
//!
//! Aggregation engine behind the school admin activity dashboard. It turns a
//! raw, possibly duplicated log of teacher activities (lessons, quizzes,
//! assessments) into per-teacher rollups, a seven-day trend, class-wise
//! breakdowns and short written highlights.
//!
//! ```rust,no_run
//! use teacher_insights::{ingest, ActivityStore, Clock, InsightsEngine, TimeRange};
//!
//! let source = ingest::resolve_source(None, chrono::Utc::now());
//! let engine = InsightsEngine::new(ActivityStore::from_source(&source), Clock::System);
//! let cards = engine.insight_cards(TimeRange::coerce(Some("month")));
//! println!("{} active teachers", cards.active_teachers);
//! ```

pub use config::Config;
pub use engine::{ActivityStore, Clock, InsightsEngine};
pub use error::{Error, Result};
pub use models::*;

pub mod aggregate;
pub mod breakdown;
pub mod config;
pub mod dedup;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod range;
pub mod report;
pub mod seed;
pub mod summary;
pub mod trend;
