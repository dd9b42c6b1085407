//! Turning loosely-typed rows into [`ActivityRecord`]s.
//!
//! The external source is a CSV export whose header names vary from school to
//! school, so columns are located by fuzzy name matching. Whatever goes wrong
//! while reading it, the caller ends up with the seed dataset instead:
//! [`resolve_source`] never fails.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{Error, Result};
use crate::models::{iso_millis, ActivityRecord, ActivityType};
use crate::seed;

pub const DEFAULT_CLASS: &str = "Class 7";
pub const DEFAULT_TEACHER_NAME: &str = "Teacher";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// How a record's timestamp text is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampText {
    /// Keep the cell text as written (seed rows).
    Verbatim,
    /// Re-render as `iso_millis` (external rows).
    IsoMillis,
}

/// One row's worth of untyped cells, already picked out of their columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawActivity<'a> {
    pub teacher_id: &'a str,
    pub teacher_name: &'a str,
    pub activity_type: &'a str,
    pub created_at: &'a str,
    pub subject: &'a str,
    pub class: &'a str,
}

impl RawActivity<'_> {
    /// Canonicalize into a record. Returns `None` only when neither an id nor
    /// a name is present; every other gap is filled with a default.
    pub fn normalize(
        &self,
        row_index: usize,
        now: DateTime<Utc>,
        text: TimestampText,
    ) -> Option<ActivityRecord> {
        let teacher_id = self.teacher_id.trim();
        let teacher_name = self.teacher_name.trim();
        if teacher_id.is_empty() && teacher_name.is_empty() {
            return None;
        }

        let class = self.class.trim();
        let parsed = try_parse_timestamp(self.created_at);
        let created_at = parsed.unwrap_or_else(|| {
            if !self.created_at.trim().is_empty() {
                tracing::debug!(
                    value = self.created_at,
                    "Unparseable timestamp, using current time"
                );
            }
            now
        });
        let created_at_text = match (text, parsed) {
            (TimestampText::Verbatim, Some(_)) => self.created_at.trim().to_string(),
            _ => iso_millis(&created_at),
        };

        Some(ActivityRecord {
            teacher_id: if teacher_id.is_empty() {
                format!("T{row_index}")
            } else {
                teacher_id.to_string()
            },
            teacher_name: if teacher_name.is_empty() {
                DEFAULT_TEACHER_NAME.to_string()
            } else {
                teacher_name.to_string()
            },
            activity_type: ActivityType::from_loose(self.activity_type),
            created_at,
            created_at_text,
            subject: self.subject.trim().to_string(),
            class: if class.is_empty() {
                DEFAULT_CLASS.to_string()
            } else {
                class.to_string()
            },
        })
    }
}

/// Parse a timestamp leniently. Naive values are taken as UTC.
pub fn try_parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }

    NAIVE_DATE_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(raw, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc())
    })
}

/// Lowercase, trim and join whitespace runs with `_`.
fn canonical_header(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Column positions resolved from a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub teacher_id: usize,
    pub teacher_name: usize,
    pub activity_type: Option<usize>,
    pub created_at: Option<usize>,
    pub subject: Option<usize>,
    pub class: Option<usize>,
}

impl ColumnMap {
    /// Resolve columns by candidate name. A header matches a candidate when it
    /// equals or contains it; candidates are tried in order. Without both an id
    /// and a name column the source is unusable.
    pub fn resolve(header_row: &[String]) -> Option<Self> {
        let headers: Vec<String> = header_row.iter().map(|h| canonical_header(h)).collect();

        let find = |candidates: &[&str]| {
            candidates.iter().find_map(|key| {
                headers
                    .iter()
                    .position(|h| h == key || h.contains(key))
            })
        };

        Some(Self {
            teacher_id: find(&["teacher_id", "teacherid"])?,
            teacher_name: find(&["teacher_name", "teachername", "name"])?,
            activity_type: find(&["activity_type", "activitytype", "type"]),
            created_at: find(&["created_at", "createdat", "date"]),
            subject: find(&["subject", "subjects"]),
            class: find(&["class", "class_taught"]),
        })
    }

    fn pick<'a>(row: &'a [String], column: Option<usize>) -> &'a str {
        column
            .and_then(|index| row.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn extract<'a>(&self, row: &'a [String]) -> RawActivity<'a> {
        RawActivity {
            teacher_id: Self::pick(row, Some(self.teacher_id)),
            teacher_name: Self::pick(row, Some(self.teacher_name)),
            activity_type: Self::pick(row, self.activity_type),
            created_at: Self::pick(row, self.created_at),
            subject: Self::pick(row, self.subject),
            class: Self::pick(row, self.class),
        }
    }
}

/// Normalize a header-first grid. Errors when the grid cannot be used at all.
pub fn records_from_grid(
    grid: &[Vec<String>],
    now: DateTime<Utc>,
) -> Result<Vec<ActivityRecord>> {
    if grid.len() < 2 {
        return Err(Error::Source(format!(
            "expected a header and at least one row, found {} rows",
            grid.len()
        )));
    }

    let columns = ColumnMap::resolve(&grid[0])
        .ok_or_else(|| Error::Source("no teacher id or teacher name column".to_string()))?;

    let records: Vec<ActivityRecord> = grid
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(index, row)| {
            columns
                .extract(row)
                .normalize(index, now, TimestampText::IsoMillis)
        })
        .collect();

    if records.is_empty() {
        return Err(Error::Source("no usable rows".to_string()));
    }

    Ok(records)
}

/// Read every CSV row, header included, as raw strings.
pub fn read_csv_grid(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut grid = Vec::new();
    for result in reader.records() {
        let record = result?;
        grid.push(record.iter().map(str::to_string).collect());
    }
    Ok(grid)
}

pub fn load_csv(path: &Path, now: DateTime<Utc>) -> Result<Vec<ActivityRecord>> {
    let grid = read_csv_grid(path)?;
    records_from_grid(&grid, now)
}

/// Where the activity log came from. Exactly one source is ever used.
#[derive(Debug, Clone)]
pub enum DataSource {
    External {
        path: PathBuf,
        records: Vec<ActivityRecord>,
    },
    Seed(Vec<ActivityRecord>),
}

impl DataSource {
    pub fn label(&self) -> String {
        match self {
            DataSource::External { path, .. } => path.display().to_string(),
            DataSource::Seed(_) => "built-in seed dataset".to_string(),
        }
    }

    pub fn records(&self) -> &[ActivityRecord] {
        match self {
            DataSource::External { records, .. } => records,
            DataSource::Seed(records) => records,
        }
    }
}

/// Pick the external file when it loads cleanly, otherwise the seed dataset.
pub fn resolve_source(path: Option<&Path>, now: DateTime<Utc>) -> DataSource {
    let Some(path) = path else {
        return DataSource::Seed(seed::records(now));
    };

    if !path.exists() {
        tracing::info!(path = %path.display(), "No external activity file, using seed data");
        return DataSource::Seed(seed::records(now));
    }

    match load_csv(path, now) {
        Ok(records) => {
            tracing::info!(
                path = %path.display(),
                records = records.len(),
                "Loaded external activity file"
            );
            DataSource::External {
                path: path.to_path_buf(),
                records,
            }
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "Ignoring external activity file: {e}");
            DataSource::Seed(seed::records(now))
        }
    }
}
