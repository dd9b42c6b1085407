use std::path::PathBuf;

use anyhow::{anyhow, Context};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

use teacher_insights::config::{Config, DEFAULT_CONFIG_PATH};
use teacher_insights::{ingest, logging, report, ActivityStore, Clock, InsightsEngine, TimeRange};

#[derive(Parser)]
#[command(name = "teacher-insights")]
#[command(about = "Teacher activity insights for school administrators", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// External activity CSV, overriding the configured path
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Pin "now" (RFC 3339) for reproducible output
    #[arg(long, global = true)]
    now: Option<String>,
    /// Time window: week, month or year (anything else means week)
    #[arg(long, global = true)]
    range: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-teacher activity rollups
    Summaries,
    /// Headline cards, seven-day trend and highlights
    Dashboard,
    /// One teacher's rollup, class breakdown and recent activity
    Teacher {
        id: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Every teacher active in the past year
    Selector,
    /// Written highlights only
    Insights,
    /// Write a markdown report
    Report {
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_clock(now: Option<&str>) -> anyhow::Result<Clock> {
    match now {
        Some(raw) => {
            let at = DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("--now must be an RFC 3339 timestamp, got {raw:?}"))?;
            Ok(Clock::Fixed(at.with_timezone(&Utc)))
        }
        None => Ok(Clock::System),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config);
    logging::init(&config.logging);

    let clock = parse_clock(cli.now.as_deref())?;
    let range = TimeRange::coerce(cli.range.as_deref());
    let source_path = cli.data.unwrap_or(config.data.source_path);

    let source = ingest::resolve_source(Some(&source_path), clock.now());
    let engine = InsightsEngine::new(ActivityStore::from_source(&source), clock);

    match cli.command {
        Commands::Summaries => print_json(&engine.teacher_summaries(range))?,
        Commands::Dashboard => print_json(&engine.dashboard(range))?,
        Commands::Teacher { id, limit } => {
            let limit = limit.unwrap_or(config.data.recent_limit);
            let detail = engine
                .teacher_detail(&id, range, limit)
                .ok_or_else(|| anyhow!("Teacher not found: {id}"))?;
            print_json(&detail)?;
        }
        Commands::Selector => print_json(&engine.teachers_for_selector())?,
        Commands::Insights => print_json(&engine.ai_insight_summaries(range))?,
        Commands::Report { out } => {
            let report = report::build_report(&engine, range, &source.label());
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write report to {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
