//! Output formatting and persistence for computed grades.
//!
//! Supports a plain-text table, JSON serialization, and CSV append.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs::OpenOptions;
use tracing::debug;

use crate::config::GradingConfig;
use crate::display::{
    GradeStatus, attainment_percent, format_grade, is_over_limit, progress_bar, ring_progress,
};
use crate::grading::{ComplexityLevel, GradeResult};

/// One CSV row: a single grade result plus the inputs that produced it.
#[derive(Debug, Serialize)]
pub struct GradeRecord {
    pub timestamp: DateTime<Utc>,
    pub raw_score: f64,
    pub total_points: f64,
    pub levels: ComplexityLevel,
    pub label: String,
    pub score: f64,
    pub max_score: f64,
    pub display: String,
    pub status: GradeStatus,
}

impl GradeRecord {
    /// Builds one record per result, all sharing the same timestamp.
    pub fn from_results(raw_score: f64, config: &GradingConfig, results: &[GradeResult]) -> Vec<Self> {
        let timestamp = Utc::now();
        results
            .iter()
            .map(|r| GradeRecord {
                timestamp,
                raw_score,
                total_points: config.total_points,
                levels: config.levels,
                label: r.label.clone(),
                score: r.score,
                max_score: r.max_score,
                display: format_grade(r.score),
                status: GradeStatus::from_score(r.score),
            })
            .collect()
    }
}

#[derive(Serialize)]
struct Report<'a> {
    raw_score: f64,
    total_points: f64,
    levels: ComplexityLevel,
    attainment_percent: f64,
    over_limit: bool,
    results: &'a [GradeResult],
}

/// Renders the results for a score as an aligned text table.
pub fn render_table(raw_score: f64, config: &GradingConfig, results: &[GradeResult]) -> String {
    let mut out = String::new();
    let percent = attainment_percent(raw_score, config.total_points);

    let _ = writeln!(
        out,
        "Score {raw_score} / {} pts  {} {percent:.0}%",
        config.total_points,
        progress_bar(percent / 100.0, 20)
    );
    if is_over_limit(raw_score, config.total_points) {
        let _ = writeln!(out, "  ! Max {}", config.total_points);
    }

    let width = results.iter().map(|r| r.label.len()).max().unwrap_or(0);
    for r in results {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>4}  ({:.2})  {}  {:<10}  {}",
            r.label,
            format_grade(r.score),
            r.score,
            progress_bar(ring_progress(r.score), 10),
            GradeStatus::from_score(r.score).to_string(),
            r.description,
        );
    }
    out
}

/// Serializes the results for a score as pretty-printed JSON.
pub fn to_json(raw_score: f64, config: &GradingConfig, results: &[GradeResult]) -> Result<String> {
    let report = Report {
        raw_score,
        total_points: config.total_points,
        levels: config.levels,
        attainment_percent: attainment_percent(raw_score, config.total_points),
        over_limit: is_over_limit(raw_score, config.total_points),
        results,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Appends [`GradeRecord`] rows to a CSV file.
///
/// Writes headers first when the file is new or empty.
pub fn append_records(path: &str, records: &[GradeRecord]) -> Result<()> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("failed to open '{path}'"))?;

    let is_empty = file.metadata()?.len() == 0;
    debug!(path, is_empty, rows = records.len(), "Appending CSV records");

    let mut writer = WriterBuilder::new()
        .has_headers(is_empty) // IMPORTANT when appending
        .from_writer(file);

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::compute;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn triple_config() -> GradingConfig {
        GradingConfig {
            total_points: 30.0,
            levels: ComplexityLevel::Triple,
        }
    }

    #[test]
    fn test_render_table_lists_every_level() {
        let config = triple_config();
        let results = compute(24.0, config.total_points, config.levels);
        let table = render_table(24.0, &config, &results);

        assert!(table.contains("Basic"));
        assert!(table.contains("7-"));
        assert!(table.contains("Intermediate"));
        assert!(table.contains("7+"));
        assert!(table.contains("Advanced"));
        assert!(!table.contains("! Max"));
    }

    #[test]
    fn test_render_table_flags_over_limit() {
        let config = triple_config();
        let results = compute(33.0, config.total_points, config.levels);
        let table = render_table(33.0, &config, &results);
        assert!(table.contains("! Max 30"));
    }

    #[test]
    fn test_to_json_shape() {
        let config = triple_config();
        let results = compute(24.0, config.total_points, config.levels);
        let json = to_json(24.0, &config, &results).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["levels"], 3);
        assert_eq!(value["results"].as_array().unwrap().len(), 3);
        assert_eq!(value["results"][0]["score"], 6.75);
        assert_eq!(value["results"][2]["max_score"], 10.0);
        assert_eq!(value["over_limit"], false);
    }

    #[test]
    fn test_append_records_writes_header_once() {
        let path = temp_path("grade_mapper_test_header.csv");
        let _ = fs::remove_file(&path);

        let config = triple_config();
        let results = compute(24.0, config.total_points, config.levels);
        let records = GradeRecord::from_results(24.0, &config, &results);
        append_records(&path, &records).unwrap();
        append_records(&path, &records).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content.lines().filter(|l| l.contains("timestamp")).count();
        assert_eq!(header_count, 1);
        // 1 header + 2 batches of 3 rows
        assert_eq!(content.lines().count(), 7);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_records_to_empty_file_writes_header() {
        let path = temp_path("grade_mapper_test_empty.csv");
        fs::write(&path, "").unwrap();

        let config = triple_config();
        let results = compute(24.0, config.total_points, config.levels);
        append_records(&path, &GradeRecord::from_results(24.0, &config, &results)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.lines().next().unwrap().starts_with("timestamp,"));
        assert_eq!(content.lines().count(), 4);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_records_carry_display_and_status() {
        let config = triple_config();
        let results = compute(12.0, config.total_points, config.levels);
        let records = GradeRecord::from_results(12.0, &config, &results);

        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.display == "4" && r.status == GradeStatus::Fail));
        assert!(records.iter().all(|r| r.timestamp == records[0].timestamp));
    }
}
