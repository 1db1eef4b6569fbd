//! Display helpers for grade results.
//!
//! Nothing here changes a grade; it only derives the strings and ratios the
//! terminal output shows.

use crate::grading::mapper::{PASSING_GRADE, SCALE_MAX, round_to_quarter};
use serde::Serialize;
use std::fmt;

/// Grades at or above this are borderline rather than failing.
pub const BORDERLINE_GRADE: f64 = 4.5;

/// Formats a grade with the usual quarter-point notation.
///
/// | Fraction | Shown as      |
/// |----------|---------------|
/// | .00      | `7`           |
/// | .25      | `7+`          |
/// | .50      | `7½`          |
/// | .75      | `8-`          |
pub fn format_grade(score: f64) -> String {
    let rounded = round_to_quarter(score);
    let integer = rounded.floor();
    let quarters = ((rounded - integer) * 4.0).round() as u8;

    match quarters {
        1 => format!("{integer}+"),
        2 => format!("{integer}½"),
        3 => format!("{}-", integer + 1.0),
        _ => format!("{integer}"),
    }
}

/// Fraction of the progress ring to fill: `score / 10` clamped to `[0, 1]`.
pub fn ring_progress(score: f64) -> f64 {
    (score / SCALE_MAX).clamp(0.0, 1.0)
}

/// Raw score as a percentage of the total, clamped to `[0, 100]`.
pub fn attainment_percent(raw_score: f64, total_points: f64) -> f64 {
    if total_points <= 0.0 || raw_score.is_nan() {
        return 0.0;
    }
    (raw_score / total_points * 100.0).clamp(0.0, 100.0)
}

/// Whether the typed score exceeds the configured total.
pub fn is_over_limit(raw_score: f64, total_points: f64) -> bool {
    raw_score > total_points
}

/// Colour band a grade falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeStatus {
    Fail,
    Borderline,
    Pass,
}

impl GradeStatus {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= PASSING_GRADE => GradeStatus::Pass,
            s if s >= BORDERLINE_GRADE => GradeStatus::Borderline,
            _ => GradeStatus::Fail,
        }
    }
}

impl fmt::Display for GradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GradeStatus::Fail => "fail",
            GradeStatus::Borderline => "borderline",
            GradeStatus::Pass => "pass",
        };
        f.write_str(s)
    }
}

/// Text progress bar, `width` cells wide.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
