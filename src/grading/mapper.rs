//! Raw score to final grade conversion.
//!
//! The pipeline is clamp → normalize → remap → finalize → round. Scores
//! below the passing value (6 on the 0-10 scale) pass through unchanged;
//! scores at or above it are rescaled so that 6 stays 6 and 10 becomes the
//! level ceiling.

use crate::grading::level::ComplexityLevel;
use crate::grading::types::GradeResult;
use tracing::debug;

/// Passing grade on the 0-10 scale, reached at 60% of the total.
pub const PASSING_GRADE: f64 = 6.0;

/// Lowest grade that can ever be assigned.
pub const MIN_GRADE: f64 = 2.0;

/// Top of the normalized scale.
pub const SCALE_MAX: f64 = 10.0;

/// Converts `raw_score` out of `total_points` into one grade per level of `level`.
///
/// Returns an empty vec when `total_points` is not a positive finite number.
/// Any other input, however far out of range, produces a result.
pub fn compute(raw_score: f64, total_points: f64, level: ComplexityLevel) -> Vec<GradeResult> {
    if !(total_points.is_finite() && total_points > 0.0) {
        debug!(total_points, "Non-positive total, nothing to grade");
        return Vec::new();
    }

    let valid_score = clamp_score(raw_score, total_points);
    let p10 = normalize(valid_score, total_points);

    let results: Vec<GradeResult> = level
        .specs()
        .iter()
        .map(|spec| GradeResult {
            label: spec.label.to_string(),
            score: round_to_quarter(finalize(remap(p10, spec.ceiling))),
            max_score: spec.ceiling,
            description: spec.description.to_string(),
        })
        .collect();

    debug!(raw_score, total_points, %level, p10, count = results.len(), "Grades computed");
    results
}

/// Clamps a raw score into `[0, total_points]`. NaN counts as zero.
pub fn clamp_score(raw_score: f64, total_points: f64) -> f64 {
    if raw_score.is_nan() {
        return 0.0;
    }
    raw_score.max(0.0).min(total_points)
}

/// Rescales a clamped score onto the 0-10 scale.
pub fn normalize(valid_score: f64, total_points: f64) -> f64 {
    valid_score / total_points * SCALE_MAX
}

/// Compresses the passing range `[6, 10]` onto `[6, max_target]`.
pub fn remap(p10: f64, max_target: f64) -> f64 {
    if p10 < PASSING_GRADE {
        return p10;
    }
    let slope = (max_target - PASSING_GRADE) / (SCALE_MAX - PASSING_GRADE);
    PASSING_GRADE + (p10 - PASSING_GRADE) * slope
}

/// Applies the minimum grade.
pub fn finalize(value: f64) -> f64 {
    value.max(MIN_GRADE)
}

/// Rounds to the nearest multiple of 0.25, ties away from zero.
pub fn round_to_quarter(value: f64) -> f64 {
    (value * 4.0).round() / 4.0
}
