//! Values produced by the grade mapper.

use serde::Serialize;

/// Final grade for one difficulty level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeResult {
    pub label: String,
    /// Final grade on the 2-10 scale, always a multiple of 0.25.
    pub score: f64,
    pub max_score: f64,
    pub description: String,
}
