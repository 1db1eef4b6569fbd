//! "How it works" text shown by the `explain` subcommand.

use std::fmt::Write as _;

use crate::grading::ComplexityLevel;
use crate::grading::mapper::{MIN_GRADE, PASSING_GRADE};

/// Builds the explanation from the live level tables.
pub fn explanation() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "BASIC LOGIC");
    let _ = writeln!(
        out,
        "  The grade is computed out of ten from the total points. A pass (grade {PASSING_GRADE})"
    );
    let _ = writeln!(out, "  is always reached at 60% of the total points.");
    let _ = writeln!(out);
    let _ = writeln!(out, "GRADE REMAPPING");
    let _ = writeln!(
        out,
        "  Scores above the pass are spread between {PASSING_GRADE} and the highest grade allowed"
    );
    let _ = writeln!(
        out,
        "  for that level. The lowest grade that can be given is always {MIN_GRADE}."
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "TEST LEVELS");
    for level in ComplexityLevel::ALL {
        let _ = writeln!(out, "  {} ({})", level.title(), u8::from(level));
        for spec in level.specs() {
            let _ = writeln!(out, "    {:<14} max {}", spec.label, spec.ceiling);
        }
    }
    out
}

/// One line per level, for the `levels` listing.
pub fn level_listing() -> String {
    let mut out = String::new();
    for level in ComplexityLevel::ALL {
        let _ = writeln!(out, "{}  {:<9} {}", u8::from(level), level.title(), level.summary());
    }
    out
}
