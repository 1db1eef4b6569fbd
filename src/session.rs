//! Interactive grading loop.
//!
//! Reads one score per line and prints the grades for it until the input
//! ends or the user types `q`.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::config::GradingConfig;
use crate::display::is_over_limit;
use crate::grading::compute;
use crate::output::{GradeRecord, append_records, render_table};
use crate::parser::parse_score;

/// Runs the prompt loop over `reader`, writing everything to `writer`.
///
/// When `log_path` is set every computed grade is appended there as CSV.
/// Returns the number of scores graded.
#[tracing::instrument(skip(reader, writer), fields(total_points = config.total_points, levels = %config.levels))]
pub fn run<R: BufRead, W: Write>(
    config: &GradingConfig,
    reader: R,
    mut writer: W,
    log_path: Option<&str>,
) -> Result<usize> {
    writeln!(
        writer,
        "Total: {} pts, {}. Enter a score (q to quit).",
        config.total_points,
        config.levels.title()
    )?;

    let mut graded = 0;
    for line in reader.lines() {
        let line = line?;
        let input = line.trim();

        if ["q", "quit", "exit"]
            .iter()
            .any(|cmd| input.eq_ignore_ascii_case(cmd))
        {
            break;
        }
        if input.is_empty() {
            writeln!(writer, "Enter a score")?;
            continue;
        }

        let raw_score = match parse_score(input) {
            Ok(v) => v,
            Err(e) => {
                writeln!(writer, "  {e}")?;
                continue;
            }
        };

        if is_over_limit(raw_score, config.total_points) {
            warn!(raw_score, total_points = config.total_points, "Score exceeds total");
        }

        let results = compute(raw_score, config.total_points, config.levels);
        write!(writer, "{}", render_table(raw_score, config, &results))?;

        if let Some(path) = log_path {
            let records = GradeRecord::from_results(raw_score, config, &results);
            if let Err(e) = append_records(path, &records) {
                warn!(path, error = %e, "Failed to log grades, continuing");
            }
        }
        graded += 1;
    }

    info!(graded, "Session finished");
    Ok(graded)
}
