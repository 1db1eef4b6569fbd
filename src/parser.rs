//! Parser for typed scores.

use anyhow::{Result, bail};

/// Parses a score typed by the user, accepting `,` as the decimal separator.
///
/// # Errors
///
/// Returns an error if the text is empty, not a number, or not finite.
pub fn parse_score(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("no score entered");
    }

    let normalized = trimmed.replacen(',', ".", 1);
    let value: f64 = match normalized.parse() {
        Ok(v) => v,
        Err(_) => bail!("'{trimmed}' is not a number"),
    };

    if !value.is_finite() {
        bail!("'{trimmed}' is not a finite number");
    }
    Ok(value)
}
