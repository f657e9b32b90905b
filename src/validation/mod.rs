//! Form input checks applied before a value is sent to the API.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ExpenseError, Result};

static INTEGER_INPUT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid regex"));
static DECIMAL_INPUT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d*\.?\d*$").expect("valid regex"));

/// Whether `value` is acceptable in a numeric field while the user types.
///
/// The empty string is allowed so a field can be cleared. Decimal fields
/// accept at most one point and need at least one digit.
pub fn validate_numeric_input(value: &str, allow_decimal: bool) -> bool {
    if value.is_empty() {
        return true;
    }
    if !allow_decimal {
        return INTEGER_INPUT.is_match(value);
    }
    DECIMAL_INPUT.is_match(value) && value.chars().any(|ch| ch.is_ascii_digit())
}

/// Parses a submitted amount, rejecting anything the input check would reject.
pub fn parse_amount(field: &str, value: &str) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !validate_numeric_input(trimmed, true) {
        return Err(ExpenseError::InvalidInput(format!(
            "{field} must be a non-negative number"
        )));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| ExpenseError::InvalidInput(format!("{field} must be a non-negative number")))
}
