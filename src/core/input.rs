//! Conversion of untrusted input into [`Year`] values.
//!
//! Non-integral input is rejected with [`LeapError::InvalidArgument`] rather
//! than truncated: `"2000.0"`, `"2000.5"` and `1.5_f64` all fail.

use crate::domain::model::{Year, YearRange};
use crate::utils::error::{LeapError, Result};

pub fn parse_year(input: &str) -> Result<Year> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LeapError::invalid_argument(input, "year cannot be empty"));
    }

    let digits = trimmed
        .strip_prefix(['+', '-'])
        .unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LeapError::invalid_argument(
            input,
            "expected a whole number of years",
        ));
    }

    trimmed
        .parse::<i64>()
        .map(Year)
        .map_err(|e| LeapError::invalid_argument(input, format!("out of range: {}", e)))
}

/// Parses `START..END`, inclusive at both ends.
pub fn parse_range(input: &str) -> Result<YearRange> {
    let (start, end) = input
        .trim()
        .split_once("..")
        .ok_or_else(|| LeapError::invalid_argument(input, "expected START..END"))?;

    let start = parse_year(start)?;
    let end = parse_year(end)?;
    if start > end {
        return Err(LeapError::invalid_argument(
            input,
            format!("range start {} is after end {}", start, end),
        ));
    }

    Ok(YearRange { start, end })
}

// 2^63 as f64; anything at or above this does not fit in i64
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

impl TryFrom<f64> for Year {
    type Error = LeapError;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(LeapError::invalid_argument(
                value.to_string(),
                "year must be a finite number",
            ));
        }
        if value.fract() != 0.0 {
            return Err(LeapError::invalid_argument(
                value.to_string(),
                "year must be a whole number",
            ));
        }
        if !(-I64_UPPER..I64_UPPER).contains(&value) {
            return Err(LeapError::invalid_argument(
                value.to_string(),
                "year is outside the supported range",
            ));
        }
        Ok(Year(value as i64))
    }
}

impl std::str::FromStr for Year {
    type Err = LeapError;

    fn from_str(s: &str) -> Result<Self> {
        parse_year(s)
    }
}
