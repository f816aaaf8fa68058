use crate::domain::model::{OutputFormat, YearRange};
use crate::utils::error::{LeapError, Result};

/// Widest range a single run may expand.
pub const MAX_RANGE_SPAN: u64 = 100_000;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(LeapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LeapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_output_format(field_name: &str, value: &str) -> Result<OutputFormat> {
    value
        .parse::<OutputFormat>()
        .map_err(|reason| LeapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason,
        })
}

pub fn validate_year_range(field_name: &str, range: &YearRange) -> Result<()> {
    if range.start > range.end {
        return Err(LeapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: range.to_string(),
            reason: "Range start must not be after its end".to_string(),
        });
    }

    if range.span() > MAX_RANGE_SPAN {
        return Err(LeapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: range.to_string(),
            reason: format!("Range may cover at most {} years", MAX_RANGE_SPAN),
        });
    }

    Ok(())
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&level.to_ascii_lowercase().as_str()) {
        return Err(LeapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Valid levels: {}", valid_levels.join(", ")),
        });
    }
    Ok(())
}
