use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A year in the proleptic Gregorian calendar. Any `i64` is accepted,
/// including zero and negative years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(pub i64);

impl Year {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }

    pub const fn is_leap(&self) -> bool {
        crate::core::leap::is_leap_year(self.0)
    }
}

impl From<i64> for Year {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which tier of the Gregorian cascade decided a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapRule {
    DivisibleBy400,
    CenturyException,
    DivisibleBy4,
    NotDivisibleBy4,
}

impl LeapRule {
    pub const fn is_leap(&self) -> bool {
        matches!(self, LeapRule::DivisibleBy400 | LeapRule::DivisibleBy4)
    }

    pub fn description(&self) -> &'static str {
        match self {
            LeapRule::DivisibleBy400 => "divisible by 400",
            LeapRule::CenturyException => "divisible by 100, not 400",
            LeapRule::DivisibleBy4 => "divisible by 4",
            LeapRule::NotDivisibleBy4 => "not divisible by 4",
        }
    }
}

impl fmt::Display for LeapRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub year: Year,
    pub leap: bool,
    pub rule: LeapRule,
}

/// Inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: Year,
    pub end: Year,
}

impl YearRange {
    pub fn span(&self) -> u64 {
        self.end.0.abs_diff(self.start.0).saturating_add(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = Year> {
        (self.start.0..=self.end.0).map(Year)
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const VALID: [&'static str; 3] = ["text", "json", "csv"];
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!(
                "unsupported format '{}', expected one of: {}",
                other,
                OutputFormat::VALID.join(", ")
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}
