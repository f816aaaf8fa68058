pub mod cli;
pub mod toml_config;

use crate::core::{CheckConfig, OutputFormat, Year, YearRange};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono::Datelike;
use serde::Serialize;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "leap-check")]
#[command(about = "Check whether years are leap years under the Gregorian rule")]
pub struct CliConfig {
    /// Years to check, e.g. 2000 1900 -400
    #[arg(allow_negative_numbers = true)]
    pub years: Vec<String>,

    /// Inclusive range of years to check (repeatable)
    #[arg(long = "range", value_name = "START..END", allow_hyphen_values = true)]
    pub ranges: Vec<String>,

    /// Output format: text, json or csv
    #[arg(short, long)]
    pub format: Option<String>,

    /// Show which rule decided each year
    #[arg(long)]
    pub explain: bool,

    /// Also check the current year
    #[arg(long)]
    pub current: bool,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Effective settings after merging the config file with the command line.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Settings {
    pub years: Vec<Year>,
    pub ranges: Vec<YearRange>,
    pub format: OutputFormat,
    pub explain: bool,
    pub output_path: Option<String>,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

pub fn current_year() -> Year {
    Year(i64::from(chrono::Local::now().year()))
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        Ok(Self {
            years: config.years(),
            ranges: config.ranges()?,
            format: config.output_format()?,
            explain: config.explain(),
            output_path: config.output_path().map(str::to_string),
            log_level: config.log_level().map(str::to_string),
            json_logs: config.json_logs(),
        })
    }

    /// File values come first; command-line years and ranges are appended and
    /// command-line format/output override the file.
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        use crate::core::input::{parse_range, parse_year};

        let mut settings = match &cli.config {
            Some(path) => {
                let file_config = TomlConfig::from_file(path)?;
                file_config.validate()?;
                Self::from_toml(&file_config)?
            }
            None => Self::default(),
        };

        for raw in &cli.years {
            settings.years.push(parse_year(raw)?);
        }
        for raw in &cli.ranges {
            settings.ranges.push(parse_range(raw)?);
        }

        if cli.current {
            settings.years.push(current_year());
        }

        if let Some(format) = &cli.format {
            settings.format = validation::validate_output_format("--format", format)?;
        }
        settings.explain |= cli.explain;
        if cli.output.is_some() {
            settings.output_path = cli.output.clone();
        }

        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        for range in &self.ranges {
            validation::validate_year_range("ranges", range)?;
        }
        if let Some(path) = &self.output_path {
            validation::validate_path("output", path)?;
        }
        Ok(())
    }
}

impl CheckConfig for Settings {
    fn years(&self) -> &[Year] {
        &self.years
    }

    fn ranges(&self) -> &[YearRange] {
        &self.ranges
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn explain(&self) -> bool {
        self.explain
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::error::LeapError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_parses_negative_years_and_ranges() {
        let cli = CliConfig::parse_from([
            "leap-check",
            "2000",
            "-400",
            "--range",
            "-8..8",
            "--format",
            "json",
        ]);
        assert_eq!(cli.years, vec!["2000", "-400"]);
        assert_eq!(cli.ranges, vec!["-8..8"]);

        let settings = Settings::from_cli(&cli).unwrap();
        assert_eq!(settings.years, vec![Year(2000), Year(-400)]);
        assert_eq!(settings.ranges[0].span(), 17);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_rejects_fractional_year() {
        let cli = CliConfig::parse_from(["leap-check", "2000.5"]);
        assert!(matches!(
            Settings::from_cli(&cli),
            Err(LeapError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_cli_current_year() {
        let cli = CliConfig::parse_from(["leap-check", "--current"]);
        let settings = Settings::from_cli(&cli).unwrap();
        assert_eq!(settings.years, vec![current_year()]);
    }

    #[test]
    fn test_cli_merges_with_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[check]\nyears = [1900]\n\n[output]\nformat = \"csv\"\nexplain = true\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["leap-check", "--config", path.as_str(), "2024", "-f", "text"]);
        let settings = Settings::from_cli(&cli).unwrap();

        assert_eq!(settings.years, vec![Year(1900), Year(2024)]);
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.explain);
    }

    #[test]
    fn test_settings_validation() {
        let settings = Settings {
            ranges: vec![YearRange {
                start: Year(0),
                end: Year(1_000_000),
            }],
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
        assert!(Settings::default().validate().is_ok());
    }
}
