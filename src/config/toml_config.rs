use crate::core::input::parse_range;
use crate::domain::model::{OutputFormat, Year, YearRange};
use crate::utils::error::{LeapError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub check: CheckSection,
    #[serde(default)]
    pub output: OutputSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckSection {
    #[serde(default)]
    pub years: Vec<i64>,
    /// `START..END`, inclusive
    #[serde(default)]
    pub ranges: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
    pub explain: Option<bool>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${START_YEAR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            LeapError::ConfigValidationError {
                field: "environment".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn years(&self) -> Vec<Year> {
        self.check.years.iter().copied().map(Year).collect()
    }

    pub fn ranges(&self) -> Result<Vec<YearRange>> {
        self.check
            .ranges
            .iter()
            .map(|raw| {
                parse_range(raw).map_err(|e| LeapError::InvalidConfigValueError {
                    field: "check.ranges".to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        match &self.output.format {
            Some(format) => validation::validate_output_format("output.format", format),
            None => Ok(OutputFormat::default()),
        }
    }

    pub fn explain(&self) -> bool {
        self.output.explain.unwrap_or(false)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.json)
            .unwrap_or(false)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        for range in self.ranges()? {
            validation::validate_year_range("check.ranges", &range)?;
        }

        self.output_format()?;

        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }

        if let Some(level) = self.log_level() {
            validation::validate_log_level("logging.level", level)?;
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[check]
years = [2000, 1900, 2024, 2025]
ranges = ["1896..1904"]

[output]
format = "json"
explain = true

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.years(),
            vec![Year(2000), Year(1900), Year(2024), Year(2025)]
        );
        assert_eq!(config.ranges().unwrap()[0].span(), 9);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);
        assert!(config.explain());
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.years().is_empty());
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
        assert!(!config.explain());
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LEAP_CHECK_TEST_YEAR", "-400");

        let toml_content = r#"
[check]
years = [${LEAP_CHECK_TEST_YEAR}]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.years(), vec![Year(-400)]);

        std::env::remove_var("LEAP_CHECK_TEST_YEAR");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let toml_content = r#"
[output]
path = "${LEAP_CHECK_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.output_path(),
            Some("${LEAP_CHECK_SURELY_UNSET_VAR}")
        );
    }

    #[test]
    fn test_fractional_year_is_rejected() {
        let toml_content = r#"
[check]
years = [2000.5]
"#;

        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(LeapError::TomlError(_))
        ));
    }

    #[test]
    fn test_config_validation() {
        let bad_format = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(bad_format.validate().is_err());

        let bad_range = TomlConfig::from_toml_str("[check]\nranges = [\"2000..1900\"]\n").unwrap();
        assert!(matches!(
            bad_range.validate(),
            Err(LeapError::InvalidConfigValueError { .. })
        ));

        let wide_range =
            TomlConfig::from_toml_str("[check]\nranges = [\"-1000000..1000000\"]\n").unwrap();
        assert!(wide_range.validate().is_err());

        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[check]
years = [400]

[output]
format = "csv"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.years(), vec![Year(400)]);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Csv);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlConfig::from_file("/definitely/not/here/leap.toml");
        assert!(matches!(result, Err(LeapError::IoError(_))));
    }
}
