use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeapError {
    #[error("Invalid argument '{input}': {reason}")]
    InvalidArgument { input: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LeapError {
    pub fn invalid_argument(input: impl Into<String>, reason: impl Into<String>) -> Self {
        LeapError::InvalidArgument {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            LeapError::InvalidArgument { .. } => ErrorCategory::Input,
            LeapError::TomlError(_)
            | LeapError::ConfigValidationError { .. }
            | LeapError::InvalidConfigValueError { .. }
            | LeapError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LeapError::IoError(_) | LeapError::SerializationError(_) | LeapError::CsvError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 程序退出碼，依嚴重程度決定
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LeapError::InvalidArgument { input, reason } => {
                format!("'{}' is not a valid year: {}", input, reason)
            }
            LeapError::IoError(e) => format!("Could not read or write a file: {}", e),
            LeapError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            LeapError::CsvError(e) => format!("Could not produce CSV output: {}", e),
            LeapError::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
            LeapError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            LeapError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("{} = '{}' is not allowed: {}", field, value, reason),
            LeapError::MissingConfigError { field } => {
                format!("Configuration is missing {}", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LeapError::InvalidArgument { .. } => {
                "Pass whole-number years such as 2024 or -400, and ranges as START..END"
            }
            LeapError::IoError(_) => "Check that the path exists and is writable",
            LeapError::SerializationError(_) | LeapError::CsvError(_) => {
                "Try the text output format"
            }
            LeapError::TomlError(_) => "Check the configuration file syntax",
            LeapError::ConfigValidationError { .. } | LeapError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration value and run again"
            }
            LeapError::MissingConfigError { .. } => {
                "Give at least one year on the command line or in [check] of the config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LeapError>;
