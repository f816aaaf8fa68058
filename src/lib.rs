pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{FileSink, StdoutSink};
pub use config::{toml_config::TomlConfig, Settings};
pub use core::engine::{CheckEngine, RunOutcome};
pub use core::input::{parse_range, parse_year};
pub use core::leap::{check, classify, is_leap_year};
pub use domain::model::{LeapRule, OutputFormat, Verdict, Year, YearRange};
pub use utils::error::{LeapError, Result};
