pub mod engine;
pub mod input;
pub mod leap;
pub mod report;

pub use crate::domain::model::{LeapRule, OutputFormat, Verdict, Year, YearRange};
pub use crate::domain::ports::{CheckConfig, ReportSink};
pub use crate::utils::error::Result;
