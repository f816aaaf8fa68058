use crate::domain::model::{OutputFormat, Year, YearRange};
use crate::utils::error::Result;

/// Where the rendered report ends up.
pub trait ReportSink {
    fn write_report(&mut self, report: &str) -> Result<String>;
}

pub trait CheckConfig {
    fn years(&self) -> &[Year];
    fn ranges(&self) -> &[YearRange];
    fn output_format(&self) -> OutputFormat;
    fn explain(&self) -> bool;
}
