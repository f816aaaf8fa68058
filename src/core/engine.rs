use crate::core::report::{check_all, ReportSummary};
use crate::core::{CheckConfig, ReportSink};
use crate::utils::error::{LeapError, Result};
use crate::utils::validation;

pub struct CheckEngine<C: CheckConfig, S: ReportSink> {
    config: C,
    sink: S,
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub destination: String,
    pub summary: ReportSummary,
}

impl<C: CheckConfig, S: ReportSink> CheckEngine<C, S> {
    pub fn new(config: C, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn run(&mut self) -> Result<RunOutcome> {
        let years = self.config.years();
        let ranges = self.config.ranges();
        if years.is_empty() && ranges.is_empty() {
            return Err(LeapError::MissingConfigError {
                field: "check.years or check.ranges".to_string(),
            });
        }

        tracing::info!(
            "Checking {} year(s) and {} range(s)",
            years.len(),
            ranges.len()
        );
        for range in ranges {
            validation::validate_year_range("ranges", range)?;
            tracing::debug!("Range {} covers {} year(s)", range, range.span());
        }

        let report = check_all(years, ranges);
        let summary = report.summary();
        tracing::info!("{} of {} year(s) are leap years", summary.leap, summary.total);

        let format = self.config.output_format();
        tracing::debug!("Rendering report as {}", format);
        let rendered = report.render(format, self.config.explain())?;

        let destination = self.sink.write_report(&rendered)?;
        tracing::debug!("Report written to {}", destination);

        Ok(RunOutcome {
            destination,
            summary,
        })
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
