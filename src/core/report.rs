use crate::core::leap::check;
use crate::domain::model::{OutputFormat, Verdict, Year, YearRange};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub verdicts: Vec<Verdict>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub leap: usize,
}

/// Explicit years first, in the given order, then each range ascending.
/// Duplicates are kept.
pub fn check_all(years: &[Year], ranges: &[YearRange]) -> Report {
    let verdicts = years
        .iter()
        .copied()
        .chain(ranges.iter().flat_map(|range| range.iter()))
        .map(check)
        .collect();

    Report { verdicts }
}

impl Report {
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            total: self.verdicts.len(),
            leap: self.verdicts.iter().filter(|v| v.leap).count(),
        }
    }

    pub fn render(&self, format: OutputFormat, explain: bool) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text(explain)),
            OutputFormat::Json => self.render_json(),
            OutputFormat::Csv => self.render_csv(),
        }
    }

    pub fn render_text(&self, explain: bool) -> String {
        let mut out = String::new();
        for verdict in &self.verdicts {
            out.push_str(&format!("{} is leap? {}", verdict.year, verdict.leap));
            if explain {
                out.push_str(&format!(" ({})", verdict.rule));
            }
            out.push('\n');
        }
        out
    }

    pub fn render_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(&self.verdicts)?;
        json.push('\n');
        Ok(json)
    }

    pub fn render_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["year", "leap", "rule"])?;
        for verdict in &self.verdicts {
            writer.write_record([
                verdict.year.to_string(),
                verdict.leap.to_string(),
                verdict.rule.description().to_string(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| crate::utils::error::LeapError::IoError(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
