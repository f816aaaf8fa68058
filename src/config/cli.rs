use crate::core::ReportSink;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn write_report(&mut self, report: &str) -> Result<String> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(report.as_bytes())?;
        handle.flush()?;
        Ok("stdout".to_string())
    }
}

#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileSink {
    fn write_report(&mut self, report: &str) -> Result<String> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, report)?;
        Ok(self.path.display().to_string())
    }
}
