//! CSV report generator.
//!
//! Columns: `index,wfn,uri,fs,error`. Absent values are empty cells.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::BindingReport;
use std::fmt::Write as _;

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate(&self, report: &BindingReport) -> Result<String, ReportError> {
        let mut content = String::from("index,wfn,uri,fs,error\n");

        for record in &report.records {
            writeln!(
                content,
                "{},{},{},{},{}",
                record.index,
                escape_csv(&record.wfn),
                escape_csv(record.uri.as_deref().unwrap_or("")),
                escape_csv(record.fs.as_deref().unwrap_or("")),
                escape_csv(record.error.as_deref().unwrap_or(""))
            )?;
        }

        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

/// Quote a cell when it contains a delimiter, quote or line break.
fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
