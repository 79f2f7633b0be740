//! Plain text report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::BindingReport;
use std::fmt::Write as _;

/// Text reporter: one line per name.
///
/// Successful names print their requested bindings separated by a tab (URI
/// first). Failed names print `#<index>: error: <message>`.
pub struct TextReporter;

impl TextReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn generate(&self, report: &BindingReport) -> Result<String, ReportError> {
        let mut out = String::new();

        for record in &report.records {
            if let Some(error) = &record.error {
                writeln!(out, "#{}: error: {}", record.index, error)?;
                continue;
            }
            let line: Vec<&str> = [record.uri.as_deref(), record.fs.as_deref()]
                .into_iter()
                .flatten()
                .collect();
            writeln!(out, "{}", line.join("\t"))?;
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}
