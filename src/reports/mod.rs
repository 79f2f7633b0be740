//! Report generation for binding results.
//!
//! - Text: one line per name, for shells and pipes
//! - JSON: structured records plus a summary
//! - CSV: spreadsheet import

mod csv;
mod json;
mod text;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use text::TextReporter;
pub use types::ReportFormat;

use crate::pipeline::BindingReport;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a binding report
    fn generate(&self, report: &BindingReport) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
    }
}
