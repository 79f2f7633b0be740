//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::BindingReport;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &BindingReport) -> Result<String, ReportError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BindTarget;
    use crate::model::{LogicalValue, WellFormedName};
    use crate::pipeline::bind_all;

    #[test]
    fn test_json_report_compact() {
        let names = vec![WellFormedName::builder()
            .part("a")
            .update(LogicalValue::Na)
            .build()];
        let report = bind_all(&names, BindTarget::Uri, false);
        let json = JsonReporter::new().pretty(false).generate(&report).unwrap();
        insta::assert_snapshot!(json, @r#"{"target":"uri","summary":{"total":1,"succeeded":1,"failed":0},"records":[{"index":0,"wfn":"wfn:[part=\"a\",update=NA]","uri":"cpe:/a::::-"}]}"#);
    }

    #[test]
    fn test_json_report_error_record() {
        let names = vec![WellFormedName::builder().product("x\\").build()];
        let report = bind_all(&names, BindTarget::Fs, false);
        let json = JsonReporter::new().generate(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["failed"], 1);
        assert!(value["records"][0]["error"]
            .as_str()
            .unwrap()
            .contains("product"));
        assert!(value["records"][0].get("fs").is_none());
    }
}
