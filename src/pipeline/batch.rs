//! Binding many names at once.

use crate::binding::{bind, CpeFormat};
use crate::config::BindTarget;
use crate::model::WellFormedName;
use rayon::prelude::*;
use serde::Serialize;

/// Outcome of binding one name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingRecord {
    /// Position of the name in the input
    pub index: usize,
    /// The name in WFN text form
    pub wfn: String,
    /// CPE v2.2 URI, when requested and successful
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// CPE v2.3 formatted string, when requested and successful
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs: Option<String>,
    /// Why binding failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BindingRecord {
    /// Bind one name to every format in `target`.
    ///
    /// If any requested binding fails the record carries only the error.
    #[must_use]
    pub fn bind(index: usize, wfn: &WellFormedName, target: BindTarget) -> Self {
        let mut record = Self {
            index,
            wfn: wfn.to_string(),
            uri: None,
            fs: None,
            error: None,
        };

        for &format in target.formats() {
            match bind(wfn, format) {
                Ok(text) => match format {
                    CpeFormat::Uri => record.uri = Some(text),
                    CpeFormat::FormattedString => record.fs = Some(text),
                },
                Err(e) => {
                    tracing::debug!(index, error = %e, "binding failed");
                    record.uri = None;
                    record.fs = None;
                    record.error = Some(e.to_string());
                    break;
                }
            }
        }

        record
    }

    /// Whether every requested binding succeeded
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Counts over a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Records for a whole batch, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingReport {
    pub target: BindTarget,
    pub summary: BatchSummary,
    pub records: Vec<BindingRecord>,
}

impl BindingReport {
    fn from_records(target: BindTarget, records: Vec<BindingRecord>) -> Self {
        let failed = records.iter().filter(|r| !r.is_ok()).count();
        let summary = BatchSummary {
            total: records.len(),
            succeeded: records.len() - failed,
            failed,
        };
        Self {
            target,
            summary,
            records,
        }
    }

    /// Whether any record failed
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }
}

/// Bind every name to `target`.
///
/// Names are independent, so with `parallel` set they are bound on the rayon
/// thread pool. Records always come back in input order.
#[must_use]
pub fn bind_all(names: &[WellFormedName], target: BindTarget, parallel: bool) -> BindingReport {
    let records: Vec<BindingRecord> = if parallel {
        names
            .par_iter()
            .enumerate()
            .map(|(i, wfn)| BindingRecord::bind(i, wfn, target))
            .collect()
    } else {
        names
            .iter()
            .enumerate()
            .map(|(i, wfn)| BindingRecord::bind(i, wfn, target))
            .collect()
    };

    let report = BindingReport::from_records(target, records);
    tracing::debug!(
        total = report.summary.total,
        failed = report.summary.failed,
        "Bound {} names to {}",
        report.summary.total,
        target
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LogicalValue;

    fn sample() -> Vec<WellFormedName> {
        vec![
            WellFormedName::builder().part("a").vendor("acme").build(),
            WellFormedName::builder().part("a").vendor("bad\\").build(),
            WellFormedName::builder()
                .part("o")
                .update(LogicalValue::Na)
                .build(),
        ]
    }

    #[test]
    fn test_record_both_targets() {
        let wfn = WellFormedName::builder().part("a").vendor("acme").build();
        let record = BindingRecord::bind(0, &wfn, BindTarget::Both);
        assert!(record.is_ok());
        assert_eq!(record.uri.as_deref(), Some("cpe:/a:acme"));
        assert_eq!(record.fs.as_deref(), Some("cpe:2.3:a:acme:*:*:*:*:*:*:*:*:*"));
        assert_eq!(record.wfn, r#"wfn:[part="a",vendor="acme"]"#);
    }

    #[test]
    fn test_record_single_target() {
        let wfn = WellFormedName::builder().part("a").build();
        let record = BindingRecord::bind(3, &wfn, BindTarget::Fs);
        assert_eq!(record.index, 3);
        assert!(record.uri.is_none());
        assert!(record.fs.is_some());
    }

    #[test]
    fn test_failure_drops_partial_output() {
        // Valid for FS but not for URI: no partial result is kept
        let wfn = WellFormedName::builder().version("1.0").build();
        let record = BindingRecord::bind(0, &wfn, BindTarget::Both);
        assert!(!record.is_ok());
        assert!(record.uri.is_none());
        assert!(record.fs.is_none());
        assert!(record.error.unwrap().contains("version"));
    }

    #[test]
    fn test_bind_all_parallel_matches_sequential() {
        let names = sample();
        let parallel = bind_all(&names, BindTarget::Both, true);
        let sequential = bind_all(&names, BindTarget::Both, false);
        assert_eq!(parallel, sequential);
        let indexes: Vec<usize> = parallel.records.iter().map(|r| r.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
    }

    #[test]
    fn test_summary() {
        let report = bind_all(&sample(), BindTarget::Uri, true);
        assert_eq!(
            report.summary,
            BatchSummary {
                total: 3,
                succeeded: 2,
                failed: 1
            }
        );
        assert!(report.has_failures());
        assert!(!bind_all(&[], BindTarget::Uri, true).has_failures());
    }
}
