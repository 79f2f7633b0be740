//! Batch command handler.
//!
//! Binds every name in a JSON or YAML file.

use crate::config::AppConfig;
use crate::pipeline::{bind_all, exit_codes, load_names, write_output, OutputTarget};
use crate::reports::create_reporter;
use anyhow::{Context, Result};
use std::path::Path;

/// Run the batch command
pub fn run_batch(input: &Path, config: &AppConfig) -> Result<i32> {
    let names = load_names(input)
        .with_context(|| format!("Failed to load names from {}", input.display()))?;

    let report = bind_all(&names, config.binding.target, config.behavior.parallel);

    if !config.behavior.quiet {
        for record in report.records.iter().filter(|r| !r.is_ok()) {
            tracing::warn!(
                "Entry {} could not be bound: {}",
                record.index,
                record.error.as_deref().unwrap_or_default()
            );
        }
        tracing::info!(
            "Bound {} of {} names to {}",
            report.summary.succeeded,
            report.summary.total,
            report.target
        );
    }

    let reporter = create_reporter(config.output.format);
    tracing::debug!("Rendering {} report", reporter.format());
    let rendered = reporter
        .generate(&report)
        .context("Failed to render batch report")?;
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&rendered, &target, config.behavior.quiet)?;

    if config.behavior.fail_on_error && report.has_failures() {
        return Ok(exit_codes::BINDING_FAILED);
    }
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BindTarget;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("names.json");
        std::fs::write(
            &path,
            r#"[{"part": "a", "vendor": "acme"}, {"part": "a", "product": "bad\\"}]"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_run_batch_exit_codes() {
        let tmp = TempDir::new().unwrap();
        let input = write_input(&tmp);
        let out = tmp.path().join("out.csv");

        let config = AppConfig::builder()
            .target(BindTarget::Fs)
            .output_format(ReportFormat::Csv)
            .output_file(Some(out.clone()))
            .quiet(true)
            .build();
        assert_eq!(run_batch(&input, &config).unwrap(), exit_codes::SUCCESS);

        let strict = config.into_builder().fail_on_error(true).build();
        assert_eq!(run_batch(&input, &strict).unwrap(), exit_codes::BINDING_FAILED);

        let csv = std::fs::read_to_string(&out).unwrap();
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.contains("cpe:2.3:a:acme:*:*:*:*:*:*:*:*:*"));
    }

    #[test]
    fn test_run_batch_missing_input() {
        let config = AppConfig::default();
        let err = run_batch(Path::new("/nonexistent/names.json"), &config).unwrap_err();
        assert!(err.to_string().contains("names.json"));
    }
}
