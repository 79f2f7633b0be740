//! Bind command handler.
//!
//! Binds a single name given as command-line attributes.

use crate::config::AppConfig;
use crate::model::WellFormedName;
use crate::pipeline::{bind_all, exit_codes, write_output, OutputTarget};
use crate::reports::create_reporter;
use anyhow::{bail, Context, Result};

/// Run the bind command
pub fn run_bind(wfn: &WellFormedName, config: &AppConfig) -> Result<i32> {
    let report = bind_all(std::slice::from_ref(wfn), config.binding.target, false);

    if let Some(error) = report.records.iter().find_map(|r| r.error.as_deref()) {
        bail!("Cannot bind {wfn}: {error}");
    }

    let reporter = create_reporter(config.output.format);
    tracing::debug!("Rendering {} report", reporter.format());
    let rendered = reporter
        .generate(&report)
        .context("Failed to render binding")?;
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&rendered, &target, config.behavior.quiet)?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BindTarget;
    use crate::reports::ReportFormat;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[test]
    fn test_run_bind_writes_file() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out.txt");
        let config = AppConfig::builder()
            .target(BindTarget::Uri)
            .output_format(ReportFormat::Text)
            .output_file(Some(out.clone()))
            .quiet(true)
            .build();
        let wfn = WellFormedName::builder()
            .part("a")
            .vendor("microsoft")
            .product("internet_explorer")
            .version("8\\.0\\.6001")
            .update("beta")
            .language("sp2")
            .build();

        assert_eq!(run_bind(&wfn, &config).unwrap(), exit_codes::SUCCESS);
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "cpe:/a:microsoft:internet_explorer:8.0.6001:beta::sp2\n"
        );
    }

    /// Collects formatted log output for inspection.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_bind_is_silent_at_info_level() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out.txt");
        let config = AppConfig::builder()
            .output_file(Some(out))
            .quiet(true)
            .build();
        let wfn = WellFormedName::builder().part("a").vendor("acme").build();

        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();
        let code = tracing::subscriber::with_default(subscriber, || run_bind(&wfn, &config));

        assert_eq!(code.unwrap(), exit_codes::SUCCESS);
        let logged = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(logged.is_empty(), "unexpected log output: {logged}");
    }

    #[test]
    fn test_run_bind_malformed_is_error() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out.txt");
        let config = AppConfig::builder().output_file(Some(out.clone())).build();
        let wfn = WellFormedName::builder().vendor("trailing\\").build();

        let err = run_bind(&wfn, &config).unwrap_err();
        assert!(err.to_string().contains("vendor"));
        assert!(!out.exists());
    }
}
