//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each handler implements the
//! logic for one subcommand and returns the process exit code.

mod batch;
mod bind;

pub use batch::run_batch;
pub use bind::run_bind;

use crate::config::{AppConfig, BindTarget, ConfigPreset, Validatable};
use crate::error::CpeError;
use crate::reports::ReportFormat;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Settings given on the command line, layered over preset and config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub preset: Option<String>,
    pub target: Option<BindTarget>,
    pub format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
    pub fail_on_error: bool,
    pub sequential: bool,
}

/// Build the effective configuration: preset, then config file, then CLI flags.
pub fn resolve_config(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<AppConfig> {
    resolve_config_with_source(config_path, overrides).map(|(config, _)| config)
}

/// Like [`resolve_config`], also returning the config file that was applied.
pub fn resolve_config_with_source(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<(AppConfig, Option<PathBuf>)> {
    let base = match overrides.preset.as_deref() {
        Some(name) => match ConfigPreset::from_name(name) {
            Some(preset) => AppConfig::from_preset(preset),
            None => {
                let valid: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
                bail!("Unknown preset: {name}. Valid options: {}", valid.join(", "));
            }
        },
        None => AppConfig::default(),
    };

    let (config, loaded_from) =
        AppConfig::from_file_over(base, config_path).with_context(|| match config_path {
            Some(path) => format!("Failed to load config file {}", path.display()),
            None => "Failed to load config file".to_string(),
        })?;
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let mut builder = config.into_builder();
    if let Some(target) = overrides.target {
        builder = builder.target(target);
    }
    if let Some(format) = overrides.format {
        builder = builder.output_format(format);
    }
    if overrides.output_file.is_some() {
        builder = builder.output_file(overrides.output_file);
    }
    if overrides.quiet {
        builder = builder.quiet(true);
    }
    if overrides.fail_on_error {
        builder = builder.fail_on_error(true);
    }
    if overrides.sequential {
        builder = builder.parallel(false);
    }
    let config = builder.build();

    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(CpeError::config(messages.join("; ")).into());
    }

    Ok((config, loaded_from))
}
