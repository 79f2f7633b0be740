//! Configuration types for cpe-tools operations.

use crate::binding::CpeFormat;
use crate::reports::ReportFormat;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments override values loaded from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Which bindings to produce
    pub binding: BindingConfig,
    /// Output configuration (format, file)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Continue building from an existing configuration.
    pub fn into_builder(self) -> AppConfigBuilder {
        AppConfigBuilder { config: self }
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the binding target.
    pub const fn target(mut self, target: BindTarget) -> Self {
        self.config.binding.target = target;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Exit non-zero when any name in a batch fails to bind.
    pub const fn fail_on_error(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_error = fail;
        self
    }

    /// Bind batch entries in parallel.
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.config.behavior.parallel = parallel;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// Which textual forms to bind each name to
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum BindTarget {
    /// CPE v2.2 URI only
    Uri,
    /// CPE v2.3 formatted string only
    Fs,
    /// Both forms
    #[default]
    Both,
}

impl BindTarget {
    /// Formats produced for this target, URI first
    #[must_use]
    pub const fn formats(&self) -> &'static [CpeFormat] {
        match self {
            Self::Uri => &[CpeFormat::Uri],
            Self::Fs => &[CpeFormat::FormattedString],
            Self::Both => &[CpeFormat::Uri, CpeFormat::FormattedString],
        }
    }
}

impl std::fmt::Display for BindTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uri => write!(f, "uri"),
            Self::Fs => write!(f, "fs"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// Binding configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BindingConfig {
    /// Forms to produce: uri, fs, or both
    pub target: BindTarget,
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Behavior flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 1 if any batch entry fails to bind
    pub fail_on_error: bool,
    /// Bind batch entries in parallel
    pub parallel: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            fail_on_error: false,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.binding.target, BindTarget::Both);
        assert_eq!(config.output.format, ReportFormat::Text);
        assert!(config.output.file.is_none());
        assert!(config.behavior.parallel);
        assert!(!config.behavior.fail_on_error);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .target(BindTarget::Fs)
            .output_format(ReportFormat::Json)
            .fail_on_error(true)
            .parallel(false)
            .build();
        assert_eq!(config.binding.target, BindTarget::Fs);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.behavior.fail_on_error);
        assert!(!config.behavior.parallel);

        let rebuilt = config.into_builder().quiet(true).build();
        assert!(rebuilt.behavior.quiet);
        assert_eq!(rebuilt.binding.target, BindTarget::Fs);
    }

    #[test]
    fn test_target_formats() {
        assert_eq!(BindTarget::Uri.formats(), &[CpeFormat::Uri]);
        assert_eq!(BindTarget::Fs.formats(), &[CpeFormat::FormattedString]);
        assert_eq!(
            BindTarget::Both.formats(),
            &[CpeFormat::Uri, CpeFormat::FormattedString]
        );
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("binding:\n  target: uri\n").unwrap();
        assert_eq!(config.binding.target, BindTarget::Uri);
        assert!(config.behavior.parallel);
    }
}
