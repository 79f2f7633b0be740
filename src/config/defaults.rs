//! Named configuration presets.

use super::types::{AppConfig, BehaviorConfig, BindTarget, BindingConfig, OutputConfig};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Both bindings, human-readable text
    Default,
    /// Machine-readable JSON, fail on any binding error
    CiCd,
    /// v2.2 URIs only, for tools that predate CPE 2.3
    Legacy,
    /// v2.3 formatted strings only, as used by the NVD
    Nvd,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::CiCd => "ci-cd",
            Self::Legacy => "legacy",
            Self::Nvd => "nvd",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci-cd" | "ci" | "pipeline" => Some(Self::CiCd),
            "legacy" | "uri" | "v2.2" => Some(Self::Legacy),
            "nvd" | "fs" | "v2.3" => Some(Self::Nvd),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Bind to both URI and formatted string, text output",
            Self::CiCd => "JSON output, quiet, exit 1 when any name fails to bind",
            Self::Legacy => "CPE v2.2 URIs only",
            Self::Nvd => "CPE v2.3 formatted strings only",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::CiCd, Self::Legacy, Self::Nvd]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
            ConfigPreset::Legacy => Self::builder().target(BindTarget::Uri).build(),
            ConfigPreset::Nvd => Self::builder().target(BindTarget::Fs).build(),
        }
    }

    /// CI/CD pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Fail when any name cannot be bound
    /// - Quiet mode to reduce noise
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        Self {
            binding: BindingConfig::default(),
            output: OutputConfig {
                format: ReportFormat::Json,
                file: None,
            },
            behavior: BehaviorConfig {
                quiet: true,
                fail_on_error: true,
                parallel: true,
            },
        }
    }
}
