//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, BindTarget};
use crate::reports::ReportFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".cpe-tools.yaml",
    ".cpe-tools.yml",
    "cpe-tools.yaml",
    "cpe-tools.yml",
];

/// Directory under the user config dir that may hold a config file.
pub const CONFIG_DIR_NAME: &str = "cpe-tools";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided (returned even if it does not exist)
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/cpe-tools/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    config_search_dirs()
        .into_iter()
        .find_map(|dir| find_config_in_dir(&dir))
}

/// Directories searched for a config file when no explicit path is given,
/// in search order.
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    [
        std::env::current_dir().ok(),
        find_git_root(),
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME)),
        dirs::home_dir(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Contents
// ============================================================================

/// Settings present in a config file.
///
/// Every field is optional so that only keys written in the file are layered
/// over the base configuration, including keys set to their default value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigOverlay {
    pub binding: BindingOverlay,
    pub output: OutputOverlay,
    pub behavior: BehaviorOverlay,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BindingOverlay {
    pub target: Option<BindTarget>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputOverlay {
    pub format: Option<ReportFormat>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BehaviorOverlay {
    pub quiet: Option<bool>,
    pub fail_on_error: Option<bool>,
    pub parallel: Option<bool>,
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Read the settings written in a YAML config file.
pub fn load_config_overlay(path: &Path) -> Result<ConfigOverlay, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let overlay: ConfigOverlay = serde_yaml::from_str(&content)?;
    Ok(overlay)
}

/// Load the config file settings, or none if there is no usable file.
///
/// An explicit path must exist and parse; its errors are returned. A
/// discovered file that fails to load is skipped with a warning.
pub fn load_or_default(
    explicit_path: Option<&Path>,
) -> Result<(ConfigOverlay, Option<PathBuf>), ConfigFileError> {
    if let Some(path) = explicit_path {
        let overlay = load_config_overlay(path)?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok((overlay, Some(path.to_path_buf())));
    }

    let Some(path) = discover_config_file(None) else {
        return Ok((ConfigOverlay::default(), None));
    };
    match load_config_overlay(&path) {
        Ok(overlay) => {
            tracing::debug!("Loaded config from {}", path.display());
            Ok((overlay, Some(path)))
        }
        Err(e) => {
            tracing::warn!("Ignoring config file {}: {}", path.display(), e);
            Ok((ConfigOverlay::default(), None))
        }
    }
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Apply every setting present in a config file over this configuration.
    pub fn merge(&mut self, overlay: &ConfigOverlay) {
        if let Some(target) = overlay.binding.target {
            self.binding.target = target;
        }

        if let Some(format) = overlay.output.format {
            self.output.format = format;
        }
        if overlay.output.file.is_some() {
            self.output.file.clone_from(&overlay.output.file);
        }

        if let Some(quiet) = overlay.behavior.quiet {
            self.behavior.quiet = quiet;
        }
        if let Some(fail_on_error) = overlay.behavior.fail_on_error {
            self.behavior.fail_on_error = fail_on_error;
        }
        if let Some(parallel) = overlay.behavior.parallel {
            self.behavior.parallel = parallel;
        }
    }

    /// Load a config file and layer it over a base configuration.
    ///
    /// Returns the merged configuration and the file it came from, if any.
    pub fn from_file_over(
        base: Self,
        config_path: Option<&Path>,
    ) -> Result<(Self, Option<PathBuf>), ConfigFileError> {
        let (overlay, loaded_from) = load_or_default(config_path)?;
        let mut config = base;
        config.merge(&overlay);
        Ok((config, loaded_from))
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# cpe-tools configuration
# Place this file at .cpe-tools.yaml in your project root or ~/.config/cpe-tools/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# cpe-tools Configuration File
# ============================
#
# Place it at:
#   - .cpe-tools.yaml in your project root
#   - ~/.config/cpe-tools/cpe-tools.yaml for global config
#
# CLI arguments always override file settings.

# Binding configuration
binding:
  # Forms to produce: uri (CPE 2.2), fs (CPE 2.3 formatted string), both
  target: both

# Output configuration
output:
  # Format: text, json, csv
  format: text
  # Output file path (omit for stdout)
  # file: names.txt

# Behavior flags
behavior:
  # Suppress non-essential output
  quiet: false
  # Exit with code 1 if any batch entry fails to bind
  fail_on_error: false
  # Bind batch entries in parallel
  parallel: true
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
