//! Configuration module for cpe-tools.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//!
//! # Configuration File
//!
//! Place a `.cpe-tools.yaml` file in your project root or `~/.config/cpe-tools/`:
//!
//! ```yaml
//! binding:
//!   target: fs
//! output:
//!   format: json
//! behavior:
//!   fail_on_error: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::ConfigPreset;
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, BindTarget, BindingConfig, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, generate_example_config,
    generate_full_example_config, load_config_overlay, load_or_default,
    ConfigFileError, ConfigOverlay, CONFIG_DIR_NAME, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.cpe-tools.yaml` files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
