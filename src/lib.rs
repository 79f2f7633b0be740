//! **Bind CPE Well-Formed Names to their standard textual forms.**
//!
//! `cpe-tools` implements the binding half of the CPE Naming Specification
//! v2.3: it turns a [`WellFormedName`] (WFN) into either the legacy CPE v2.2
//! URI or the CPE v2.3 formatted string. It powers both the `cpe-tools`
//! command-line tool and a Rust library for embedding in SBOM and
//! vulnerability-management pipelines.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`WellFormedName`], [`Attribute`], [`AttributeValue`] and
//!   [`LogicalValue`]. Attribute values are either already-quoted strings or
//!   the logical values ANY and NA; unset attributes read as ANY.
//! - **[`binding`]**: [`bind_to_uri`] and [`bind_to_fs`], plus the
//!   character-level helpers they are built from.
//! - **[`pipeline`]**: batch loading of names from JSON/YAML and parallel
//!   binding into [`BindingReport`]s.
//! - **[`reports`]**: text, JSON and CSV renderings of a report.
//! - **[`config`]**: YAML configuration, presets and validation.
//!
//! ## Getting Started
//!
//! ```
//! use cpe_tools::{bind_to_fs, bind_to_uri, LogicalValue, WellFormedName};
//!
//! let wfn = WellFormedName::builder()
//!     .part("a")
//!     .vendor("microsoft")
//!     .product("internet_explorer")
//!     .version("8\\.0\\.6001")
//!     .update("beta")
//!     .edition(LogicalValue::Any)
//!     .language("sp2")
//!     .build();
//!
//! assert_eq!(
//!     bind_to_uri(&wfn).unwrap(),
//!     "cpe:/a:microsoft:internet_explorer:8.0.6001:beta::sp2"
//! );
//! assert_eq!(
//!     bind_to_fs(&wfn).unwrap(),
//!     "cpe:2.3:a:microsoft:internet_explorer:8.0.6001:beta:*:sp2:*:*:*:*"
//! );
//! ```
//!
//! Values must already be WFN-quoted: every character other than letters,
//! digits, `_` and the wildcards `?`/`*` is preceded by a backslash. Malformed
//! values are rejected with a [`CpeError`], never silently repaired.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod binding;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use binding::{bind, bind_to_fs, bind_to_uri, CpeFormat};
pub use config::{AppConfig, AppConfigBuilder, BindTarget, ConfigPreset};
pub use config::{ConfigError, Validatable};
pub use error::{CpeError, MalformedValueKind, Result};
pub use model::{Attribute, AttributeValue, LogicalValue, WellFormedName, WellFormedNameBuilder};
pub use pipeline::{bind_all, load_names, BindingRecord, BindingReport};
pub use reports::{ReportFormat, ReportGenerator};
