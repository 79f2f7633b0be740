//! Pipeline orchestration: load names → bind → report → write.
//!
//! Shared by the CLI command handlers.

mod batch;
mod input;
mod output;

pub use batch::{bind_all, BatchSummary, BindingRecord, BindingReport};
pub use input::{load_names, parse_names_str, InputFormat};
pub use output::{write_output, OutputTarget};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Every name was bound
    pub const SUCCESS: i32 = 0;
    /// At least one name failed to bind (with `--fail-on-error`)
    pub const BINDING_FAILED: i32 = 1;
}
