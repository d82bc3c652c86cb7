//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod merge_options;
mod output_format;
pub mod validation;

pub use merge_options::{DEFAULT_DELIMITER, MergeOptions};
pub use output_format::OutputFormat;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
