//! Application-level configuration.
//!
//! - [`MergeParams`]: merge policy plus how agent responses are loaded

pub mod merge_params;

pub use merge_params::MergeParams;
