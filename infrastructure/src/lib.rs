//! Infrastructure layer for ara-merge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod query_dir;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileInputConfig, FileMergeConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use logging::JsonlMergeEventLogger;
pub use query_dir::{FsMergeWriter, FsResponseSource, QueryLayout, discover_query_dirs};
