//! Configuration file loading for ara-merge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `ARA_MERGE_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./ara-merge.toml` or `./.ara-merge.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ara-merge/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileInputConfig, FileMergeConfig, FileOutputConfig, FileOutputFormat,
};
pub use loader::ConfigLoader;
