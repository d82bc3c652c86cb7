//! Query directory adapters
//!
//! A query directory holds one query's inputs and receives its outputs:
//!
//! ```text
//! <query_dir>/
//! ├── qg.json                 query graph
//! ├── ara_responses/
//! │   ├── <agent>.json        one response per agent (agent name = file stem)
//! │   └── ...
//! ├── merged_response.json    written by FsMergeWriter
//! └── report.json             written by FsMergeWriter
//! ```
//!
//! All file names come from [`QueryLayout`] and can be configured.

mod discover;
mod layout;
mod source;
mod writer;

pub use discover::discover_query_dirs;
pub use layout::QueryLayout;
pub use source::FsResponseSource;
pub use writer::FsMergeWriter;
