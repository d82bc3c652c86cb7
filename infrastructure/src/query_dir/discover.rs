//! Query directory discovery under a root directory

use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Immediate sub-directories of `root` that contain `query_graph_file`, sorted
pub fn discover_query_dirs(root: &Path, query_graph_file: &str) -> io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();

    for entry in std::fs::read_dir(root)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        if path.join(query_graph_file).is_file() {
            dirs.push(path);
        } else {
            debug!(
                "Skipping {}: no {} found",
                path.display(),
                query_graph_file
            );
        }
    }

    dirs.sort();
    Ok(dirs)
}
