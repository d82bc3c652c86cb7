//! Merge execution parameters.

use aramerge_domain::MergeOptions;

/// Parameters for one query merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeParams {
    /// Domain merge policy (identity delimiter, essence qnode).
    pub options: MergeOptions,
    /// Parse agent response files concurrently.
    ///
    /// Folding is always serialized in agent-name order regardless.
    pub parallel_loads: bool,
}

impl Default for MergeParams {
    fn default() -> Self {
        Self {
            options: MergeOptions::default(),
            parallel_loads: true,
        }
    }
}

impl MergeParams {
    pub fn with_options(mut self, options: MergeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel_loads = false;
        self
    }
}
