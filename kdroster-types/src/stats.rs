use serde::{Deserialize, Serialize};

/// Spatial index statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of live records
    pub records: usize,
    /// Height of the tree (0 when empty)
    pub depth: usize,
    /// Number of full rebuilds performed
    pub rebuilds: u64,
    /// Inserts plus successful removals
    pub operations: u64,
}

impl IndexStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_operation(&mut self) {
        self.operations += 1;
    }

    pub fn record_rebuild(&mut self) {
        self.rebuilds += 1;
    }
}
