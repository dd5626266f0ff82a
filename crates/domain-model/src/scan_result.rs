use serde::{Deserialize, Serialize};

use crate::FileEntry;

/// Outcome of one walk over a directory tree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// Canonical root that was walked
    pub root: String,
    /// Largest regular files, size descending; ties stay in walk order
    pub largest: Vec<FileEntry>,
    /// Regular files compared
    pub file_count: u64,
    /// Entries dropped because access was denied
    pub skipped_count: u64,
    pub scan_time_ms: u64,
}

impl ScanReport {
    /// The single largest file, if the tree held any regular file at all.
    pub fn best(&self) -> Option<&FileEntry> {
        self.largest.first()
    }
}
