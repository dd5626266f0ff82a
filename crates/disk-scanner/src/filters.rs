use llf_common::AppConfig;
use walkdir::DirEntry;

/// Restrictions applied while walking
#[derive(Debug, Clone, Default)]
pub struct ScanFilters {
    /// Levels below the root to descend; the root's children are depth 1
    pub max_depth: Option<usize>,
    /// Ignore dot-prefixed files and do not enter dot-prefixed directories
    pub skip_hidden: bool,
}

impl ScanFilters {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            skip_hidden: config.skip_hidden,
        }
    }

    /// Whether the walk should yield (and, for directories, enter) `entry`.
    pub fn admits(&self, entry: &DirEntry) -> bool {
        // The root is always walked, whatever its name.
        if entry.depth() == 0 {
            return true;
        }
        !(self.skip_hidden && is_hidden(entry))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().starts_with(b".")
}
