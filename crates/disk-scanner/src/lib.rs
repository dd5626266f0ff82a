pub mod scanner;
pub mod filters;
pub mod leaderboard;

pub use scanner::{find_largest, scan_largest};
pub use filters::*;
pub use leaderboard::{Candidate, Leaderboard};
pub use llf_domain::{FileEntry, ScanReport};
