pub mod file_entry;
pub mod scan_result;
pub mod size_format;

pub use file_entry::*;
pub use scan_result::*;
pub use size_format::*;
