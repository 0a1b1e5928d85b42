//! Configuration types for scanning, filtering and sorting.
//!
//! Options are assembled by the CLI layer from command-line arguments and the
//! optional [`FileConfig`] file, then handed to the scanner and the filtering
//! functions.

pub mod file;
pub mod filter;
pub mod scan;

pub use file::FileConfig;
pub use filter::{FilterOptions, SortCriteria, SortOptions};
pub use scan::ScanOptions;
