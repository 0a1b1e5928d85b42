//! Core data structure for a matched file.

use std::{
    fmt::{Display, Formatter, Result},
    path::PathBuf,
};

use serde::Serialize;

use crate::utils::format_bytes;

/// A regular file that satisfied the size threshold and name filters.
///
/// Created once by the scanner per matching file and never modified
/// afterwards.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct FoundFile {
    /// Path of the file, as reached from the scan root
    pub path: PathBuf,

    /// Size of the file in bytes at the time it was stat'ed
    pub size: u64,
}

impl FoundFile {
    /// Create a new found file entry.
    #[must_use]
    pub const fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

impl Display for FoundFile {
    /// Format as `<path> <human-readable size>`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}", self.path.display(), format_bytes(self.size))
    }
}
