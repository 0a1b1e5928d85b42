//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, the structures in this module are
//! serialized to stdout as a single JSON object, replacing all
//! human-readable output.

use std::path::Path;

use serde::Serialize;

use crate::found::FoundFile;
use crate::utils::format_bytes;

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// The directory the scan started from.
    pub root: String,

    /// Files had to be strictly larger than this many bytes.
    pub threshold_bytes: u64,

    /// Every matching file, in output order.
    pub files: Vec<JsonFileEntry>,

    /// Aggregated summary statistics.
    pub summary: JsonSummary,
}

/// A single file entry in the JSON output.
#[derive(Serialize, Debug)]
pub struct JsonFileEntry {
    /// Path of the file.
    pub path: String,

    /// Size in bytes.
    pub size: u64,

    /// Human-readable formatted size (e.g. `"1.23 GB"`).
    pub size_formatted: String,
}

/// Aggregated summary across all found files.
#[derive(Serialize, Debug)]
pub struct JsonSummary {
    /// Number of files found.
    pub total_files: usize,

    /// Combined size in bytes.
    pub total_size: u64,

    /// Human-readable formatted combined size.
    pub total_size_formatted: String,
}

impl JsonOutput {
    /// Build the output document for a finished scan.
    #[must_use]
    pub fn from_found(root: &Path, threshold_bytes: u64, files: &[FoundFile]) -> Self {
        Self {
            root: root.display().to_string(),
            threshold_bytes,
            files: files.iter().map(JsonFileEntry::from_found).collect(),
            summary: JsonSummary::from_found(files),
        }
    }
}

impl JsonFileEntry {
    /// Convert a `FoundFile` into a `JsonFileEntry`.
    #[must_use]
    pub fn from_found(file: &FoundFile) -> Self {
        Self {
            path: file.path.display().to_string(),
            size: file.size,
            size_formatted: format_bytes(file.size),
        }
    }
}

impl JsonSummary {
    /// Compute summary statistics from a slice of found files.
    #[must_use]
    pub fn from_found(files: &[FoundFile]) -> Self {
        let total_size = files
            .iter()
            .fold(0u64, |total, file| total.saturating_add(file.size));

        Self {
            total_files: files.len(),
            total_size,
            total_size_formatted: format_bytes(total_size),
        }
    }
}
