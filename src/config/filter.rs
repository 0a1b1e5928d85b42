//! Filtering configuration for file selection.
//!
//! This module defines the filtering options that decide which files are
//! reported, and the sorting criteria used to order them in the output.

use clap::ValueEnum;

/// Configuration for file filtering criteria.
///
/// The size threshold is kept as raw magnitude and unit so that an invalid
/// unit from the config file surfaces as a fatal error when the criteria are
/// resolved, rather than being silently replaced by a default.
#[derive(Clone, Debug)]
pub struct FilterOptions {
    /// Files must be strictly larger than this many `unit`s
    pub size: u64,

    /// Unit of `size` (`KB`, `MB` or `GB`, case-insensitive)
    pub unit: String,

    /// Substring that must appear in the file name (without extension)
    pub keyword: Option<String>,

    /// Extension the file must have, with or without a leading dot
    pub extension: Option<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            size: 0,
            unit: "KB".to_string(),
            keyword: None,
            extension: None,
        }
    }
}

/// Enumeration of supported sorting criteria for the result list.
///
/// Each variant has a natural default direction:
/// - `Size`: largest first (descending)
/// - `Name`: file name alphabetically (ascending, case-insensitive)
/// - `Path`: full path alphabetically (ascending)
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum SortCriteria {
    /// Sort by file size (largest first by default)
    Size,

    /// Sort by file name alphabetically (A-Z by default)
    Name,

    /// Sort by full path alphabetically
    Path,
}

/// Configuration for result sorting behavior.
///
/// When `criteria` is `None`, files are displayed in scan order.
#[derive(Clone, Debug)]
pub struct SortOptions {
    /// The sorting criterion to apply, or `None` to preserve scan order
    pub criteria: Option<SortCriteria>,

    /// Whether to reverse the sort order
    pub reverse: bool,
}
