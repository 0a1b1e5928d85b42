//! Highlighting of matched name fragments in displayed paths.
//!
//! When a keyword or extension filter is active, the part of each reported
//! file name that satisfied it is colored so it stands out in the listing.
//! Only the final path component is touched; directory names are printed
//! verbatim even if they happen to contain the keyword.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use regex::{Captures, Regex, RegexBuilder};

use crate::filtering::{FileFilter, MatchCriteria};

/// Colors keyword and extension matches inside file paths.
#[derive(Debug, Default)]
pub struct Highlighter {
    keyword: Option<Regex>,
    extension: Option<String>,
}

impl Highlighter {
    /// Build a highlighter for the name filters of `criteria`.
    ///
    /// # Errors
    ///
    /// Returns an error if the keyword pattern cannot be compiled, which only
    /// happens when it exceeds the regex size limit.
    pub fn new(criteria: &MatchCriteria) -> Result<Self> {
        let mut highlighter = Self::default();

        for filter in criteria.filters() {
            match filter {
                FileFilter::Keyword(keyword) => {
                    highlighter.keyword = Some(
                        RegexBuilder::new(&regex::escape(keyword))
                            .case_insensitive(true)
                            .build()?,
                    );
                }
                FileFilter::Extension(extension) => {
                    highlighter.extension = Some(extension.clone());
                }
            }
        }

        Ok(highlighter)
    }

    /// Whether any name filter is being highlighted.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.keyword.is_some() || self.extension.is_some()
    }

    /// Render `path` for display with matched fragments colored red.
    #[must_use]
    pub fn highlight(&self, path: &Path) -> String {
        let full = path.display().to_string();

        if !self.is_active() {
            return full;
        }

        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            return full;
        };
        let Some(prefix) = full.strip_suffix(name.as_str()) else {
            return full;
        };

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = self.highlight_keyword(&stem);

        match path.extension().map(|e| e.to_string_lossy().into_owned()) {
            Some(ext) => format!("{prefix}{stem}.{}", self.highlight_extension(&ext)),
            None => format!("{prefix}{stem}"),
        }
    }

    fn highlight_keyword(&self, stem: &str) -> String {
        self.keyword.as_ref().map_or_else(
            || stem.to_string(),
            |re| {
                re.replace_all(stem, |caps: &Captures<'_>| caps[0].red().to_string())
                    .into_owned()
            },
        )
    }

    fn highlight_extension(&self, ext: &str) -> String {
        match &self.extension {
            Some(wanted) if ext.to_lowercase() == *wanted => ext.red().to_string(),
            _ => ext.to_string(),
        }
    }
}
