//! Collection management and printing for found files.

use colored::Colorize;

use crate::highlight::Highlighter;
use crate::utils::format_bytes;

use super::FoundFile;

/// A collection of found files with listing and summary operations.
#[derive(Debug, Default)]
pub struct FoundFiles(Vec<FoundFile>);

impl From<Vec<FoundFile>> for FoundFiles {
    fn from(files: Vec<FoundFile>) -> Self {
        Self(files)
    }
}

impl FoundFiles {
    /// Sum of the sizes of every file in the collection.
    ///
    /// Saturates instead of overflowing.
    #[must_use]
    pub fn get_total_size(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |total, file| total.saturating_add(file.size))
    }

    /// Get the number of files in the collection.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return a slice of the underlying files.
    #[must_use]
    pub fn as_slice(&self) -> &[FoundFile] {
        &self.0
    }

    /// Render one listing line per file: the path followed by the
    /// human-readable size, with matched name fragments highlighted when a
    /// name filter is active.
    #[must_use]
    pub fn listing_lines(&self, highlighter: &Highlighter) -> Vec<String> {
        self.0
            .iter()
            .map(|file| {
                if !highlighter.is_active() {
                    return file.to_string();
                }

                format!(
                    "{} {}",
                    highlighter.highlight(&file.path),
                    format_bytes(file.size)
                )
            })
            .collect()
    }

    /// Print the listing to stdout.
    pub fn print_listing(&self, highlighter: &Highlighter) {
        for line in self.listing_lines(highlighter) {
            println!("{line}");
        }
    }

    /// Print the number of files found and their combined size.
    ///
    /// # Output Format
    ///
    /// ```text
    ///   📄 12 files
    ///   💾 Total size: 3.42 GB
    /// ```
    pub fn print_summary(&self) {
        let noun = if self.len() == 1 { "file" } else { "files" };

        println!(
            "  📄 {} {noun}",
            self.len().to_string().bright_white()
        );
        println!(
            "  💾 Total size: {}",
            format_bytes(self.get_total_size()).bright_green().bold()
        );
    }
}
