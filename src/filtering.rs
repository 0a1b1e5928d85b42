//! File filtering functionality.
//!
//! This module provides the predicates used to decide whether a file is
//! reported: a strict minimum size, plus optional name filters on the file's
//! keyword and extension. Name filters are combined with logical OR.

use std::path::Path;

use anyhow::Result;

use crate::config::{FilterOptions, SortCriteria, SortOptions};
use crate::found::FoundFile;
use crate::utils::to_bytes;

/// A predicate over a file's name.
///
/// Both variants store their pattern lowercased, and matching is
/// case-insensitive.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FileFilter {
    /// Substring match against the file name without its extension
    Keyword(String),

    /// Exact match against the file's extension (stored without a leading dot)
    Extension(String),
}

impl FileFilter {
    /// Build a keyword filter, or `None` if the keyword is empty.
    #[must_use]
    pub fn keyword(keyword: &str) -> Option<Self> {
        if keyword.is_empty() {
            return None;
        }

        Some(Self::Keyword(keyword.to_lowercase()))
    }

    /// Build an extension filter, or `None` if nothing is left once a
    /// leading `.` has been removed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use find_big_files::filtering::FileFilter;
    /// assert_eq!(FileFilter::extension(".TXT"), FileFilter::extension("txt"));
    /// assert_eq!(FileFilter::extension("."), None);
    /// ```
    #[must_use]
    pub fn extension(extension: &str) -> Option<Self> {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        if extension.is_empty() {
            return None;
        }

        Some(Self::Extension(extension.to_lowercase()))
    }

    /// Check whether the file at `path` satisfies this filter.
    ///
    /// Only the final path component is inspected.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        match self {
            Self::Keyword(keyword) => path
                .file_stem()
                .is_some_and(|stem| stem.to_string_lossy().to_lowercase().contains(keyword)),
            Self::Extension(extension) => path
                .extension()
                .is_some_and(|ext| ext.to_string_lossy().to_lowercase() == *extension),
        }
    }
}

/// The full set of criteria a file must meet to be reported.
#[derive(Clone, Debug, Default)]
pub struct MatchCriteria {
    min_size: u64,
    filters: Vec<FileFilter>,
}

impl MatchCriteria {
    /// Create criteria from an already resolved byte threshold and name filters.
    #[must_use]
    pub const fn new(min_size: u64, filters: Vec<FileFilter>) -> Self {
        Self { min_size, filters }
    }

    /// Resolve filtering options into match criteria.
    ///
    /// # Errors
    ///
    /// Returns an error if the size unit is not one of KB, MB or GB, or if
    /// the threshold overflows `u64`. Both are configuration errors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use find_big_files::{config::FilterOptions, filtering::MatchCriteria};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let opts = FilterOptions {
    ///     size: 1,
    ///     unit: "mb".to_string(),
    ///     keyword: None,
    ///     extension: Some("iso".to_string()),
    /// };
    /// let criteria = MatchCriteria::from_options(&opts)?;
    /// assert_eq!(criteria.min_size(), 1_048_576);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_options(opts: &FilterOptions) -> Result<Self> {
        let min_size = to_bytes(opts.size, &opts.unit)?;

        let filters = opts
            .keyword
            .as_deref()
            .and_then(FileFilter::keyword)
            .into_iter()
            .chain(opts.extension.as_deref().and_then(FileFilter::extension))
            .collect();

        Ok(Self::new(min_size, filters))
    }

    /// The size in bytes a file must exceed.
    #[must_use]
    pub const fn min_size(&self) -> u64 {
        self.min_size
    }

    /// The active name filters.
    #[must_use]
    pub fn filters(&self) -> &[FileFilter] {
        &self.filters
    }

    /// Check the size criterion. The threshold itself is excluded.
    #[must_use]
    pub const fn size_matches(&self, size: u64) -> bool {
        size > self.min_size
    }

    /// Check the name filters.
    ///
    /// With no filters every name matches; otherwise any single matching
    /// filter is enough.
    #[must_use]
    pub fn name_matches(&self, path: &Path) -> bool {
        self.filters.is_empty() || self.filters.iter().any(|filter| filter.matches(path))
    }

    /// Check both criteria, short-circuiting on size.
    #[must_use]
    pub fn matches(&self, path: &Path, size: u64) -> bool {
        self.size_matches(size) && self.name_matches(path)
    }
}

/// Sort found files in place according to the given sorting options.
///
/// When `sort_opts.criteria` is `None`, the list is left in scan order.
/// Setting `sort_opts.reverse` flips the resulting order.
pub fn sort_files(files: &mut [FoundFile], sort_opts: &SortOptions) {
    let Some(criteria) = sort_opts.criteria else {
        return;
    };

    match criteria {
        SortCriteria::Size => files.sort_by(|a, b| b.size.cmp(&a.size)),
        SortCriteria::Name => files.sort_by_cached_key(|f| {
            f.path
                .file_name()
                .map(|n| n.to_string_lossy().to_lowercase())
                .unwrap_or_default()
        }),
        SortCriteria::Path => files.sort_by(|a, b| a.path.cmp(&b.path)),
    }

    if sort_opts.reverse {
        files.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn options(size: u64, unit: &str, keyword: Option<&str>, ext: Option<&str>) -> FilterOptions {
        FilterOptions {
            size,
            unit: unit.to_string(),
            keyword: keyword.map(str::to_string),
            extension: ext.map(str::to_string),
        }
    }

    fn found(path: &str, size: u64) -> FoundFile {
        FoundFile::new(PathBuf::from(path), size)
    }

    // ── Keyword filter ──────────────────────────────────────────────────

    #[test]
    fn test_keyword_matches_substring_of_stem() {
        let filter = FileFilter::keyword("foo").unwrap();

        assert!(filter.matches(Path::new("foo.txt")));
        assert!(filter.matches(Path::new("myfoo.txt")));
        assert!(filter.matches(Path::new("/some/dir/foobar")));
        assert!(!filter.matches(Path::new("bar.txt")));
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let filter = FileFilter::keyword("Foo").unwrap();

        assert!(filter.matches(Path::new("FOO.txt")));
        assert!(filter.matches(Path::new("myfoo.txt")));
        assert!(filter.matches(Path::new("MyFoO.md")));
    }

    #[test]
    fn test_keyword_ignores_extension_and_directories() {
        let filter = FileFilter::keyword("txt").unwrap();
        assert!(!filter.matches(Path::new("notes.txt")));

        let filter = FileFilter::keyword("photos").unwrap();
        assert!(!filter.matches(Path::new("/home/photos/img.png")));
    }

    #[test]
    fn test_empty_keyword_is_absent() {
        assert_eq!(FileFilter::keyword(""), None);
    }

    // ── Extension filter ────────────────────────────────────────────────

    #[test]
    fn test_extension_matches_exactly() {
        let filter = FileFilter::extension("txt").unwrap();

        assert!(filter.matches(Path::new("a.txt")));
        assert!(filter.matches(Path::new("a.TXT")));
        assert!(!filter.matches(Path::new("a.md")));
        assert!(!filter.matches(Path::new("a.txtx")));
        assert!(!filter.matches(Path::new("txt")));
    }

    #[test]
    fn test_extension_leading_dot_normalized() {
        assert_eq!(
            FileFilter::extension(".txt"),
            Some(FileFilter::Extension("txt".to_string()))
        );
        assert_eq!(FileFilter::extension(".TXT"), FileFilter::extension("txt"));
        assert_eq!(FileFilter::extension(""), None);
        assert_eq!(FileFilter::extension("."), None);
    }

    #[test]
    fn test_extension_uses_last_component() {
        let filter = FileFilter::extension("gz").unwrap();
        assert!(filter.matches(Path::new("archive.tar.gz")));

        let filter = FileFilter::extension("tar").unwrap();
        assert!(!filter.matches(Path::new("archive.tar.gz")));
    }

    // ── Criteria composition ────────────────────────────────────────────

    #[test]
    fn test_criteria_from_options_resolves_threshold() {
        let criteria = MatchCriteria::from_options(&options(2, "kb", None, None)).unwrap();

        assert_eq!(criteria.min_size(), 2_048);
        assert!(criteria.filters().is_empty());
    }

    #[test]
    fn test_criteria_from_options_invalid_unit() {
        assert!(MatchCriteria::from_options(&options(1, "TB", None, None)).is_err());
        assert!(MatchCriteria::from_options(&options(u64::MAX, "GB", None, None)).is_err());
    }

    #[test]
    fn test_criteria_from_options_skips_empty_filters() {
        let criteria =
            MatchCriteria::from_options(&options(0, "KB", Some(""), Some("."))).unwrap();
        assert!(criteria.filters().is_empty());

        let criteria =
            MatchCriteria::from_options(&options(0, "KB", Some("log"), Some("TXT"))).unwrap();
        assert_eq!(
            criteria.filters(),
            &[
                FileFilter::Keyword("log".to_string()),
                FileFilter::Extension("txt".to_string())
            ]
        );
    }

    #[test]
    fn test_size_threshold_is_exclusive() {
        let criteria = MatchCriteria::new(1_024, vec![]);

        assert!(!criteria.size_matches(1_023));
        assert!(!criteria.size_matches(1_024));
        assert!(criteria.size_matches(1_025));
    }

    #[test]
    fn test_size_only_mode_matches_any_name() {
        let criteria = MatchCriteria::new(0, vec![]);

        assert!(criteria.matches(Path::new("anything.bin"), 1));
        assert!(criteria.matches(Path::new("no_extension"), 1));
        assert!(!criteria.matches(Path::new("empty.txt"), 0));
    }

    #[test]
    fn test_name_filters_combined_with_or() {
        let criteria = MatchCriteria::new(
            0,
            vec![
                FileFilter::keyword("report").unwrap(),
                FileFilter::extension("pdf").unwrap(),
            ],
        );

        assert!(criteria.matches(Path::new("report.txt"), 10));
        assert!(criteria.matches(Path::new("invoice.pdf"), 10));
        assert!(criteria.matches(Path::new("report.pdf"), 10));
        assert!(!criteria.matches(Path::new("invoice.txt"), 10));
    }

    #[test]
    fn test_name_filters_not_checked_when_too_small() {
        let criteria = MatchCriteria::new(100, vec![FileFilter::keyword("big").unwrap()]);

        assert!(!criteria.matches(Path::new("big.iso"), 100));
        assert!(criteria.matches(Path::new("big.iso"), 101));
    }

    // ── Sorting ─────────────────────────────────────────────────────────

    #[test]
    fn test_sort_none_preserves_scan_order() {
        let mut files = vec![found("/b", 1), found("/a", 3), found("/c", 2)];
        let sort_opts = SortOptions {
            criteria: None,
            reverse: true,
        };

        sort_files(&mut files, &sort_opts);

        let paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            vec![PathBuf::from("/b"), PathBuf::from("/a"), PathBuf::from("/c")]
        );
    }

    #[test]
    fn test_sort_by_size_largest_first() {
        let mut files = vec![found("/b", 1), found("/a", 3), found("/c", 2)];
        let sort_opts = SortOptions {
            criteria: Some(SortCriteria::Size),
            reverse: false,
        };

        sort_files(&mut files, &sort_opts);

        let sizes: Vec<_> = files.iter().map(|f| f.size).collect();
        assert_eq!(sizes, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_by_size_reversed() {
        let mut files = vec![found("/b", 1), found("/a", 3), found("/c", 2)];
        let sort_opts = SortOptions {
            criteria: Some(SortCriteria::Size),
            reverse: true,
        };

        sort_files(&mut files, &sort_opts);

        let sizes: Vec<_> = files.iter().map(|f| f.size).collect();
        assert_eq!(sizes, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_name_case_insensitive() {
        let mut files = vec![
            found("/z/beta.txt", 1),
            found("/y/Alpha.txt", 1),
            found("/x/gamma.txt", 1),
        ];
        let sort_opts = SortOptions {
            criteria: Some(SortCriteria::Name),
            reverse: false,
        };

        sort_files(&mut files, &sort_opts);

        assert_eq!(files[0].path, PathBuf::from("/y/Alpha.txt"));
        assert_eq!(files[1].path, PathBuf::from("/z/beta.txt"));
        assert_eq!(files[2].path, PathBuf::from("/x/gamma.txt"));
    }

    #[test]
    fn test_sort_by_path() {
        let mut files = vec![found("/b/1", 1), found("/a/2", 1), found("/a/1", 1)];
        let sort_opts = SortOptions {
            criteria: Some(SortCriteria::Path),
            reverse: false,
        };

        sort_files(&mut files, &sort_opts);

        assert_eq!(files[0].path, PathBuf::from("/a/1"));
        assert_eq!(files[1].path, PathBuf::from("/a/2"));
        assert_eq!(files[2].path, PathBuf::from("/b/1"));
    }
}
