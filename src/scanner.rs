//! Directory walking and file matching.
//!
//! This module provides the scanner that traverses a directory tree
//! depth-first and collects every regular file meeting the configured
//! [`MatchCriteria`]. The walk uses an explicit stack of pending directories,
//! so tree depth is bounded by heap memory rather than the call stack, and a
//! set of canonical directory paths so symbolic link cycles are entered once.
//!
//! I/O failures never abort a walk. An unreadable directory contributes no
//! files; a file that cannot be stat'ed is skipped on its own. The failures
//! are collected and reported afterwards.

use std::{
    collections::HashSet,
    fs::{self, DirEntry, Metadata},
    io,
    path::{Path, PathBuf},
    time::Duration,
};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{config::ScanOptions, filtering::MatchCriteria, found::FoundFile};

/// Directory scanner for finding files that match a set of criteria.
#[derive(Debug)]
pub struct Scanner {
    /// Configuration options for walking behavior
    scan_options: ScanOptions,

    /// Size threshold and name filters every reported file must meet
    criteria: MatchCriteria,

    /// When `true`, suppresses the progress spinner and the error hint
    quiet: bool,
}

impl Scanner {
    /// Create a new scanner with the specified options.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use std::path::Path;
    /// # use find_big_files::{config::ScanOptions, filtering::MatchCriteria, scanner::Scanner};
    /// let scanner = Scanner::new(ScanOptions::default(), MatchCriteria::new(1_024, vec![]));
    /// let found = scanner.scan_directory(Path::new("."));
    /// println!("Found {} files", found.len());
    /// ```
    #[must_use]
    pub const fn new(scan_options: ScanOptions, criteria: MatchCriteria) -> Self {
        Self {
            scan_options,
            criteria,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode.
    ///
    /// Quiet mode hides the scanning spinner, which is required for `--json`
    /// output so that only the final document is printed.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Walk the tree under `root` and return every matching regular file.
    ///
    /// Files are returned in walk order: the files of a directory come before
    /// the contents of its subdirectories, and siblings keep the order the
    /// operating system listed them in. Callers that need a stable order
    /// should sort the result.
    ///
    /// Access errors are printed to stderr when verbose mode is enabled;
    /// otherwise a hint names the first one and the total count.
    pub fn scan_directory(&self, root: &Path) -> Vec<FoundFile> {
        let progress = self.progress_bar();
        let mut errors = Vec::new();

        let found = self.walk(root, &mut errors, &progress);

        progress.finish_and_clear();
        self.report_errors(&errors);

        found
    }

    /// Create the scanning spinner, hidden in quiet mode.
    fn progress_bar(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Scanning...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Print collected errors in verbose mode, or a one-line hint otherwise.
    fn report_errors(&self, errors: &[String]) {
        if self.scan_options.verbose {
            for error in errors {
                eprintln!("{}", error.red());
            }
        } else if !self.quiet
            && let Some(hint) = error_hint(errors)
        {
            eprintln!("{}", hint.yellow());
        }
    }

    /// Depth-first walk over `root` with an explicit stack of pending
    /// directories.
    ///
    /// Each stack entry carries its depth below `root`. A directory's files are
    /// checked as it is listed; its subdirectories are pushed in reverse so the
    /// first listed one is walked next.
    fn walk(&self, root: &Path, errors: &mut Vec<String>, progress: &ProgressBar) -> Vec<FoundFile> {
        let mut visited: HashSet<PathBuf> = HashSet::new();
        let mut found = Vec::new();
        let mut pending = vec![(root.to_path_buf(), 0usize)];

        while let Some((dir, depth)) = pending.pop() {
            match fs::canonicalize(&dir) {
                Ok(canonical) => {
                    if !visited.insert(canonical) {
                        continue;
                    }
                }
                Err(e) => {
                    errors.push(format!("Error resolving {}: {e}", dir.display()));
                    continue;
                }
            }

            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) => {
                    errors.push(format!("Error reading directory {}: {e}", dir.display()));
                    continue;
                }
            };

            let mut subdirs = Vec::new();

            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        errors.push(format!("Error reading entry in {}: {e}", dir.display()));
                        continue;
                    }
                };

                let path = entry.path();
                let metadata = match self.entry_metadata(&entry) {
                    Ok(Some(metadata)) => metadata,
                    Ok(None) => continue,
                    Err(e) => {
                        errors.push(format!("Error reading metadata of {}: {e}", path.display()));
                        continue;
                    }
                };

                if metadata.is_dir() {
                    if self.should_descend(&path, depth) {
                        subdirs.push(path);
                    }
                } else if metadata.is_file() && self.criteria.matches(&path, metadata.len()) {
                    found.push(FoundFile::new(path, metadata.len()));
                    progress.set_message(format!("Scanning... {} found", found.len()));
                }
            }

            pending.extend(subdirs.into_iter().rev().map(|sub| (sub, depth + 1)));
        }

        found
    }

    /// Stat a directory entry, resolving symbolic links when they are followed.
    ///
    /// Returns `Ok(None)` for links that should be ignored.
    fn entry_metadata(&self, entry: &DirEntry) -> io::Result<Option<Metadata>> {
        if entry.file_type()?.is_symlink() {
            if !self.scan_options.follow_links {
                return Ok(None);
            }
            return fs::metadata(entry.path()).map(Some);
        }

        entry.metadata().map(Some)
    }

    /// Decide whether a subdirectory found at `depth` should be walked.
    fn should_descend(&self, path: &Path, depth: usize) -> bool {
        if self
            .scan_options
            .max_depth
            .is_some_and(|max_depth| depth >= max_depth)
        {
            return false;
        }

        !self.is_in_skip_list(path)
    }

    /// Check whether the directory's name is in the skip list.
    fn is_in_skip_list(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| {
            self.scan_options
                .skip
                .iter()
                .any(|skip| skip.as_os_str() == name)
        })
    }
}

/// One-line summary of collected errors for non-verbose runs, naming the
/// first failure.
fn error_hint(errors: &[String]) -> Option<String> {
    let first = errors.first()?;

    Some(match errors.len() {
        1 => format!("⚠️  {first} (use --verbose for details)"),
        n => format!(
            "⚠️  {n} entries could not be read, first: {first} (use --verbose for details)"
        ),
    })
}
