//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and options using the
//! [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use find_big_files::config::file::{FileConfig, expand_tilde};
use find_big_files::config::{FilterOptions, ScanOptions, SortCriteria, SortOptions};

/// Command-line arguments selecting which files are reported.
#[derive(Parser)]
struct FilteringArgs {
    /// Only report files larger than this size (in --unit units)
    ///
    /// Files exactly at the threshold are not reported. Defaults to 0, which
    /// reports every non-empty file.
    #[arg(short = 's', long)]
    size: Option<u64>,

    /// Unit of --size: KB, MB or GB (case-insensitive, base 1024)
    #[arg(short = 'u', long)]
    unit: Option<String>,

    /// Only report files whose name (without extension) contains this keyword
    ///
    /// Matching is case-insensitive. When combined with --ext, a file matching
    /// either filter is reported.
    #[arg(short = 'k', long)]
    keyword: Option<String>,

    /// Only report files with this extension (e.g. "log" or ".log")
    ///
    /// Matching is case-insensitive. When combined with --keyword, a file
    /// matching either filter is reported.
    #[arg(short = 'e', long = "ext", visible_alias = "extension")]
    extension: Option<String>,

    /// Sort results by the given criterion before display
    ///
    /// Supported values: size (largest first), name (alphabetical by file
    /// name), path (alphabetical by full path). Without it, results are shown
    /// in scan order.
    #[arg(long, value_enum)]
    sort: Option<SortCriteria>,

    /// Reverse the sort order
    #[arg(long)]
    reverse: bool,
}

/// Command-line arguments for controlling directory scanning behavior.
#[derive(Parser)]
struct ScanningArgs {
    /// Show access errors that occur while scanning
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Directory names to skip during scanning
    ///
    /// Can be specified multiple times. Merged with the config file list.
    #[arg(long, action = clap::ArgAction::Append)]
    skip: Vec<PathBuf>,

    /// Maximum directory depth to scan
    ///
    /// A value of 0 only looks at files directly inside the root directory.
    /// When not set, the scan is unlimited.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Do not follow symbolic links
    ///
    /// By default links are resolved; linked directories are walked once
    /// even if they form a cycle.
    #[arg(long)]
    no_follow_links: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser)]
#[command(name = "find-big-files")]
#[command(
    about = "Recursively find files larger than a size threshold, optionally filtered by name keyword or extension"
)]
#[command(version)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Directory to search
    ///
    /// Defaults to the current directory if not specified.
    dir: Option<PathBuf>,

    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, all human-readable output (colors, spinner, summary) is
    /// suppressed and a single JSON document is printed to stdout.
    #[arg(long)]
    json: bool,

    /// Filtering options
    #[command(flatten)]
    filtering: FilteringArgs,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Resolve the directory to scan.
    ///
    /// Priority: CLI argument > config file `dir` > current directory (`.`).
    /// Tilde expansion is applied to the config file path.
    #[must_use]
    pub fn directory(&self, config: &FileConfig) -> PathBuf {
        if let Some(dir) = &self.dir {
            return dir.clone();
        }

        config
            .dir
            .as_deref()
            .map_or_else(|| PathBuf::from("."), expand_tilde)
    }

    /// Extract filtering options from CLI args and config file.
    ///
    /// Priority: CLI argument > config file > hardcoded default. The unit is
    /// passed through unvalidated; it is checked when the match criteria are
    /// built.
    #[must_use]
    pub fn filter_options(&self, config: &FileConfig) -> FilterOptions {
        let defaults = FilterOptions::default();

        FilterOptions {
            size: self
                .filtering
                .size
                .or(config.filtering.size)
                .unwrap_or(defaults.size),
            unit: self
                .filtering
                .unit
                .clone()
                .or_else(|| config.filtering.unit.clone())
                .unwrap_or(defaults.unit),
            keyword: self
                .filtering
                .keyword
                .clone()
                .or_else(|| config.filtering.keyword.clone()),
            extension: self
                .filtering
                .extension
                .clone()
                .or_else(|| config.filtering.extension.clone()),
        }
    }

    /// Extract scanning options from CLI args and config file.
    ///
    /// - **verbose**: CLI flag `||` config value `||` `false`
    /// - **skip**: merged from both sources (config values first, then CLI)
    /// - **`max_depth`**: CLI > config > unlimited
    /// - **`follow_links`**: `--no-follow-links` wins, then config, then `true`
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        let mut skip = config.scanning.skip.clone().unwrap_or_default();
        skip.extend(self.scanning.skip.clone());

        ScanOptions {
            verbose: self.scanning.verbose || config.scanning.verbose.unwrap_or(false),
            skip,
            max_depth: self.scanning.max_depth.or(config.scanning.max_depth),
            follow_links: !self.scanning.no_follow_links
                && config.scanning.follow_links.unwrap_or(true),
        }
    }

    /// Extract sorting options from CLI args and config file.
    ///
    /// Priority: CLI argument > config file > default (scan order). An
    /// unrecognised sort name in the config file is ignored.
    #[must_use]
    pub fn sort_options(&self, config: &FileConfig) -> SortOptions {
        SortOptions {
            criteria: self.filtering.sort.or_else(|| {
                config
                    .filtering
                    .sort
                    .as_ref()
                    .and_then(|s| SortCriteria::from_str(s, true).ok())
            }),
            reverse: self.filtering.reverse || config.filtering.reverse.unwrap_or(false),
        }
    }
}
