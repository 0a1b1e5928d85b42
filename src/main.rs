//! # find-big-files
//!
//! A small CLI tool that recursively scans a directory and lists the files
//! larger than a given size, optionally narrowed down by a keyword in the
//! file name or by file extension.
//!
//! ## Usage
//!
//! ```bash
//! # Every non-empty file under the current directory
//! find-big-files
//!
//! # Files over 100 MB in ~/Downloads
//! find-big-files ~/Downloads --size 100 --unit mb
//!
//! # Files over 1 KB whose name contains "backup" or that end in .zip
//! find-big-files --size 1 --keyword backup --ext zip
//! ```

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use find_big_files::{
    config::FileConfig,
    filtering::{MatchCriteria, sort_files},
    found::FoundFiles,
    highlight::Highlighter,
    output::JsonOutput,
    scanner::Scanner,
};
use std::process::exit;

/// Entry point for the find-big-files application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, resolves the layered configuration, walks the
/// directory and prints the matches.
///
/// # Errors
///
/// Returns configuration errors (invalid size unit, threshold overflow,
/// missing root directory), config subcommand failures, and JSON
/// serialization errors. Per-file I/O errors never reach this point.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let json_mode = args.json();
    let file_config = load_config(json_mode);

    let dir = args.directory(&file_config);
    let scan_options = args.scan_options(&file_config);
    let filter_options = args.filter_options(&file_config);
    let sort_options = args.sort_options(&file_config);

    let criteria = MatchCriteria::from_options(&filter_options)?;

    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let highlighter = Highlighter::new(&criteria)?;
    let min_size = criteria.min_size();

    let scanner = Scanner::new(scan_options, criteria).with_quiet(json_mode);
    let mut found = scanner.scan_directory(&dir);
    sort_files(&mut found, &sort_options);

    let files: FoundFiles = found.into();

    if json_mode {
        let output = JsonOutput::from_found(&dir, min_size, files.as_slice());
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if files.is_empty() {
        println!("{}", "✨ No files match the specified criteria!".green());
        return Ok(());
    }

    files.print_listing(&highlighter);
    println!();
    files.print_summary();

    Ok(())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# find-big-files configuration
# All values shown are their defaults. Uncomment and change as needed.

# Default directory to scan (defaults to current directory when not set)
# dir = "."

[filtering]
# Only report files larger than this many units
# size = 0

# Unit of `size`: KB, MB or GB (base 1024)
# unit = "KB"

# Only report files whose name (without extension) contains this keyword
# keyword = ""

# Only report files with this extension
# extension = ""

# Sort output by: size, name, path
# sort = "size"

# Reverse the sort order
# reverse = false

[scanning]
# Show access errors encountered during scanning
# verbose = false

# Directory names to skip during scanning
# skip = []

# Maximum directory depth to scan (unlimited when not set)
# max_depth = 10

# Follow symbolic links
# follow_links = true
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_str(val: Option<&str>, default: &str) -> String {
        val.map_or_else(
            || format!("\"{default}\"  (default)"),
            |v| format!("\"{v}\""),
        )
    }
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_num<T: ToString>(val: Option<T>, default: &str) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_paths(val: Option<&[std::path::PathBuf]>) -> String {
        match val {
            Some(v) if !v.is_empty() => {
                let items: Vec<String> = v.iter().map(|p| format!("\"{}\"", p.display())).collect();
                format!("[{}]", items.join(", "))
            }
            _ => "[]  (default)".to_string(),
        }
    }

    let dir_str = config.dir.as_ref().map_or_else(
        || "\".\"  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );
    let none = || "(none)  (default)".to_string();

    format!(
        "\
dir          = {dir}

[filtering]
size         = {size}
unit         = {unit}
keyword      = {keyword}
extension    = {extension}
sort         = {sort}
reverse      = {reverse}

[scanning]
verbose      = {verbose}
skip         = {skip}
max_depth    = {max_depth}
follow_links = {follow_links}",
        dir = dir_str,
        size = show_num(config.filtering.size, "0"),
        unit = show_str(config.filtering.unit.as_deref(), "KB"),
        keyword = config
            .filtering
            .keyword
            .as_deref()
            .map_or_else(none, |v| format!("\"{v}\"")),
        extension = config
            .filtering
            .extension
            .as_deref()
            .map_or_else(none, |v| format!("\"{v}\"")),
        sort = config
            .filtering
            .sort
            .as_deref()
            .map_or_else(none, |v| format!("\"{v}\"")),
        reverse = show_bool(config.filtering.reverse, false),
        verbose = show_bool(config.scanning.verbose, false),
        skip = show_paths(config.scanning.skip.as_deref()),
        max_depth = show_num(config.scanning.max_depth, "unlimited"),
        follow_links = show_bool(config.scanning.follow_links, true),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}
