//! # find-big-files
//!
//! Library backing the `find-big-files` CLI: a recursive directory walk that
//! reports regular files above a size threshold, optionally narrowed by a
//! file name keyword and/or extension.
//!
//! ## Modules
//!
//! - [`scanner`] - Depth-first directory walk with cycle protection
//! - [`filtering`] - Name filters, match criteria and result sorting
//! - [`found`] - Matched files and their collection
//! - [`highlight`] - Coloring matched name fragments for display
//! - [`output`] - JSON output structures
//! - [`config`] - Scanning, filtering and config file options
//! - [`utils`] - Size conversion and formatting

pub mod config;
pub mod filtering;
pub mod found;
pub mod highlight;
pub mod output;
pub mod scanner;
pub mod utils;

pub use config::{FilterOptions, ScanOptions, SortCriteria, SortOptions};
