//! Scanning configuration for directory traversal.
//!
//! This module defines the options that control how directories are walked
//! and which errors are reported along the way.

use std::path::PathBuf;

/// Configuration for directory scanning behavior.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    /// Whether to print access errors collected during the walk
    pub verbose: bool,

    /// Directory names that are never descended into
    pub skip: Vec<PathBuf>,

    /// Maximum directory depth to descend (None = unlimited, 0 = root only)
    pub max_depth: Option<usize>,

    /// Whether symbolic links are resolved and followed
    pub follow_links: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            skip: Vec::new(),
            max_depth: None,
            follow_links: true,
        }
    }
}
