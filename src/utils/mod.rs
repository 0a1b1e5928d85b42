//! Utility functions and helpers.
//!
//! This module contains utility functions used throughout the application,
//! such as size conversion and formatting helpers.

pub mod size;

pub use size::{SizeThreshold, SizeUnit, format_bytes, to_bytes};
