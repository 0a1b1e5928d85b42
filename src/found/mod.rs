//! Matched file representation and collection handling.
//!
//! ## Main Parts
//!
//! - [`FoundFile`] - A single regular file that met every criterion, with its size
//! - [`FoundFiles`] - A collection of found files with listing and summary output

pub mod found_file;
pub mod found_files;

pub use found_file::FoundFile;
pub use found_files::FoundFiles;
