//! Filesystem and environment helpers.
//!
//! Resolves where dishboard keeps its files (log file, exported fixtures)
//! and expands user-supplied paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_in_data_dir};
