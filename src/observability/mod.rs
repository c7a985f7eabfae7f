//! Tracing subscriber setup with an optional rotating log file.
//!
//! # Configuration
//!
//! The filter is resolved in this order:
//! 1. `RUST_LOG` environment variable
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! Output goes to stderr unless `log_file` is configured, in which case it
//! is appended to that file (relative paths live in the data directory) and
//! rotated at 10 MB with three backups kept.
//!
//! # Usage
//!
//! ```
//! use dishboard::observability::init_tracing;
//! use dishboard::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("tracing is now active");
//! ```

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};
