//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::paths::{get_data_dir, resolve_in_data_dir};
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor `trace_level` is set.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
        EnvFilter::new(level)
    })
}

/// Installs the global tracing subscriber.
///
/// Idempotent: only the first call in a process takes effect. When the log
/// file's directory cannot be created, output falls back to stderr so a
/// misconfigured log path never stops the program.
pub fn init_tracing(config: &Config) {
    let filter = build_filter(config);

    if let Some(log_file) = &config.log_file {
        let path = resolve_in_data_dir(log_file, &get_data_dir());
        let dir_ready = path
            .parent()
            .map_or(true, |dir| dir.as_os_str().is_empty() || std::fs::create_dir_all(dir).is_ok());

        if dir_ready {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(FileWriter::new(path)))
                .try_init();
            return;
        }
    }

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if let Some(log_file) = &config.log_file {
        tracing::warn!(log_file = %log_file, "log directory unavailable, logging to stderr");
    }
}
