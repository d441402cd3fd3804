// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This is just a shim (thin wrapper) around [`super::init_tracing`]. You can use the
//! function in this module or just use [`super::TracingConfig`] directly, along with the
//! [`tracing::info!`], [`tracing::debug!`], etc. macros.

use tracing_core::LevelFilter;

use crate::{DisplayPreference, TracingConfig, TracingScope, WriterConfig, ok};

pub const LOG_FILE_NAME: &str = "log.txt";

/// Logging is **DISABLED** by **default**.
///
/// If you don't call this function w/ a value other than [`LevelFilter::OFF`], and at
/// least one of `log_to_file` or `log_to_stderr`, then logging won't be enabled. It won't
/// matter if you use the [`tracing::info!`], [`tracing::debug!`], etc. macros.
///
/// File output goes to [`LOG_FILE_NAME`] in the current working directory. Log output
/// never goes to `stdout`, since that is where the wrapped text goes.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_global(
    level_filter: LevelFilter,
    log_to_file: bool,
    log_to_stderr: bool,
) -> miette::Result<()> {
    if let Some(tracing_config) = logging_config(level_filter, log_to_file, log_to_stderr)
    {
        tracing_config.install_global()?;
    }
    ok!()
}

/// The [`TracingConfig`] that [`try_initialize_logging_global`] installs, or [None] if
/// logging stays off.
#[must_use]
pub fn logging_config(
    level_filter: LevelFilter,
    log_to_file: bool,
    log_to_stderr: bool,
) -> Option<TracingConfig> {
    // Early return if the level filter is off.
    if matches!(level_filter, LevelFilter::OFF) {
        return None;
    }

    match (log_to_file, log_to_stderr) {
        (false, false) => None,
        (true, false) => Some(TracingConfig::new_file(level_filter, LOG_FILE_NAME)),
        (false, true) => Some(TracingConfig::new_display(
            level_filter,
            DisplayPreference::Stderr,
        )),
        (true, true) => Some(TracingConfig {
            level_filter,
            writer_config: WriterConfig::DisplayAndFile(
                DisplayPreference::Stderr,
                LOG_FILE_NAME.to_string(),
            ),
            scope: TracingScope::Global,
        }),
    }
}
