// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;
use tracing_core::LevelFilter;

use super::init_tracing;

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout or stderr,
/// 3. both.
///
/// Once built, hand it to [`init_tracing`], or use the [`TracingConfig::install_global`]
/// and [`TracingConfig::install_thread_local`] shortcuts.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
    pub scope: TracingScope,
}

/// Where the log lines go. The [String] in the file variants is the path of the log
/// file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

/// Global is for apps, thread local is for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingScope {
    Global,
    ThreadLocal,
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(level_filter: LevelFilter, file_path: impl Into<String>) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(file_path.into()),
            scope: TracingScope::Global,
        }
    }

    #[must_use]
    pub fn new_display(
        level_filter: LevelFilter,
        display_preference: DisplayPreference,
    ) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::Display(display_preference),
            scope: TracingScope::Global,
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    /// Once set, the global subscriber can't be unset or changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_global(mut self) -> miette::Result<()> {
        self.scope = TracingScope::Global;
        init_tracing(self).map(|_| ())
    }

    /// Drop the returned guard to restore the previous subscriber for this thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(mut self) -> miette::Result<dispatcher::DefaultGuard> {
        self.scope = TracingScope::ThreadLocal;
        init_tracing(self)?.ok_or_else(|| {
            miette::miette!("Thread local tracing subscriber did not return a guard")
        })
    }
}
