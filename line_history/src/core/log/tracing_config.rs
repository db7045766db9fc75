// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ok, try_create_layers};
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Configure the tracing logging to suit your needs. You can send the logs to a file, or
/// display them on stdout or stderr.
///
/// Log lines written to the terminal that a recorder is tracking are not seen by the
/// recorder, and end up between the recorded rows. For interactive programs, log to a
/// file.
///
/// This configuration also allows you to set the log level.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - The log level to use for tracing.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// Where the log lines go.
#[derive(Debug, Clone, PartialEq)]
pub enum WriterConfig {
    /// Eg: [`DisplayPreference::Stderr`].
    Display(DisplayPreference),
    /// File path. Eg: `/tmp/same_line_demo.log` or `log.txt`.
    File(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(filename: Option<String>, level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter,
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference, level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Global default subscriber, which once set, can't be unset or changed.
    ///
    /// # Errors
    ///
    /// Returns an error if a layer can't be created, or if a global default subscriber
    /// has already been set.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|err| miette::miette!("Failed to set global subscriber: {err}"))?;
        ok!()
    }

    /// Thread local subscriber, which is active until the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if a layer can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let layers = try_create_layers(self)?;
        ok!(tracing_subscriber::registry().with(layers).set_default())
    }
}

/// Default file name used when no log file path is given.
pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";
