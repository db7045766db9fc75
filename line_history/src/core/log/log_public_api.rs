// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{TracingConfig, ok};
use tracing::dispatcher;
use tracing_core::LevelFilter;

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Build the config with [`TracingConfig::new_file`] or [`TracingConfig::new_display`].
///
/// Logging is **DISABLED** by **default**. Nothing is installed when the level filter is
/// [`LevelFilter::OFF`].
///
/// ```no_run
/// use r3bl_line_history::{TracingConfig, try_initialize_logging_global};
/// use tracing_core::LevelFilter;
///
/// try_initialize_logging_global(TracingConfig::new_file(None, LevelFilter::DEBUG)).ok();
/// ```
///
/// # Errors
///
/// Returns an error if the layers can't be created, or a global subscriber is already
/// set.
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<()> {
    // Early return if the level filter is off.
    if tracing_config.get_level_filter() == LevelFilter::OFF {
        return ok!();
    }

    tracing_config.install_global()
}

/// Thread local subscriber, and you can assign different ones to different threads.
/// - This is great for tests.
///
/// Logging is **DISABLED** by **default**. Returns `None` when the level filter is
/// [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the layers can't be created.
pub fn try_initialize_logging_thread_local(
    tracing_config: TracingConfig,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    // Early return if the level filter is off.
    if tracing_config.get_level_filter() == LevelFilter::OFF {
        return Ok(None);
    }

    tracing_config.install_thread_local().map(Some)
}
