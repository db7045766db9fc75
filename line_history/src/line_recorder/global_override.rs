// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Process wide print and read entry points that are backed by a [`HistoryRecorder`].
//!
//! ```text
//! ┌─────────────────────────┐         ┌───────────────────────────┐
//! │ print() / input()       │ active? │ HistoryRecorder           │
//! │ recorded_print!()       ├────────▶│ record_print() /          │
//! │ recorded_println!()     │   yes   │ record_input()            │
//! └───────────┬─────────────┘         └───────────────────────────┘
//!             │ no
//!             ▼
//!   plain stdout / stdin, nothing is recorded
//! ```
//!
//! Code that goes through these entry points gets the same line behavior once a recorder
//! is installed with [`install()`] (or [`install_with()`]). The recorder stays installed
//! for as long as the returned [`InstallGuard`] is alive.
//!
//! ```no_run
//! use r3bl_line_history::{InputOptions, global_override, recorded_print, recorded_println};
//!
//! # fn main() -> Result<(), r3bl_line_history::RecorderError> {
//! let guard = global_override::install()?;
//! recorded_print!("Hello, ")?;
//! let _name = global_override::input("", InputOptions::default())?;
//! // Appears on the same row as the typed name.
//! recorded_println!(", how do you do?")?;
//! assert_eq!(guard.recorder().lock().unwrap().lines().len(), 2);
//! # Ok(())
//! # }
//! ```

use crate::{HistoryRecorder, InputDevice, InputOptions, OutputDevice, PrintOptions,
            RecorderError, SafeHistoryRecorder, StdMutex, lock_or_poisoned, ok};
use std::{fmt::Display,
          sync::{Arc, LazyLock}};

/// The recorder that [`print()`] and [`input()`] route to, if any.
static ACTIVE_RECORDER: StdMutex<Option<SafeHistoryRecorder>> = StdMutex::new(None);

/// Used when no recorder is installed. Shared so that buffered stdin isn't lost between
/// calls.
static PASS_THROUGH_OUTPUT: LazyLock<OutputDevice> = LazyLock::new(OutputDevice::new_stdout);
static PASS_THROUGH_INPUT: LazyLock<InputDevice> = LazyLock::new(InputDevice::new_stdin);

/// Builds a [`HistoryRecorder`] on stdout and stdin, and installs it. See
/// [`install_with()`].
///
/// # Errors
///
/// Returns [`RecorderError::LockPoisoned`] if the active recorder slot is poisoned.
pub fn install() -> Result<InstallGuard, RecorderError> {
    install_with(HistoryRecorder::new_stdio())
}

/// Makes `recorder` the active one. Installing is not idempotent: if a recorder is
/// already active it is replaced, and its history is discarded (a warning with the
/// number of discarded lines is logged).
///
/// # Errors
///
/// Returns [`RecorderError::LockPoisoned`] if the active recorder slot, or the recorder
/// that is being replaced, is poisoned.
pub fn install_with(recorder: HistoryRecorder) -> Result<InstallGuard, RecorderError> {
    let recorder: SafeHistoryRecorder = Arc::new(StdMutex::new(recorder));

    let mut slot = lock_or_poisoned!(ACTIVE_RECORDER, "active recorder slot")?;
    if let Some(previous) = slot.as_ref() {
        let discarded_line_count = lock_or_poisoned!(previous, "active recorder")?
            .lines()
            .len();
        tracing::warn!(
            message = "replacing the active recorder, its history is discarded",
            discarded_line_count
        );
    } else {
        tracing::debug!(message = "recorder installed");
    }
    *slot = Some(recorder.clone());

    ok!(InstallGuard { recorder })
}

/// Returns the recorder that [`print()`] and [`input()`] currently route to.
///
/// # Errors
///
/// Returns [`RecorderError::LockPoisoned`] if the active recorder slot is poisoned.
pub fn active_recorder() -> Result<Option<SafeHistoryRecorder>, RecorderError> {
    let slot = lock_or_poisoned!(ACTIVE_RECORDER, "active recorder slot")?;
    ok!(slot.clone())
}

/// Keeps the recorder installed. Dropping it uninstalls the recorder, unless another one
/// has been installed since, in which case nothing happens.
#[must_use = "dropping the guard uninstalls the recorder"]
#[allow(missing_debug_implementations)]
pub struct InstallGuard {
    recorder: SafeHistoryRecorder,
}

impl InstallGuard {
    /// The installed recorder, to inspect its history.
    #[must_use]
    pub fn recorder(&self) -> &SafeHistoryRecorder { &self.recorder }

    /// Returns `true` if this guard's recorder is still the active one.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(
            active_recorder(),
            Ok(Some(active)) if Arc::ptr_eq(&active, &self.recorder)
        )
    }
}

impl Drop for InstallGuard {
    fn drop(&mut self) {
        let Ok(mut slot) = ACTIVE_RECORDER.lock() else {
            return;
        };
        if slot
            .as_ref()
            .is_some_and(|active| Arc::ptr_eq(active, &self.recorder))
        {
            *slot = None;
            tracing::debug!(message = "recorder uninstalled");
        }
    }
}

/// Prints `values` via the active recorder (see [`crate::Recorder::record_print()`]).
/// When no recorder is installed, the text is written to stdout (or
/// `options.destination`) and nothing is recorded.
///
/// # Errors
///
/// Returns the output device error unchanged, or [`RecorderError::LockPoisoned`].
pub fn print(values: &[&dyn Display], options: PrintOptions) -> Result<(), RecorderError> {
    let Some(recorder) = active_recorder()? else {
        let text = options.render(values);
        let destination = options
            .destination
            .as_ref()
            .unwrap_or(&*PASS_THROUGH_OUTPUT);
        return destination.write_text(&text, options.flush);
    };

    let mut recorder = lock_or_poisoned!(recorder, "active recorder")?;
    recorder.record_print(values, options)
}

/// Reads one line via the active recorder (see [`crate::Recorder::record_input()`]).
/// When no recorder is installed, the prompt is written to stdout, one line is read
/// from stdin, nothing is recorded, and the caret is not moved.
///
/// # Errors
///
/// Returns the device error unchanged (including
/// [`std::io::ErrorKind::UnexpectedEof`]), or [`RecorderError::LockPoisoned`].
pub fn input(prompt: &str, options: InputOptions) -> Result<String, RecorderError> {
    let Some(recorder) = active_recorder()? else {
        return PASS_THROUGH_INPUT.read_line(prompt, &PASS_THROUGH_OUTPUT);
    };

    let mut recorder = lock_or_poisoned!(recorder, "active recorder")?;
    recorder.record_input(prompt, options)
}

/// Like [`print!`], but goes through [`crate::global_override::print()`]. The line is
/// left open. Returns a [`Result`].
#[macro_export]
macro_rules! recorded_print {
    ($($arg:tt)*) => {
        $crate::global_override::print(
            &[&format!($($arg)*)],
            $crate::PrintOptions::no_terminator(),
        )
    };
}

/// Like [`println!`], but goes through [`crate::global_override::print()`]. The line is
/// finalized. Returns a [`Result`].
#[macro_export]
macro_rules! recorded_println {
    () => {
        $crate::global_override::print(&[], $crate::PrintOptions::default())
    };
    ($($arg:tt)*) => {
        $crate::global_override::print(
            &[&format!($($arg)*)],
            $crate::PrintOptions::default(),
        )
    };
}
