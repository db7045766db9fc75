// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_line_history
//!
//! When a CLI program asks a question and the user answers by pressing Enter, the
//! terminal echoes a newline. Whatever the program prints next lands on the row below
//! the answer. This crate lets the program keep printing on the *same* row as the typed
//! answer:
//!
//! ```text
//! Hello, Nadia, how do you do?
//! ╰──┬──╯╰─┬─╯╰───────┬──────╯
//!  print  typed      print (after the caret is moved back up)
//! ```
//!
//! It does this by wrapping the print and read primitives in a recorder that remembers
//! the text of the last row, and, after each line of input, moves the caret up one row
//! and just past that text.
//!
//! # Recorders
//!
//! - [`LineRecorder`] remembers only the most recent line.
//! - [`HistoryRecorder`] also keeps every finalized line, in order, available via
//!   [`HistoryRecorder::lines()`](Recorder::lines).
//! - [`global_override`] installs a [`HistoryRecorder`] as the process wide
//!   [`global_override::print()`] and [`global_override::input()`] entry points (also
//!   used by [`recorded_print!`] and [`recorded_println!`]).
//!
//! ```no_run
//! use r3bl_line_history::{HistoryRecorder, InputOptions, PrintOptions};
//!
//! # fn main() -> Result<(), r3bl_line_history::RecorderError> {
//! let mut recorder = HistoryRecorder::new_stdio();
//! recorder.record_print(&[&"Hello,"], PrintOptions::no_terminator())?;
//! recorder.record_input(" ", InputOptions::default())?;
//! recorder.record_print(&[&", how do you do?"], PrintOptions::default())?;
//! for line in recorder.lines() {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The recorders emit [`tracing`] events. Logging is disabled by default; to see them,
//! use [`try_initialize_logging_global()`] with a [`TracingConfig`]. Log to a file
//! rather than to the display, since display output would interleave with the recorded
//! rows.
//!
//! # Testing
//!
//! Everything in [`crate::core::test_fixtures`] is public, so you can test code that uses the
//! recorders without a real terminal: [`OutputDeviceExt::new_mock()`],
//! [`InputDeviceExt::new_mock()`] and [`CursorRepositionerMock`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod line_recorder;

// Re-export.
pub use core::*;
pub use line_recorder::*;
