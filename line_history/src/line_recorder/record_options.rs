// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::OutputDevice;
use std::fmt::{Display, Write as _};

pub const DEFAULT_SEPARATOR: &str = " ";
pub const DEFAULT_TERMINATOR: &str = "\n";

/// Same parameters as a console print: `separator` goes between values, `terminator`
/// goes at the end, `destination` picks the device (the recorder's own output device if
/// [`None`]), `flush` forces a flush after writing. `record` is the only addition; when
/// it is `false` the write goes through but the recorder state is left alone.
///
/// ```
/// use r3bl_line_history::PrintOptions;
///
/// // Keep the caret on the same row after printing.
/// let options = PrintOptions { flush: true, ..PrintOptions::no_terminator() };
/// assert_eq!(options.terminator, "");
/// ```
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct PrintOptions {
    pub separator: String,
    pub terminator: String,
    pub destination: Option<OutputDevice>,
    pub flush: bool,
    pub record: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            terminator: DEFAULT_TERMINATOR.to_string(),
            destination: None,
            flush: false,
            record: true,
        }
    }
}

impl PrintOptions {
    /// Print without a trailing newline, so the line stays open.
    #[must_use]
    pub fn no_terminator() -> Self {
        Self {
            terminator: String::new(),
            ..Default::default()
        }
    }

    /// Write through without touching the recorder state.
    #[must_use]
    pub fn unrecorded() -> Self {
        Self {
            record: false,
            ..Default::default()
        }
    }

    /// Joins `values` with the separator, and appends the terminator. This is exactly
    /// the text that gets written.
    #[must_use]
    pub fn render(&self, values: &[&dyn Display]) -> String {
        let mut acc = String::new();
        for (index, value) in values.iter().enumerate() {
            if index > 0 {
                acc.push_str(&self.separator);
            }
            // Writing to a String can't fail.
            write!(acc, "{value}").ok();
        }
        acc.push_str(&self.terminator);
        acc
    }
}

/// Parameters for reading a line. `record` controls whether the prompt and the typed
/// text are recorded. `strip_newline` controls whether the caret is moved back up to
/// the end of the row that the user typed on, once the line is read. The returned text
/// never contains the newline, regardless of `strip_newline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOptions {
    pub record: bool,
    pub strip_newline: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            record: true,
            strip_newline: true,
        }
    }
}

impl InputOptions {
    /// Leave the caret on the row after the input, like a plain read does.
    #[must_use]
    pub fn keep_newline() -> Self {
        Self {
            strip_newline: false,
            ..Default::default()
        }
    }
}
