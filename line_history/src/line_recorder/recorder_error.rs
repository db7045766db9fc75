// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Error returned by the recording operations. The recorders never swallow or translate
/// errors from the devices they wrap: an [`io::Error`] (eg: a closed stream, or
/// [`io::ErrorKind::UnexpectedEof`] when there is no more input) comes back as is, in
/// the [`RecorderError::IO`] variant.
#[derive(Debug, Error, Diagnostic)]
pub enum RecorderError {
    /// An I/O error from the output device, the input device, or the cursor
    /// repositioner.
    #[error(transparent)]
    #[diagnostic(code(r3bl_line_history::io))]
    IO(#[from] io::Error),

    /// A thread panicked while holding the lock on a shared resource.
    #[error("lock on the {resource} is poisoned")]
    #[diagnostic(
        code(r3bl_line_history::lock_poisoned),
        help("A thread panicked while writing to or reading from this resource")
    )]
    LockPoisoned { resource: &'static str },
}

impl RecorderError {
    /// Returns `true` if this is the end of input error from the input device.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(self, RecorderError::IO(err) if err.kind() == io::ErrorKind::UnexpectedEof)
    }
}
