// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{RecorderError, SafeRawTerminal, SendRawTerminal, StdMutex, lock_or_poisoned,
            ok};
use std::{io::Write, sync::{Arc, MutexGuard}};

/// This struct represents an output device that the recorders write to. This is the
/// "console output primitive" that the line recorders wrap.
/// - It is safe to clone. Clones share the same underlying writer.
/// - To write to it, use [`Self::write_text()`], or [`Self::lock()`] if you need to
///   issue several writes while holding the lock.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
        }
    }
}

impl OutputDevice {
    /// Locks the output device for writing. Don't call this again in the same scope
    /// while holding the guard, it will deadlock!
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::LockPoisoned`] if a thread panicked while holding the
    /// lock.
    pub fn lock(&self) -> Result<MutexGuard<'_, SendRawTerminal>, RecorderError> {
        lock_or_poisoned!(self.resource, "output device")
    }

    /// Writes `text` as is, and flushes if `flush` is `true`. Nothing is appended.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`std::io::Error`] unchanged if the write or flush fails,
    /// or [`RecorderError::LockPoisoned`] if the lock is poisoned.
    pub fn write_text(&self, text: &str, flush: bool) -> Result<(), RecorderError> {
        let mut term = self.lock()?;
        term.write_all(text.as_bytes())?;
        if flush {
            term.flush()?;
        }
        ok!()
    }
}
