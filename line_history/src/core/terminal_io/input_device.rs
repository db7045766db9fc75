// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{LineSource as _, OutputDevice, RecorderError, SafeLineSource, StdMutex,
            lock_or_poisoned, ok};
use std::{io, sync::Arc};

/// This struct represents an input device that reads one line of typed text at a time.
/// This is the "console input primitive" that the line recorders wrap. See
/// [`crate::InputDeviceExt`] for testing features.
///
/// In a cooked (non raw mode) terminal the terminal itself echoes the typed characters
/// and the newline produced by pressing Enter. So this struct never echoes anything.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct InputDevice {
    pub resource: SafeLineSource,
}

impl Default for InputDevice {
    fn default() -> Self { Self::new_stdin() }
}

impl InputDevice {
    /// Every stdin device reads through the same process wide stdin buffer, so lines
    /// that one device doesn't consume are still there for the next one.
    #[must_use]
    pub fn new_stdin() -> InputDevice {
        InputDevice {
            resource: Arc::new(StdMutex::new(io::stdin())),
        }
    }
}

impl InputDevice {
    /// Writes `prompt` (without a terminator) to `output_device`, flushes it, and then
    /// blocks until one line of text is available.
    ///
    /// The returned text never contains the line terminator (`\n` or `\r\n`).
    ///
    /// # Errors
    ///
    /// - [`io::ErrorKind::UnexpectedEof`] when the input stream is exhausted (eg: the
    ///   user pressed `Ctrl+D`, or stdin is closed).
    /// - Any other [`io::Error`] from writing the prompt or reading the line, unchanged.
    /// - [`RecorderError::LockPoisoned`] if either device lock is poisoned.
    pub fn read_line(
        &self,
        prompt: &str,
        output_device: &OutputDevice,
    ) -> Result<String, RecorderError> {
        output_device.write_text(prompt, true)?;
        self.read_typed_line()
    }

    /// Blocks until one line of text is available, without writing a prompt. The
    /// returned text never contains the line terminator.
    ///
    /// # Errors
    ///
    /// Same as [`Self::read_line()`], minus the prompt write.
    pub fn read_typed_line(&self) -> Result<String, RecorderError> {
        let mut acc = String::new();
        let bytes_read = {
            let mut source = lock_or_poisoned!(self.resource, "input device")?;
            source.read_line(&mut acc)?
        };

        if bytes_read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "EOF when reading a line",
            )
            .into());
        }

        strip_line_terminator(&mut acc);
        ok!(acc)
    }
}

fn strip_line_terminator(acc: &mut String) {
    if acc.ends_with('\n') {
        acc.pop();
        if acc.ends_with('\r') {
            acc.pop();
        }
    }
}
