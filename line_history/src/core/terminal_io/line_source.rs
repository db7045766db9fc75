// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, BufRead, Cursor};

/// Something that typed lines can be read from, one at a time. See
/// [`crate::InputDevice`].
///
/// Implementations must not read ahead into a buffer of their own. Several devices can
/// read from the same underlying stream (eg: the pass through device in
/// [`crate::global_override`] and a recorder's device, both on stdin), and whatever one
/// of them buffered privately would be lost to the others.
pub trait LineSource: Send {
    /// Appends the next line, including its terminator, to `acc`. Returns the number of
    /// bytes read, which is `0` at the end of the stream.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`io::Error`] unchanged.
    fn read_line(&mut self, acc: &mut String) -> io::Result<usize>;
}

/// Reads via the process wide stdin buffer, which every [`io::Stdin`] handle shares.
impl LineSource for io::Stdin {
    fn read_line(&mut self, acc: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, acc)
    }
}

/// Scripted input for tests. See [`crate::InputDeviceExt`].
impl LineSource for Cursor<Vec<u8>> {
    fn read_line(&mut self, acc: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, acc)
    }
}
