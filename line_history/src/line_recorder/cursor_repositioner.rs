// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::{QueueableCommand, cursor};
use std::io::{self, Write};

/// Moves the caret up one row, and to the given column. It is used to undo the newline
/// that the terminal echoes when the user presses Enter. See
/// [`crate::CursorRepositionerMock`] for testing.
pub trait CursorRepositioner: Send {
    /// # Errors
    ///
    /// Returns an error if writing the control sequences to `term` fails.
    fn move_to_end_of_previous_row(&mut self, term: &mut dyn Write, col: usize)
    -> io::Result<()>;
}

/// Emits the ANSI sequences using [`crossterm`]. Nothing checks whether `term` is a
/// real terminal; when output is redirected to a file the sequences end up in the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermCursorRepositioner;

impl CursorRepositioner for CrosstermCursorRepositioner {
    fn move_to_end_of_previous_row(
        &mut self,
        term: &mut dyn Write,
        col: usize,
    ) -> io::Result<()> {
        let col = u16::try_from(col).unwrap_or(u16::MAX);

        term.queue(cursor::MoveUp(1))?
            .queue(cursor::MoveToColumn(0))?;

        // `CSI 0 C` moves right by 1 in most terminals, so skip it for column 0.
        if col != 0 {
            term.queue(cursor::MoveRight(col))?;
        }

        term.flush()
    }
}
