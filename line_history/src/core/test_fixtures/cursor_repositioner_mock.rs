// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CursorRepositioner, StdMutex};
use std::{io::Write, sync::Arc};

/// Records every column it is asked to move to, and writes nothing to the terminal.
/// Clones share the same list of calls, so keep one clone to inspect after handing the
/// other to a recorder.
#[derive(Clone, Debug, Default)]
pub struct CursorRepositionerMock {
    pub calls: Arc<StdMutex<Vec<usize>>>,
}

impl CursorRepositionerMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn get_calls(&self) -> Vec<usize> { self.calls.lock().unwrap().clone() }
}

impl CursorRepositioner for CursorRepositionerMock {
    fn move_to_end_of_previous_row(
        &mut self,
        _term: &mut dyn Write,
        col: usize,
    ) -> std::io::Result<()> {
        self.calls
            .lock()
            .map_err(|_| std::io::Error::other("calls lock is poisoned"))?
            .push(col);
        Ok(())
    }
}
