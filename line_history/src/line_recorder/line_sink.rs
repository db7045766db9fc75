// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Line;

/// Decides what a [`crate::Recorder`] does with a line once it is finalized (a `\n` was
/// written, or a line of input was read). This is what separates a
/// [`crate::LineRecorder`] from a [`crate::HistoryRecorder`].
pub trait LineSink {
    fn on_line_finalized(&mut self, line: &Line);
}

/// Keeps nothing. Only the most recent line is remembered, by the recorder itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl LineSink for NoHistory {
    fn on_line_finalized(&mut self, _line: &Line) {}
}

/// Append-only, chronologically ordered list of every finalized line. There is no way to
/// mutate it other than via the recording operations of the recorder that owns it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineHistory {
    lines: Vec<Line>,
}

impl LineHistory {
    #[must_use]
    pub fn lines(&self) -> &[Line] { &self.lines }

    #[must_use]
    pub fn len(&self) -> usize { self.lines.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    #[must_use]
    pub fn last(&self) -> Option<&Line> { self.lines.last() }
}

impl LineSink for LineHistory {
    fn on_line_finalized(&mut self, line: &Line) { self.lines.push(line.clone()); }
}
