// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CrosstermCursorRepositioner, CursorRepositioner, InputDevice, InputOptions,
            Line, LineBuffer, LineHistory, LineSink, NoHistory, OutputDevice, PrintOptions,
            RecorderError, StdMutex, ok};
use std::{fmt::Display, sync::Arc};

/// Only remembers the most recent line.
pub type LineRecorder = Recorder<NoHistory>;

/// Remembers the most recent line, and every line finalized before it.
pub type HistoryRecorder = Recorder<LineHistory>;

/// A [`HistoryRecorder`] that can be shared between threads.
pub type SafeHistoryRecorder = Arc<StdMutex<HistoryRecorder>>;

/// Whether the line that the caret is on can still be extended by the next write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    /// Text was written since the last newline, and more text will continue it.
    Open,
    /// The line was just finalized. The next write starts a fresh line.
    Closed,
}

/// Wraps the print and read primitives ([`OutputDevice`] and [`InputDevice`]) and keeps
/// track of the text of the last row that was printed or echoed to the terminal. The
/// `H` type parameter ([`LineSink`]) decides what happens to each finalized line.
///
/// # Dependency injection
///
/// The output device, the input device and the [`CursorRepositioner`] can all be
/// swapped out. The defaults are stdout, stdin and [`CrosstermCursorRepositioner`].
/// Tests use [`crate::OutputDeviceExt::new_mock()`],
/// [`crate::InputDeviceExt::new_mock()`] and [`crate::CursorRepositionerMock`].
///
/// # Example
///
/// ```no_run
/// use r3bl_line_history::{HistoryRecorder, InputOptions, PrintOptions};
///
/// # fn main() -> Result<(), r3bl_line_history::RecorderError> {
/// let mut recorder = HistoryRecorder::new_stdio();
/// let name = recorder.record_input("What's your name? ", InputOptions::default())?;
/// recorder.record_print(&[&", nice to meet you", &name], PrintOptions::default())?;
/// # Ok(())
/// # }
/// ```
///
/// # Concurrency
///
/// The recording operations take `&mut self`, and are meant to be driven by a single
/// thread that owns the terminal. To share one recorder, wrap it in a mutex, like
/// [`crate::global_override`] does.
#[allow(missing_debug_implementations)]
pub struct Recorder<H: LineSink> {
    /// Text of the most recent line (finalized, or still open).
    current_line: Line,
    /// The row under the caret, including where the caret is.
    line_buffer: LineBuffer,
    line_status: LineStatus,
    sink: H,
    pub output_device: OutputDevice,
    pub input_device: InputDevice,
    pub cursor_repositioner: Box<dyn CursorRepositioner>,
}

impl<H: LineSink + Default> Recorder<H> {
    #[must_use]
    pub fn new(output_device: OutputDevice, input_device: InputDevice) -> Self {
        Self {
            current_line: Line::default(),
            line_buffer: LineBuffer::default(),
            line_status: LineStatus::Closed,
            sink: H::default(),
            output_device,
            input_device,
            cursor_repositioner: Box::new(CrosstermCursorRepositioner),
        }
    }

    /// Uses stdout, stdin and [`CrosstermCursorRepositioner`].
    #[must_use]
    pub fn new_stdio() -> Self { Self::new(OutputDevice::new_stdout(), InputDevice::new_stdin()) }
}

impl<H: LineSink> Recorder<H> {
    #[must_use]
    pub fn with_cursor_repositioner(
        mut self,
        cursor_repositioner: impl CursorRepositioner + 'static,
    ) -> Self {
        self.cursor_repositioner = Box::new(cursor_repositioner);
        self
    }

    /// The text of the most recent line. While the line is [`LineStatus::Open`] this
    /// is the text written so far; once it is [`LineStatus::Closed`] it is the text of
    /// the line that was just finalized.
    #[must_use]
    pub fn current_line(&self) -> &Line { &self.current_line }

    #[must_use]
    pub fn line_status(&self) -> LineStatus { self.line_status }

    /// Column of the caret within the current line.
    #[must_use]
    pub fn caret_col(&self) -> usize { self.line_buffer.caret_col }

    /// Writes `values` exactly like a console print would, using the separator,
    /// terminator, destination and flush settings in `options`. Then, if
    /// `options.record` is set, records the written text:
    /// - text without a newline extends the open line (or starts one);
    /// - each `\n` finalizes the line.
    ///
    /// # Errors
    ///
    /// Errors from the output device are returned unchanged. Nothing is recorded in that
    /// case.
    pub fn record_print(
        &mut self,
        values: &[&dyn Display],
        options: PrintOptions,
    ) -> Result<(), RecorderError> {
        let text = options.render(values);
        let destination = options.destination.as_ref().unwrap_or(&self.output_device);
        destination.write_text(&text, options.flush)?;

        if options.record {
            self.record_text(&text);
        }

        ok!()
    }

    /// Writes `prompt`, then reads one line of typed text. The returned text never
    /// contains the newline.
    ///
    /// When `options.record` is set, the prompt followed by the typed text is recorded,
    /// and the line is finalized (if the line was open, the prompt continues it).
    ///
    /// When `options.strip_newline` is set, the caret is moved back up one row and just
    /// past the recorded line, undoing the newline that the terminal echoed when Enter
    /// was pressed. So the next print continues on the same row.
    ///
    /// # Errors
    ///
    /// Errors from the devices are returned unchanged, including
    /// [`std::io::ErrorKind::UnexpectedEof`] when there is no more input. The caret is
    /// not moved in that case. A prompt that was written before the read failed stays
    /// recorded (the line is left open), since it is on the screen.
    pub fn record_input(
        &mut self,
        prompt: &str,
        options: InputOptions,
    ) -> Result<String, RecorderError> {
        self.output_device.write_text(prompt, true)?;
        if options.record {
            self.record_text(prompt);
        }

        let typed = self.input_device.read_typed_line()?;

        let col = if options.record {
            self.record_text(&typed);
            self.finalize_line();
            self.line_buffer.caret_col
        } else {
            self.caret_col_after(&format!("{prompt}{typed}"))
        };

        if options.strip_newline {
            self.undo_echoed_newline(col)?;
        }

        ok!(typed)
    }

    /// Where the caret would be if `text` were written now, without recording it.
    fn caret_col_after(&self, text: &str) -> usize {
        let mut scratch = match self.line_status {
            LineStatus::Open => self.line_buffer.clone(),
            LineStatus::Closed => LineBuffer::default(),
        };
        match text.rsplit_once('\n') {
            Some((_, tail)) => {
                scratch.clear();
                scratch.put_str(tail);
            }
            None => scratch.put_str(text),
        }
        scratch.caret_col
    }

    fn undo_echoed_newline(&mut self, col: usize) -> Result<(), RecorderError> {
        tracing::trace!(message = "undo echoed newline", col);
        let mut term = self.output_device.lock()?;
        self.cursor_repositioner
            .move_to_end_of_previous_row(&mut *term, col)?;
        ok!()
    }

    fn record_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        let mut segments = text.split('\n').peekable();
        while let Some(segment) = segments.next() {
            let is_last_segment = segments.peek().is_none();
            if is_last_segment && segment.is_empty() {
                break;
            }
            self.open_line_if_closed();
            self.line_buffer.put_str(segment);
            if is_last_segment {
                self.current_line = self.line_buffer.to_line();
            } else {
                self.finalize_line();
            }
        }
    }

    fn open_line_if_closed(&mut self) {
        if self.line_status == LineStatus::Closed {
            self.line_buffer.clear();
            self.line_status = LineStatus::Open;
        }
    }

    fn finalize_line(&mut self) {
        self.open_line_if_closed();
        self.current_line = self.line_buffer.to_line();
        self.line_status = LineStatus::Closed;
        tracing::trace!(message = "line finalized", line = %self.current_line);
        self.sink.on_line_finalized(&self.current_line);
    }
}

impl Recorder<LineHistory> {
    /// Every finalized line, oldest first. The line that is still open is not in here
    /// yet; see [`Self::current_line()`].
    #[must_use]
    pub fn lines(&self) -> &[Line] { self.sink.lines() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CursorRepositionerMock, InputDeviceExt, OutputDeviceExt, StdoutMock};
    use pretty_assertions::assert_eq;

    fn history_recorder_with_mocks(
        typed_lines: &[&str],
    ) -> (HistoryRecorder, StdoutMock, CursorRepositionerMock) {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let input_device = InputDevice::new_mock(typed_lines);
        let cursor_mock = CursorRepositionerMock::new();
        let recorder = HistoryRecorder::new(output_device, input_device)
            .with_cursor_repositioner(cursor_mock.clone());
        (recorder, stdout_mock, cursor_mock)
    }

    /// Output device whose every write fails, like a closed pipe.
    struct BrokenPipeWriter;

    impl std::io::Write for BrokenPipeWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
    }

    fn line_texts(recorder: &HistoryRecorder) -> Vec<&str> {
        recorder.lines().iter().map(Line::as_str).collect()
    }

    #[test]
    fn test_initial_state() {
        let (recorder, _, _) = history_recorder_with_mocks(&[]);
        assert_eq!(recorder.current_line(), &Line::default());
        assert_eq!(recorder.line_status(), LineStatus::Closed);
        assert!(recorder.lines().is_empty());
    }

    #[test]
    fn test_print_writes_through_like_a_console_print() {
        let (mut recorder, stdout_mock, _) = history_recorder_with_mocks(&[]);

        recorder
            .record_print(
                &[&"a", &42],
                PrintOptions {
                    separator: "-".into(),
                    terminator: ".".into(),
                    flush: true,
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "a-42.");
        assert_eq!(stdout_mock.get_flush_count(), 1);
    }

    #[test]
    fn test_partial_prints_concatenate() {
        let (mut recorder, stdout_mock, _) = history_recorder_with_mocks(&[]);

        for it in ["one", "two", "three"] {
            recorder
                .record_print(&[&it], PrintOptions::no_terminator())
                .unwrap();
            assert_eq!(recorder.line_status(), LineStatus::Open);
        }

        assert_eq!(recorder.current_line(), &Line::from("onetwothree"));
        assert_eq!(recorder.caret_col(), 11);
        assert!(recorder.lines().is_empty());
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "onetwothree");
    }

    #[test]
    fn test_partial_print_joins_with_its_own_separator() {
        let (mut recorder, _, _) = history_recorder_with_mocks(&[]);

        recorder
            .record_print(&[&"a", &"b"], PrintOptions::no_terminator())
            .unwrap();
        recorder
            .record_print(
                &[&"c", &"d"],
                PrintOptions {
                    separator: "+".into(),
                    ..PrintOptions::no_terminator()
                },
            )
            .unwrap();

        assert_eq!(recorder.current_line(), &Line::from("a bc+d"));
    }

    #[test]
    fn test_newline_finalizes_accumulated_line() {
        let (mut recorder, _, _) = history_recorder_with_mocks(&[]);

        recorder
            .record_print(&[&"hello"], PrintOptions::no_terminator())
            .unwrap();
        recorder
            .record_print(&[&", world"], PrintOptions::default())
            .unwrap();

        assert_eq!(recorder.line_status(), LineStatus::Closed);
        assert_eq!(recorder.current_line(), &Line::from("hello, world"));
        assert_eq!(line_texts(&recorder), vec!["hello, world"]);
        assert_eq!(recorder.lines().last(), Some(recorder.current_line()));
    }

    #[test]
    fn test_print_after_finalized_line_starts_fresh() {
        let (mut recorder, _, _) = history_recorder_with_mocks(&[]);

        recorder
            .record_print(&[&"first"], PrintOptions::default())
            .unwrap();
        recorder
            .record_print(&[&"second"], PrintOptions::no_terminator())
            .unwrap();

        assert_eq!(recorder.current_line(), &Line::from("second"));
        assert_eq!(line_texts(&recorder), vec!["first"]);
    }

    #[test]
    fn test_embedded_newlines_finalize_one_line_each() {
        let (mut recorder, _, _) = history_recorder_with_mocks(&[]);

        recorder
            .record_print(&[&"a\n\nb\nc"], PrintOptions::no_terminator())
            .unwrap();

        assert_eq!(line_texts(&recorder), vec!["a", "", "b"]);
        assert_eq!(recorder.current_line(), &Line::from("c"));
        assert_eq!(recorder.line_status(), LineStatus::Open);
    }

    #[test]
    fn test_empty_print_finalizes_a_blank_line() {
        let (mut recorder, _, _) = history_recorder_with_mocks(&[]);

        recorder.record_print(&[], PrintOptions::default()).unwrap();

        assert_eq!(line_texts(&recorder), vec![""]);
    }

    #[test]
    fn test_empty_write_changes_nothing() {
        let (mut recorder, _, _) = history_recorder_with_mocks(&[]);

        recorder
            .record_print(&[&"done"], PrintOptions::default())
            .unwrap();
        recorder
            .record_print(&[], PrintOptions::no_terminator())
            .unwrap();

        assert_eq!(recorder.line_status(), LineStatus::Closed);
        assert_eq!(recorder.current_line(), &Line::from("done"));
        assert_eq!(recorder.lines().len(), 1);
    }

    #[test]
    fn test_unrecorded_print_leaves_state_alone() {
        let (mut recorder, stdout_mock, _) = history_recorder_with_mocks(&[]);

        recorder
            .record_print(&[&"kept"], PrintOptions::no_terminator())
            .unwrap();
        recorder
            .record_print(&[&"ignored"], PrintOptions::unrecorded())
            .unwrap();

        assert_eq!(recorder.current_line(), &Line::from("kept"));
        assert!(recorder.lines().is_empty());
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "keptignored\n");
    }

    #[test]
    fn test_print_to_other_destination_is_still_recorded() {
        let (mut recorder, stdout_mock, _) = history_recorder_with_mocks(&[]);
        let (stderr_device, stderr_mock) = OutputDevice::new_mock();

        recorder
            .record_print(
                &[&"warning"],
                PrintOptions {
                    destination: Some(stderr_device),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
        assert_eq!(stderr_mock.get_copy_of_buffer_as_string(), "warning\n");
        assert_eq!(line_texts(&recorder), vec!["warning"]);
    }

    #[test]
    fn test_carriage_return_overwrites_open_line() {
        let (mut recorder, _, _) = history_recorder_with_mocks(&[]);

        recorder
            .record_print(&[&"progress: 10%"], PrintOptions::no_terminator())
            .unwrap();
        recorder
            .record_print(&[&"\rprogress: 100%"], PrintOptions::default())
            .unwrap();

        assert_eq!(line_texts(&recorder), vec!["progress: 100%"]);
    }

    #[test]
    fn test_input_round_trip_without_strip() {
        let (mut recorder, stdout_mock, cursor_mock) = history_recorder_with_mocks(&["X"]);

        let typed = recorder
            .record_input("P: ", InputOptions::keep_newline())
            .unwrap();

        assert_eq!(typed, "X");
        assert_eq!(recorder.current_line(), &Line::from("P: X"));
        assert_eq!(recorder.line_status(), LineStatus::Closed);
        assert_eq!(line_texts(&recorder), vec!["P: X"]);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "P: ");
        assert!(cursor_mock.get_calls().is_empty());
    }

    #[test]
    fn test_input_with_strip_repositions_once_to_line_width() {
        let (mut recorder, _, cursor_mock) = history_recorder_with_mocks(&["Naz"]);

        let typed = recorder
            .record_input("Name: ", InputOptions::default())
            .unwrap();

        assert_eq!(typed, "Naz");
        assert_eq!(recorder.current_line(), &Line::from("Name: Naz"));
        assert_eq!(
            cursor_mock.get_calls(),
            vec![recorder.current_line().display_width()]
        );
    }

    #[test]
    fn test_empty_prompt_and_empty_input_repositions_to_col_0() {
        let (mut recorder, _, cursor_mock) = history_recorder_with_mocks(&[""]);

        let typed = recorder.record_input("", InputOptions::default()).unwrap();

        assert_eq!(typed, "");
        assert_eq!(recorder.current_line(), &Line::default());
        assert_eq!(line_texts(&recorder), vec![""]);
        assert_eq!(cursor_mock.get_calls(), vec![0]);
    }

    #[test]
    fn test_input_continues_open_line() {
        let (mut recorder, _, cursor_mock) = history_recorder_with_mocks(&["42"]);

        recorder
            .record_print(&[&"Question 1."], PrintOptions::no_terminator())
            .unwrap();
        recorder
            .record_input(" Answer? ", InputOptions::default())
            .unwrap();

        assert_eq!(line_texts(&recorder), vec!["Question 1. Answer? 42"]);
        assert_eq!(cursor_mock.get_calls(), vec![22]);
    }

    #[test]
    fn test_unrecorded_input_repositions_past_typed_text() {
        let (mut recorder, _, cursor_mock) = history_recorder_with_mocks(&["secret"]);

        recorder
            .record_print(&[&"abc"], PrintOptions::default())
            .unwrap();
        let typed = recorder
            .record_input(
                "pw: ",
                InputOptions {
                    record: false,
                    strip_newline: true,
                },
            )
            .unwrap();

        assert_eq!(typed, "secret");
        assert_eq!(line_texts(&recorder), vec!["abc"]);
        assert_eq!(recorder.line_status(), LineStatus::Closed);
        assert_eq!(cursor_mock.get_calls(), vec!["pw: secret".len()]);
    }

    #[test]
    fn test_unrecorded_input_on_open_line_repositions_past_open_text() {
        let (mut recorder, _, cursor_mock) = history_recorder_with_mocks(&["1"]);

        recorder
            .record_print(&[&"abc"], PrintOptions::no_terminator())
            .unwrap();
        recorder
            .record_input(
                "> ",
                InputOptions {
                    record: false,
                    strip_newline: true,
                },
            )
            .unwrap();

        assert_eq!(recorder.current_line(), &Line::from("abc"));
        assert_eq!(cursor_mock.get_calls(), vec![6]);
    }

    #[test]
    fn test_input_eof_propagates_and_keeps_the_visible_prompt() {
        let (mut recorder, stdout_mock, cursor_mock) = history_recorder_with_mocks(&[]);

        let result = recorder.record_input("> ", InputOptions::default());

        assert!(result.is_err_and(|err| err.is_eof()));
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "> ");
        assert_eq!(recorder.current_line(), &Line::from("> "));
        assert_eq!(recorder.line_status(), LineStatus::Open);
        assert!(recorder.lines().is_empty());
        assert!(cursor_mock.get_calls().is_empty());
    }

    #[test]
    fn test_unrecorded_input_eof_records_nothing() {
        let (mut recorder, _, _) = history_recorder_with_mocks(&[]);

        let result = recorder.record_input(
            "> ",
            InputOptions {
                record: false,
                strip_newline: true,
            },
        );

        assert!(result.is_err_and(|err| err.is_eof()));
        assert_eq!(recorder.current_line(), &Line::default());
        assert_eq!(recorder.line_status(), LineStatus::Closed);
    }

    #[test]
    fn test_print_error_propagates_unchanged_and_records_nothing() {
        let (mut recorder, _, _) = history_recorder_with_mocks(&[]);
        recorder
            .record_print(&[&"before"], PrintOptions::default())
            .unwrap();
        recorder.output_device = OutputDevice {
            resource: Arc::new(StdMutex::new(BrokenPipeWriter)),
        };

        let result = recorder.record_print(&[&"lost"], PrintOptions::default());

        match result {
            Err(RecorderError::IO(err)) => {
                assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
            }
            other => panic!("expected a broken pipe, got {other:?}"),
        }
        assert_eq!(line_texts(&recorder), vec!["before"]);
        assert_eq!(recorder.current_line(), &Line::from("before"));
        assert_eq!(recorder.line_status(), LineStatus::Closed);
    }

    #[test]
    fn test_prompt_write_error_propagates_without_reading() {
        let (mut recorder, _, _) = history_recorder_with_mocks(&["unread"]);
        recorder.output_device = OutputDevice {
            resource: Arc::new(StdMutex::new(BrokenPipeWriter)),
        };

        let result = recorder.record_input("> ", InputOptions::default());

        assert!(matches!(
            result,
            Err(RecorderError::IO(ref err)) if err.kind() == std::io::ErrorKind::BrokenPipe
        ));
        assert_eq!(recorder.current_line(), &Line::default());
        assert_eq!(recorder.input_device.read_typed_line().unwrap(), "unread");
    }

    #[test]
    fn test_history_is_append_only_and_grows_per_finalized_line() {
        let (mut recorder, _, _) = history_recorder_with_mocks(&["y"]);
        let mut previous_len = 0;
        let mut check = |recorder: &HistoryRecorder, expected_growth: usize| {
            let len = recorder.lines().len();
            assert_eq!(len, previous_len + expected_growth);
            previous_len = len;
        };

        recorder
            .record_print(&[&"a"], PrintOptions::no_terminator())
            .unwrap();
        check(&recorder, 0);
        recorder
            .record_print(&[&"b"], PrintOptions::no_terminator())
            .unwrap();
        check(&recorder, 0);
        recorder.record_print(&[&"c"], PrintOptions::default()).unwrap();
        check(&recorder, 1);
        recorder
            .record_input("ok? ", InputOptions::keep_newline())
            .unwrap();
        check(&recorder, 1);
        recorder
            .record_print(&[&"x\ny"], PrintOptions::default())
            .unwrap();
        check(&recorder, 2);
    }

    #[test]
    fn test_line_recorder_tracks_only_the_last_line() {
        let (output_device, _) = OutputDevice::new_mock();
        let input_device = InputDevice::new_mock(&["yes"]);
        let cursor_mock = CursorRepositionerMock::new();
        let mut recorder = LineRecorder::new(output_device, input_device)
            .with_cursor_repositioner(cursor_mock.clone());

        recorder
            .record_print(&[&"first"], PrintOptions::default())
            .unwrap();
        assert_eq!(recorder.current_line(), &Line::from("first"));

        recorder
            .record_input("Continue? ", InputOptions::default())
            .unwrap();
        assert_eq!(recorder.current_line(), &Line::from("Continue? yes"));
        assert_eq!(cursor_mock.get_calls(), vec![13]);
    }
}
