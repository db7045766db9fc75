// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Mental model
//!
//! When the user presses Enter, the terminal echoes a newline, and the caret lands on
//! column 0 of the next row. Anything the program prints afterwards starts on that new
//! row. The recorders in this module keep track of the text of the last row that was
//! printed or echoed, so that after a line of input is read, the caret can be moved back
//! up one row and to the right, just past the typed text. The next print then appears to
//! continue on the same row as the user's input.
//!
//! There are two tiers, which share one implementation, [`Recorder`]:
//! - [`LineRecorder`] only remembers the most recent line.
//! - [`HistoryRecorder`] also keeps every finalized line, in order.
//!
//! And [`global_override`] lets you install a [`HistoryRecorder`] as the process wide
//! [`global_override::print`] and [`global_override::input`] entry points.
//!
//! # Line lifecycle
//!
//! ```text
//!              write without '\n'
//!            ┌──────────────────┐
//!            │                  ▼
//! ┌──────────┴─┐  write     ┌────────┐
//! │   Closed   │──────────▶│  Open  │
//! │ (initial)  │◀──────────│        │
//! └────────────┘ '\n' or   └────────┘
//!                input done
//! ```
//!
//! A line is *finalized* when a `\n` is written, or when a line of input is read. The
//! next write after that starts a fresh line.

// Attach sources.
pub mod cursor_repositioner;
pub mod global_override;
pub mod line;
pub mod line_sink;
pub mod record_options;
pub mod recorder;
pub mod recorder_error;

// Re-export.
pub use cursor_repositioner::*;
pub use line::*;
pub use line_sink::*;
pub use record_options::*;
pub use recorder::*;
pub use recorder_error::*;
