// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::InlineCharVec;
use std::fmt::{Display, Formatter};

pub const CARRIAGE_RETURN_CHAR: char = '\r';
pub const BACKSPACE_CHAR: char = '\u{8}';

/// The visible text of one terminal row, without its trailing newline.
///
/// The display width of a line is its character count. Escape sequences and wide
/// characters are not measured specially.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Line {
    pub text: String,
}

impl Line {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self { Self { text: text.into() } }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.text }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// Number of terminal columns this line occupies.
    #[must_use]
    pub fn display_width(&self) -> usize { self.text.chars().count() }
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.write_str(&self.text) }
}

impl AsRef<str> for Line {
    fn as_ref(&self) -> &str { &self.text }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self { Self::new(text) }
}

impl From<String> for Line {
    fn from(text: String) -> Self { Self { text } }
}

impl PartialEq<str> for Line {
    fn eq(&self, other: &str) -> bool { self.text == other }
}

impl PartialEq<&str> for Line {
    fn eq(&self, other: &&str) -> bool { self.text == *other }
}

/// The row that the caret is on, as the terminal would draw it. Characters overwrite
/// what is under the caret rather than being inserted.
/// - `\r` moves the caret to column 0.
/// - `\b` moves the caret one column to the left (never past column 0).
///
/// `\n` is never passed in here, it is handled by [`crate::Recorder`], since it ends
/// the row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineBuffer {
    pub chars: InlineCharVec,
    pub caret_col: usize,
}

impl LineBuffer {
    pub fn clear(&mut self) {
        self.chars.clear();
        self.caret_col = 0;
    }

    pub fn put_str(&mut self, text: &str) { text.chars().for_each(|ch| self.put_char(ch)); }

    pub fn put_char(&mut self, ch: char) {
        match ch {
            CARRIAGE_RETURN_CHAR => self.caret_col = 0,
            BACKSPACE_CHAR => self.caret_col = self.caret_col.saturating_sub(1),
            _ => {
                if let Some(slot) = self.chars.get_mut(self.caret_col) {
                    *slot = ch;
                } else {
                    self.chars.push(ch);
                }
                self.caret_col += 1;
            }
        }
    }

    #[must_use]
    pub fn to_line(&self) -> Line { Line::from(self.chars.iter().collect::<String>()) }
}
