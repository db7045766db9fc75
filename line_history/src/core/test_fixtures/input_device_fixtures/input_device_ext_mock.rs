// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InputDevice, StdMutex};
use std::{io::Cursor, sync::Arc};

pub trait InputDeviceExt {
    /// Each item is one line that the "user" types, without the trailing newline.
    fn new_mock(typed_lines: &[&str]) -> InputDevice;

    /// The raw bytes that the "user" types, including any line terminators.
    fn new_mock_raw(raw_input: &str) -> InputDevice;
}

impl InputDeviceExt for InputDevice {
    fn new_mock(typed_lines: &[&str]) -> InputDevice {
        let raw_input: String = typed_lines.iter().map(|line| format!("{line}\n")).collect();
        Self::new_mock_raw(&raw_input)
    }

    fn new_mock_raw(raw_input: &str) -> InputDevice {
        InputDevice {
            resource: Arc::new(StdMutex::new(Cursor::new(raw_input.as_bytes().to_vec()))),
        }
    }
}
