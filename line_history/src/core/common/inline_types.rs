// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

/// Typical terminal lines are short, so most of them never spill onto the heap.
pub const DEFAULT_LINE_CHAR_STORAGE_SIZE: usize = 128;

/// Stack allocated vector used to hold the characters of the line that is still open.
pub type InlineCharVec = SmallVec<[char; DEFAULT_LINE_CHAR_STORAGE_SIZE]>;

/// Makes it obvious at each use site that this is the blocking mutex from stdlib.
pub type StdMutex<T> = std::sync::Mutex<T>;
