// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{LineSource, StdMutex};
use std::sync::Arc;

/// Type alias for a `Send`-able output device (raw terminal, mock, etc).
pub type SendRawTerminal = dyn std::io::Write + Send;
/// Type alias for a `Send`-able raw terminal wrapped in an `Arc<StdMutex>`.
pub type SafeRawTerminal = Arc<StdMutex<SendRawTerminal>>;

/// Type alias for a `Send`-able line oriented input source (stdin, mock, etc).
pub type SendLineSource = dyn LineSource;
/// Type alias for a `Send`-able line source wrapped in an `Arc<StdMutex>`.
pub type SafeLineSource = Arc<StdMutex<SendLineSource>>;
