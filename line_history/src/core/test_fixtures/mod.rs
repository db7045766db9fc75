// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod cursor_repositioner_mock;
pub mod input_device_fixtures;
pub mod output_device_fixtures;
pub mod temp_dir;

// Re-export.
pub use cursor_repositioner_mock::*;
pub use input_device_fixtures::*;
pub use output_device_fixtures::*;
pub use temp_dir::*;
