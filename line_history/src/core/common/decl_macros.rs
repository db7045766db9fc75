// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Lock a [`crate::StdMutex`] and turn a poisoned lock into a
/// [`crate::RecorderError::LockPoisoned`] naming the resource, instead of panicking.
///
/// ```rust,ignore
/// let mut guard = lock_or_poisoned!(self.resource, "output device")?;
/// ```
#[macro_export]
macro_rules! lock_or_poisoned {
    ($mutex:expr, $what:expr) => {
        $mutex
            .lock()
            .map_err(|_| $crate::RecorderError::LockPoisoned { resource: $what })
    };
}
