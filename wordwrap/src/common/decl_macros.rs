// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given value (or unit) in [Ok]. Saves some typing at the end of functions that
/// return [`miette::Result`] or [`crate::WrapResult`].
///
/// ```
/// use r3bl_wordwrap::ok;
///
/// fn unit() -> miette::Result<()> { ok!() }
/// fn value() -> miette::Result<usize> { ok!(42) }
///
/// assert!(unit().is_ok());
/// assert_eq!(value().unwrap(), 42);
/// ```
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

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// `mimalloc` is a replacement for the default global allocator. It's optimized for
/// multi-threaded use cases where lots of small objects are created and destroyed.
/// - <https://github.com/microsoft/mimalloc?tab=readme-ov-file#performance>
/// - <https://crates.io/crates/mimalloc>
///
/// Call this at the top of `main()` in a binary target.
#[macro_export]
macro_rules! set_mimalloc_in_main {
    () => {{
        use mimalloc::MiMalloc;

        #[global_allocator]
        static GLOBAL: MiMalloc = MiMalloc;
    }};
}
