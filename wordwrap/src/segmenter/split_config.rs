// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::SplitLines;

/// Policies for one segmentation pass. It is [Copy] and is passed by value, so different
/// call sites (or threads) can split with different policies at the same time.
///
/// The default for every flag is "off", which is the strict, lossless mode:
/// - Stop at the first grapheme cluster that doesn't fit in `byte_limit`.
/// - Never take a grapheme cluster apart.
/// - Keep trailing whitespace on each line, so that joining the lines gives back the
///   input.
///
/// ```
/// use r3bl_wordwrap::{LineStatus, SplitConfig};
///
/// let config = SplitConfig::new(10).with_trim_trailing_whitespace(true);
/// let lines: Vec<_> = config
///     .split("Hello world this is a test")
///     .map(|line| line.content)
///     .collect();
/// assert_eq!(lines, vec!["Hello", "world", "this is a", "test"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    /// Max number of `UTF-8` bytes in one *ok* line. Zero is allowed, and makes every
    /// non-empty cluster oversized.
    pub byte_limit: usize,
    /// Emit an oversized cluster as a flagged line and keep going, instead of ending the
    /// sequence there.
    pub continue_on_error: bool,
    /// Split an oversized cluster at scalar value boundaries, instead of reporting it.
    pub allow_cluster_bisection: bool,
    /// Strip `' '`, `'\t'`, `'\n'`, `'\r'` from the end of each emitted line. This never
    /// changes where the breaks go.
    pub trim_trailing_whitespace: bool,
}

impl SplitConfig {
    #[must_use]
    pub const fn new(byte_limit: usize) -> Self {
        Self {
            byte_limit,
            continue_on_error: false,
            allow_cluster_bisection: false,
            trim_trailing_whitespace: false,
        }
    }

    #[must_use]
    pub const fn with_byte_limit(mut self, byte_limit: usize) -> Self {
        self.byte_limit = byte_limit;
        self
    }

    #[must_use]
    pub const fn with_continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }

    #[must_use]
    pub const fn with_allow_cluster_bisection(
        mut self,
        allow_cluster_bisection: bool,
    ) -> Self {
        self.allow_cluster_bisection = allow_cluster_bisection;
        self
    }

    #[must_use]
    pub const fn with_trim_trailing_whitespace(
        mut self,
        trim_trailing_whitespace: bool,
    ) -> Self {
        self.trim_trailing_whitespace = trim_trailing_whitespace;
        self
    }

    /// Start a lazy segmentation pass over `input` with this configuration.
    #[must_use]
    pub fn split<'a>(&self, input: &'a str) -> SplitLines<'a> { SplitLines::new(input, *self) }
}
