// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Convenience functions on top of [`SplitLines`]. Use [`split_with_config`] to stream
//! lines one at a time, and the others to get everything at once.

use super::{SplitConfig, SplitLines};
use crate::WrapResult;

/// Split `input` into lines of at most `byte_limit` bytes each, preferring to break
/// after whitespace and never breaking inside a grapheme cluster.
///
/// ```
/// let lines = r3bl_wordwrap::split("Hello 👋🏽 world", 20).unwrap();
/// assert_eq!(lines, vec!["Hello 👋🏽 ", "world"]);
/// ```
///
/// # Errors
///
/// Returns [`crate::WrapError::OversizedCluster`] if any grapheme cluster is larger than
/// `byte_limit` on its own.
pub fn split(input: &str, byte_limit: usize) -> WrapResult<Vec<&str>> {
    SplitLines::new(input, SplitConfig::new(byte_limit)).collect_lines()
}

/// Lazy version of [`split`] with every policy available.
#[must_use]
pub fn split_with_config(input: &str, config: SplitConfig) -> SplitLines<'_> {
    SplitLines::new(input, config)
}

/// Same as [`split`], with the lines joined by `'\n'`.
///
/// # Errors
///
/// Returns [`crate::WrapError::OversizedCluster`] if any grapheme cluster is larger than
/// `byte_limit` on its own.
pub fn wrap(input: &str, byte_limit: usize) -> WrapResult<String> {
    wrap_with_config(input, SplitConfig::new(byte_limit))
}

/// Split with `config`, then join the lines by `'\n'`.
///
/// # Errors
///
/// Fails exactly when [`SplitLines::collect_lines`] fails, ie: on the first oversized
/// cluster when [`SplitConfig::continue_on_error`] is not set.
pub fn wrap_with_config(input: &str, config: SplitConfig) -> WrapResult<String> {
    let lines = SplitLines::new(input, config).collect_lines()?;
    Ok(join_lines(&lines, "\n"))
}

/// Join `lines` with `separator` in a single allocation.
#[must_use]
pub fn join_lines<S: AsRef<str>>(lines: &[S], separator: &str) -> String {
    let content_len: usize = lines.iter().map(|it| it.as_ref().len()).sum();
    let separator_len = separator.len() * lines.len().saturating_sub(1);
    let mut acc = String::with_capacity(content_len + separator_len);

    let mut iter = lines.iter();
    // First item.
    if let Some(line) = iter.next() {
        acc.push_str(line.as_ref());
    }
    // Rest of the items.
    for line in iter {
        acc.push_str(separator);
        acc.push_str(line.as_ref());
    }

    acc
}
