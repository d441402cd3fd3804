// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The one way that splitting text can fail: a grapheme cluster (or, while bisecting, a
//! single scalar value) that is larger than the byte limit all by itself. Retrying with
//! the same input and limit reproduces it, so there is nothing to recover from except
//! changing the input, the limit, or the [`crate::SplitConfig`] policy.

/// Convenience type alias for results produced by this crate.
pub type WrapResult<T> = Result<T, WrapError>;

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum WrapError {
    #[error(
        "🧱 Grapheme cluster of {cluster_bytes} bytes at byte offset {byte_offset} exceeds the byte limit of {byte_limit}"
    )]
    #[diagnostic(
        code(r3bl_wordwrap::oversized_cluster),
        help(
            "Increase the byte limit, or allow bisecting oversized clusters (this may split a user perceived character across lines)"
        )
    )]
    OversizedCluster {
        /// Where the offending line starts in the input.
        byte_offset: usize,
        /// Size of the offending line, which is always larger than `byte_limit`.
        cluster_bytes: usize,
        byte_limit: usize,
    },
}
