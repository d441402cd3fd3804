// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use strum_macros::{Display, EnumString};

use crate::WrapError;

/// Whether a line fits its byte limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum LineStatus {
    #[strum(serialize = "ok")]
    Ok,
    /// The line holds a grapheme cluster (or a scalar value while bisecting) that is
    /// larger than the byte limit on its own, so the line is larger than the limit too.
    #[strum(serialize = "oversized-cluster")]
    OversizedCluster,
}

/// One line produced by [`crate::SplitLines`]. The content is borrowed from the input, so
/// no line is ever copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine<'a> {
    /// 0 based position of this line in the sequence.
    pub index: usize,
    /// The line, right trimmed if [`crate::SplitConfig::trim_trailing_whitespace`] is set.
    pub content: &'a str,
    /// Where the untrimmed line sits in the input. Consecutive lines have adjacent
    /// ranges.
    pub byte_range: Range<usize>,
    pub status: LineStatus,
    /// The byte limit that was in effect, kept to build the error.
    pub byte_limit: usize,
}

impl<'a> OutputLine<'a> {
    #[must_use]
    pub fn is_ok(&self) -> bool { self.status == LineStatus::Ok }

    /// Byte length of the line before trimming.
    #[must_use]
    pub fn untrimmed_len(&self) -> usize { self.byte_range.len() }

    /// The error attached to this line, if it is oversized.
    #[must_use]
    pub fn error(&self) -> Option<WrapError> {
        match self.status {
            LineStatus::Ok => None,
            LineStatus::OversizedCluster => Some(WrapError::OversizedCluster {
                byte_offset: self.byte_range.start,
                cluster_bytes: self.byte_range.len(),
                byte_limit: self.byte_limit,
            }),
        }
    }

    /// # Errors
    ///
    /// Returns [`WrapError::OversizedCluster`] if this line doesn't fit its byte limit.
    pub fn into_result(self) -> Result<&'a str, WrapError> {
        match self.error() {
            None => Ok(self.content),
            Some(error) => Err(error),
        }
    }
}
