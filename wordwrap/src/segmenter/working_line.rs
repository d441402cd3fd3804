// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use super::ClusterSeg;

/// A remembered place where the line being built can be cut. The `byte_index` is just
/// past the cluster that set it, in input coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakCandidate {
    pub byte_index: usize,
    /// Size of the cluster that ends at `byte_index`.
    pub bytes_size: usize,
}

/// The line currently being built. Since every line is a contiguous span of the input,
/// the "buffer" is just a byte range into it, and nothing is copied until (and unless) the
/// caller decides to copy the emitted `&str`.
///
/// Invariant: `start_byte_index <= end_byte_index`, and both candidates (when set) are
/// strictly greater than `start_byte_index` and no greater than `end_byte_index`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingLine {
    pub start_byte_index: usize,
    pub end_byte_index: usize,
    /// Just past the most recently appended whitespace cluster.
    pub space: Option<BreakCandidate>,
    /// Just past the most recently appended cluster that is known to fit. The segmenter
    /// sets it after the budget check, so at check time it is the boundary before the
    /// cluster that triggered the check.
    pub last_safe: Option<BreakCandidate>,
}

impl WorkingLine {
    #[must_use]
    pub fn len(&self) -> usize { self.end_byte_index - self.start_byte_index }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.start_byte_index == self.end_byte_index }

    /// Append the next cluster of the input. Clusters arrive in order, so appending only
    /// moves the end of the range.
    pub fn push(&mut self, seg: ClusterSeg) {
        debug_assert_eq!(seg.start_byte_index, self.end_byte_index);
        self.end_byte_index = seg.end_byte_index;
        if seg.starts_with_whitespace {
            self.space = Some(BreakCandidate {
                byte_index: seg.end_byte_index,
                bytes_size: seg.bytes_size,
            });
        }
    }

    /// Remember the end of `seg` as a safe cut, unless the line is empty (a cut at its
    /// start would produce an empty line).
    pub fn mark_safe(&mut self, seg: ClusterSeg) {
        self.last_safe = (!self.is_empty()).then_some(BreakCandidate {
            byte_index: seg.end_byte_index,
            bytes_size: seg.bytes_size,
        });
    }

    /// The space candidate, if cutting there gives a line of at most `byte_limit` bytes.
    /// Only a multi byte whitespace cluster (eg: `"\r\n"`, `U+3000`) that was just
    /// appended can fail this, since the line was under the limit before it.
    #[must_use]
    pub fn space_cut(&self, byte_limit: usize) -> Option<BreakCandidate> {
        self.space
            .filter(|it| it.byte_index - self.start_byte_index <= byte_limit)
    }

    /// The last-safe candidate, if it would leave a non-empty line before it.
    #[must_use]
    pub fn last_safe_cut(&self) -> Option<BreakCandidate> {
        self.last_safe
            .filter(|it| it.byte_index > self.start_byte_index)
    }

    /// Split off `[start, byte_index)` as a finished line. The rest seeds the next line.
    /// Candidates that pointed into the part that was taken no longer mean anything and
    /// are dropped.
    pub fn take_until(&mut self, byte_index: usize) -> Range<usize> {
        debug_assert!(byte_index > self.start_byte_index);
        debug_assert!(byte_index <= self.end_byte_index);
        let taken = self.start_byte_index..byte_index;
        self.start_byte_index = byte_index;
        self.space = self.space.filter(|it| it.byte_index > byte_index);
        self.last_safe = self.last_safe.filter(|it| it.byte_index > byte_index);
        taken
    }

    /// Take the whole line, leaving an empty one that starts where this one ended.
    pub fn take_all(&mut self) -> Range<usize> {
        let taken = self.start_byte_index..self.end_byte_index;
        self.reset_at(self.end_byte_index);
        taken
    }

    pub fn reset_at(&mut self, byte_index: usize) {
        *self = Self {
            start_byte_index: byte_index,
            end_byte_index: byte_index,
            space: None,
            last_safe: None,
        };
    }
}
