// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Mental model
//!
//! [`SplitLines`] walks the grapheme clusters of the input exactly once and keeps a
//! [`WorkingLine`] (a byte range of the input) along with two remembered cut points:
//!
//! - **space**: just past the most recent whitespace cluster.
//! - **last-safe**: just past the most recent cluster that fit.
//!
//! When the working line reaches the byte limit it gets cut. A space cut always wins,
//! even if the last-safe cut would fill the line better, as long as the line it gives is
//! within the limit (a multi byte whitespace cluster like `"\r\n"` can itself push the
//! line over). With no space to cut at, a line that is exactly at the limit goes out
//! whole, and a line that is over the limit is cut just before the cluster that pushed
//! it over.
//!
//! A cluster that is larger than the limit all by itself can never fit. It is either
//! reported as an [`LineStatus::OversizedCluster`] line, or (only if the caller allows
//! it) bisected into its scalar values, which then go through the same placement rules.
//!
//! ```text
//! "asdasd asd asdasd", byte limit 4
//!
//!  a s d a │ s d ␣ a   ← reaches 4, space wins: "sd␣" out, "a" stays
//!          │ a s d ␣   ← reaches 4, space wins: "asd␣" out
//!          │ a s d a   ← reaches 4, no space: whole line out
//!          │ s d       ← end of input: "sd" out
//! ```
//!
//! The iterator is pull based. Each call to [`Iterator::next`] advances the scan by zero
//! or more clusters, and a cluster that is being bisected is advanced one scalar at a
//! time. The caller can stop pulling at any point; nothing is held besides the borrowed
//! input.

use std::{iter::FusedIterator, ops::Range};

use super::{ClusterSeg, ClusterSegIter, LineStatus, OutputLine, ScalarSegIter, SplitConfig,
            WorkingLine};
use crate::{InlineVec, WrapError, WrapResult};

/// Lazy sequence of [`OutputLine`]s. Create one with [`SplitConfig::split`] or
/// [`crate::split_with_config`].
#[derive(Debug)]
pub struct SplitLines<'a> {
    input: &'a str,
    config: SplitConfig,
    clusters: ClusterSegIter<'a>,
    /// Scalars of the oversized cluster being bisected that haven't been placed yet.
    bisecting: Option<ScalarSegIter<'a>>,
    line: WorkingLine,
    /// Lines that have been decided, but not handed to the caller yet. Placing one unit
    /// decides at most a handful of lines, so this stays inline.
    pending: InlineVec<OutputLine<'a>>,
    next_line_index: usize,
    is_done: bool,
}

impl<'a> SplitLines<'a> {
    #[must_use]
    pub fn new(input: &'a str, config: SplitConfig) -> Self {
        Self {
            input,
            config,
            clusters: ClusterSegIter::new(input),
            bisecting: None,
            line: WorkingLine::default(),
            pending: InlineVec::new(),
            next_line_index: 0,
            is_done: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> SplitConfig { self.config }

    /// Collect every line eagerly.
    ///
    /// # Errors
    ///
    /// Unless [`SplitConfig::continue_on_error`] is set, returns the error for the first
    /// oversized cluster, and no lines at all. With it set, oversized lines are collected
    /// like any other line and this never fails.
    pub fn collect_lines(self) -> WrapResult<Vec<&'a str>> {
        let continue_on_error = self.config.continue_on_error;
        let mut acc = Vec::new();
        for line in self {
            match line.error() {
                Some(error) if !continue_on_error => return Err(error),
                _ => acc.push(line.content),
            }
        }
        Ok(acc)
    }

    /// Feed one grapheme cluster from the oracle.
    fn step(&mut self, seg: ClusterSeg) {
        if seg.bytes_size > self.config.byte_limit && self.config.allow_cluster_bisection {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "bisecting oversized cluster",
                cluster = ?seg.get_str(self.input),
                seg = ?seg,
                byte_limit = %self.config.byte_limit
            );
            // The scalars are placed one per pull, in `next`.
            self.bisecting = Some(seg.scalar_segs(self.input));
            return;
        }
        self.place(seg);
    }

    /// Append one unit (a cluster, or a scalar value while bisecting) to the working
    /// line, and cut the line for as long as it is at or over the limit. Once this
    /// returns the working line is shorter than the limit.
    fn place(&mut self, seg: ClusterSeg) {
        let byte_limit = self.config.byte_limit;

        if seg.bytes_size > byte_limit {
            self.reject_oversized(seg);
            return;
        }

        self.line.push(seg);

        // Since `seg` fits, `byte_limit` is at least 1 here, and every cut below makes
        // the line shorter, so this loop ends.
        while self.line.len() >= byte_limit {
            if let Some(space) = self.line.space_cut(byte_limit) {
                let range = self.line.take_until(space.byte_index);
                self.emit(range, LineStatus::Ok);
            } else if self.line.len() == byte_limit {
                let range = self.line.take_all();
                self.emit(range, LineStatus::Ok);
            } else if let Some(last_safe) = self.line.last_safe_cut() {
                let range = self.line.take_until(last_safe.byte_index);
                self.emit(range, LineStatus::Ok);
            } else {
                // A single unit that is over the limit is caught at the top of this
                // function, so there is always a cut above. Report it as oversized
                // rather than emitting an over budget line as ok.
                let range = self.line.take_all();
                self.emit(range, LineStatus::OversizedCluster);
                self.is_done = !self.config.continue_on_error;
                return;
            }
        }

        self.line.mark_safe(seg);
    }

    /// `seg` doesn't fit on any line. Flush what was built so far (it is a complete,
    /// valid line), then emit `seg` by itself, flagged.
    fn reject_oversized(&mut self, seg: ClusterSeg) {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "oversized cluster",
            cluster = ?seg.get_str(self.input),
            seg = ?seg,
            byte_limit = %self.config.byte_limit,
            continue_on_error = %self.config.continue_on_error
        );

        if !self.line.is_empty() {
            let range = self.line.take_all();
            self.emit(range, LineStatus::Ok);
        }

        self.emit(seg.start_byte_index..seg.end_byte_index, LineStatus::OversizedCluster);
        self.line.reset_at(seg.end_byte_index);

        if !self.config.continue_on_error {
            self.is_done = true;
        }
    }

    /// The oracle ran out of clusters. Whatever is left in the working line is the last
    /// line.
    fn finish(&mut self) {
        if self.line.is_empty() {
            return;
        }
        let status = if self.line.len() > self.config.byte_limit {
            LineStatus::OversizedCluster
        } else {
            LineStatus::Ok
        };
        let range = self.line.take_all();
        self.emit(range, status);
    }

    fn emit(&mut self, byte_range: Range<usize>, status: LineStatus) {
        let untrimmed = &self.input[byte_range.clone()];
        let content = if self.config.trim_trailing_whitespace {
            untrimmed.trim_end_matches([' ', '\t', '\n', '\r'])
        } else {
            untrimmed
        };

        tracing::trace!(
            message = "emit line",
            index = %self.next_line_index,
            status = %status,
            byte_range = ?byte_range,
            content = ?content
        );

        self.pending.push(OutputLine {
            index: self.next_line_index,
            content,
            byte_range,
            status,
            byte_limit: self.config.byte_limit,
        });
        self.next_line_index += 1;
    }
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = OutputLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if !self.pending.is_empty() {
                return Some(self.pending.remove(0));
            }

            if self.is_done {
                return None;
            }

            if let Some(scalars) = self.bisecting.as_mut() {
                if let Some(scalar_seg) = scalars.next() {
                    self.place(scalar_seg);
                    continue;
                }
                self.bisecting = None;
            }

            match self.clusters.next() {
                Some(seg) => self.step(seg),
                None => {
                    self.finish();
                    self.is_done = true;
                }
            }
        }
    }
}

impl FusedIterator for SplitLines<'_> {}
