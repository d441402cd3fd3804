// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Adapter around the grapheme cluster oracle ([`unicode_segmentation`]). It turns a
//! string slice into a lazy stream of [`ClusterSeg`]s, which carry just enough
//! information for the segmenter to make its break decisions: byte indices into the
//! input, the byte size, and whether the cluster starts with whitespace.
//!
//! A grapheme cluster is a user perceived character. Here are some examples of how many
//! bytes one takes up in `UTF-8`:
//! - `H` takes up 1 byte.
//! - `😃` takes up 4 bytes.
//! - `👋🏽` takes up 8 bytes, `'👋' + '🏽'`.
//! - `👩‍👩‍👧‍👧` takes up 25 bytes, four emoji joined by three zero width joiners.
//! - `क्षि` (Devanagari) takes up 12 bytes, four code points.
//!
//! If you use [`str::chars()`] to walk `👋🏽`, you get two separate [char]s. The
//! segmenter must never put a line break between them, which is why clusters (and not
//! chars or bytes) are its unit of work.

use std::{fmt::Debug, iter::FusedIterator, str::CharIndices};

use unicode_segmentation::{GraphemeIndices, UnicodeSegmentation};

/// One grapheme cluster of the input (or, while bisecting an oversized cluster, one
/// scalar value of it). This struct does not allocate anything and is [Copy]. The input
/// string owns the memory, and this is a "view" into it.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ClusterSeg {
    /// Start index (bytes) of this cluster in the input.
    pub start_byte_index: usize,
    /// End index (bytes, exclusive) of this cluster in the input.
    pub end_byte_index: usize,
    /// Equals `end_byte_index - start_byte_index`. Never zero.
    pub bytes_size: usize,
    /// The first scalar value of the cluster satisfies [`char::is_whitespace`].
    pub starts_with_whitespace: bool,
}

/// Compact pretty print, the derived one takes up too much space when debugging.
impl Debug for ClusterSeg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ClusterSeg[{b_b:>3}, {b_e:>3}) size: {b_s:>2}{ws}",
            b_b = self.start_byte_index,
            b_e = self.end_byte_index,
            b_s = self.bytes_size,
            ws = if self.starts_with_whitespace { " ␣" } else { "" },
        )
    }
}

impl ClusterSeg {
    #[must_use]
    pub fn new(start_byte_index: usize, cluster: &str) -> Self {
        Self {
            start_byte_index,
            end_byte_index: start_byte_index + cluster.len(),
            bytes_size: cluster.len(),
            starts_with_whitespace: cluster.chars().next().is_some_and(char::is_whitespace),
        }
    }

    /// Get the string slice for this cluster. The `input` must be the string this
    /// cluster was produced from.
    #[must_use]
    pub fn get_str<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start_byte_index..self.end_byte_index]
    }

    /// Break this cluster down into its scalar values. This is the only place where a
    /// user perceived character gets taken apart, and only when the caller explicitly
    /// asked for it via [`crate::SplitConfig::with_allow_cluster_bisection`].
    #[must_use]
    pub fn scalar_segs<'a>(&self, input: &'a str) -> ScalarSegIter<'a> {
        ScalarSegIter {
            start_byte_index: self.start_byte_index,
            chars: self.get_str(input).char_indices(),
        }
    }
}

/// Lazy stream of the scalar values of one cluster, each as a one scalar [`ClusterSeg`].
/// The segmenter holds on to this while it bisects, so a cluster with a huge number of
/// combining marks is taken apart one scalar per pull.
#[derive(Debug, Clone)]
pub struct ScalarSegIter<'a> {
    start_byte_index: usize,
    chars: CharIndices<'a>,
}

impl Iterator for ScalarSegIter<'_> {
    type Item = ClusterSeg;

    fn next(&mut self) -> Option<Self::Item> {
        let (offset, scalar) = self.chars.next()?;
        let start_byte_index = self.start_byte_index + offset;
        Some(ClusterSeg {
            start_byte_index,
            end_byte_index: start_byte_index + scalar.len_utf8(),
            bytes_size: scalar.len_utf8(),
            starts_with_whitespace: scalar.is_whitespace(),
        })
    }
}

impl FusedIterator for ScalarSegIter<'_> {}

/// Lazy stream of [`ClusterSeg`]s over an input string. It has an ASCII fast path: in
/// ASCII text every byte is its own grapheme cluster, so the Unicode tables don't have to
/// be consulted. `"\r\n"` is the one ASCII sequence that forms a single cluster, so any
/// input that contains a carriage return takes the Unicode path.
pub enum ClusterSegIter<'a> {
    Ascii(CharIndices<'a>),
    Unicode(GraphemeIndices<'a>),
}

impl Debug for ClusterSegIter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusterSegIter::Ascii(_) => write!(f, "ClusterSegIter::Ascii"),
            ClusterSegIter::Unicode(_) => write!(f, "ClusterSegIter::Unicode"),
        }
    }
}

impl<'a> ClusterSegIter<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        if input.is_ascii() && !input.contains('\r') {
            ClusterSegIter::Ascii(input.char_indices())
        } else {
            ClusterSegIter::Unicode(input.grapheme_indices(true))
        }
    }
}

impl Iterator for ClusterSegIter<'_> {
    type Item = ClusterSeg;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ClusterSegIter::Ascii(it) => it.next().map(|(start, ch)| ClusterSeg {
                start_byte_index: start,
                end_byte_index: start + 1,
                bytes_size: 1,
                starts_with_whitespace: ch.is_whitespace(),
            }),
            ClusterSegIter::Unicode(it) => {
                it.next().map(|(start, cluster)| ClusterSeg::new(start, cluster))
            }
        }
    }
}

impl FusedIterator for ClusterSegIter<'_> {}
