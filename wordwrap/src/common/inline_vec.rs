// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;

/// Placing a single cluster (or a single scalar while bisecting) decides at most a
/// handful of lines: a flush, a cut and its re-cut.
pub const INLINE_VEC_SIZE: usize = 4;
