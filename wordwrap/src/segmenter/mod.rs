// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Grapheme cluster aware splitting of text into lines that each fit in a byte budget.
//! See [`split_lines`] for how breaks are chosen.

// Attach sources.
pub mod cluster_seg;
pub mod output_line;
pub mod split_api;
pub mod split_config;
pub mod split_lines;
pub mod working_line;

// Re-export.
pub use cluster_seg::*;
pub use output_line::*;
pub use split_api::*;
pub use split_config::*;
pub use split_lines::*;
pub use working_line::*;
