// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_wordwrap
//!
//! Split text into lines that each fit in a budget of `UTF-8` bytes, without ever
//! cutting a user perceived character (an extended grapheme cluster) in half. This is
//! useful when lines are bound by a byte based limit rather than a display width, eg:
//! fixed size protocol fields, log sinks, or message size caps.
//!
//! - Breaks are preferred right after whitespace, so words stay whole whenever possible.
//! - Without whitespace to break at, a line is cut just before the cluster that would push
//!   it over the budget.
//! - Every *ok* line is at most `byte_limit` bytes, and (when trimming is off) joining all
//!   the lines gives back the input exactly.
//! - A cluster that is larger than the budget on its own is reported as an error, or
//!   flagged and skipped past, or (only when asked) bisected at scalar value boundaries.
//!
//! ```
//! use r3bl_wordwrap::{LineStatus, SplitConfig, split, wrap};
//!
//! assert_eq!(split("asdasd asd asdasd", 4).unwrap(), vec!["asda", "sd ", "asd ", "asda", "sd"]);
//! assert_eq!(wrap("Hello world this is a test", 10).unwrap(), "Hello \nworld \nthis is a \ntest");
//!
//! // 👩‍👩‍👧‍👧 is one grapheme cluster of 25 bytes.
//! assert!(split("👩‍👩‍👧‍👧", 20).is_err());
//!
//! let config = SplitConfig::new(20).with_continue_on_error(true);
//! let statuses: Vec<_> = config.split("ok 👩‍👩‍👧‍👧").map(|line| line.status).collect();
//! assert_eq!(statuses, vec![LineStatus::Ok, LineStatus::OversizedCluster]);
//! ```
//!
//! # Logging
//!
//! The segmenter emits [`tracing`] events: `debug` for oversized clusters and
//! bisections, `trace` for every emitted line. Use [`try_initialize_logging_global`] or
//! [`TracingConfig`] to send them to a file or the terminal.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
// Production code must not use .unwrap() in functions that return a Result. Tests are
// allowed to.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod cli;
pub mod common;
pub mod segmenter;

// Re-export.
pub use common::*;
pub use segmenter::*;
