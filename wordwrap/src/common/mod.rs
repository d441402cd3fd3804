// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod decl_macros;
pub mod error;
pub mod inline_vec;
pub mod log;

// Re-export.
pub use error::*;
pub use inline_vec::*;
pub use log::*;
