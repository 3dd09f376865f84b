//! Persistence Module
//!
//! Flat, line-oriented text files holding a record count followed by one
//! three-line block per record.
//!
//! ## File Format
//! ```text
//! ┌─────────────────┐
//! │ <count>         │
//! ├─────────────────┤
//! │ <name>          │  raw text, no line breaks
//! │ <roll number>   │  decimal integer, may be -1
//! │ <marks>         │  shortest decimal that reads back exactly
//! ├─────────────────┤
//! │ ... count blocks│
//! └─────────────────┘
//! ```
//!
//! ## Load Semantics
//! - A malformed count line rejects the whole file
//! - A truncated or malformed block stops the load; earlier blocks stay
//! - Duplicate roll numbers are replaced by the `-1` sentinel

mod writer;
mod reader;

use std::path::PathBuf;

pub use writer::{save, write_records};
pub use reader::{load_into, BlockError, LoadReport, RecordReader};

/// Turn a filename typed at a prompt into a path.
/// Empty input means the user cancelled.
pub fn target_from_input(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}
