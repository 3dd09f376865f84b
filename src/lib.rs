//! # Rollcall
//!
//! An interactive student record keeper with:
//! - An insertion-ordered record store keyed by roll number
//! - Duplicate roll number enforcement
//! - Sorted views that never reorder the stored records
//! - Flat text file persistence with partial-load recovery
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Console Shell                          │
//! │                (parse line → Command)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     RecordStore                             │
//! │        (add / modify / remove / find / average)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Snapshot   │          │   Persist   │
//!   │ (sort copy) │          │ (save/load) │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod persist;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RecordError, Result};
pub use config::Config;
pub use record::{pass_fail, Grade, Student};
pub use store::{RecordStore, SortOrder};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Rollcall
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
