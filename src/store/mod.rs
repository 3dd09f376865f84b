//! Store Module
//!
//! The canonical, in-memory collection of student records.
//!
//! ## Responsibilities
//! - Keep records in insertion order (removals shift later records left)
//! - Enforce roll number uniqueness on add and modify
//! - Grow and shrink reserved capacity under a fixed policy
//! - Produce sorted snapshots without touching canonical order
//!
//! ## Capacity Policy
//! ```text
//! first insert          capacity = initial_capacity (10)
//! count == capacity     capacity = capacity * 2
//! after remove          count > 0 && count < capacity / 4  =>  capacity / 2
//! before load           capacity >= count + declared records
//! ```
//!
//! Allocation goes through `Vec::try_reserve_exact`, so a failed
//! reservation is reported as an error and leaves the records untouched.

mod table;
mod snapshot;
mod shared;

pub use table::{Change, FieldKind, RecordStore};
pub use snapshot::{sorted_snapshot, SortOrder};
pub use shared::SharedStore;
