//! Display snapshots
//!
//! Sorted views are disposable copies; the canonical order is never touched.

use crate::record::Student;

/// Requested display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Canonical (insertion) order
    #[default]
    AsIs,

    /// By marks, lowest first
    Ascending,

    /// By marks, highest first
    Descending,
}

impl SortOrder {
    /// Map a menu choice (1 = ascending, 2 = descending) to an order.
    /// Anything else displays as-is.
    pub fn from_choice(choice: i32) -> Self {
        match choice {
            1 => SortOrder::Ascending,
            2 => SortOrder::Descending,
            _ => SortOrder::AsIs,
        }
    }
}

/// Copy `records` and sort the copy by marks
///
/// No tie-break is applied beyond the numeric comparison.
pub fn sorted_snapshot(records: &[Student], order: SortOrder) -> Vec<Student> {
    let mut snapshot = records.to_vec();
    match order {
        SortOrder::AsIs => {}
        SortOrder::Ascending => snapshot.sort_by(|a, b| a.marks.total_cmp(&b.marks)),
        SortOrder::Descending => snapshot.sort_by(|a, b| b.marks.total_cmp(&a.marks)),
    }
    snapshot
}
