//! Record Module
//!
//! The student record value type and grading rules.
//!
//! ## Responsibilities
//! - Hold a single student's name, roll number and marks
//! - Reserve the `-1` roll number as the "unassigned" sentinel
//! - Classify marks as pass or fail

mod student;

pub use student::{Grade, Student, pass_fail, PASS_THRESHOLD, UNASSIGNED_ROLL};
pub(crate) use student::{validate_marks, validate_name};
