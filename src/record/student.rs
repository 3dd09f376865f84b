//! Student record definitions

use std::fmt;

use crate::error::{RecordError, Result};

/// Roll number given to records whose real roll collided during a load
pub const UNASSIGNED_ROLL: i32 = -1;

/// Marks strictly above this value pass
pub const PASS_THRESHOLD: f32 = 50.0;

/// A single student record
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Free text, never contains a line terminator
    pub name: String,

    /// Unique key (except for `UNASSIGNED_ROLL`, which may repeat)
    pub roll_number: i32,

    pub marks: f32,
}

impl Student {
    /// Create a validated student record
    pub fn new(roll_number: i32, name: impl Into<String>, marks: f32) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        validate_marks(marks)?;
        Ok(Self {
            name,
            roll_number,
            marks,
        })
    }

    /// Whether this record carries the unassigned sentinel
    pub fn is_unassigned(&self) -> bool {
        self.roll_number == UNASSIGNED_ROLL
    }

    /// Grade against the fixed pass threshold
    pub fn grade(&self) -> Grade {
        pass_fail(self.marks)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {:.2}", self.roll_number, self.name, self.marks)
    }
}

/// Pass/fail classification of a mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Pass,
    Fail,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Pass => f.write_str("Pass"),
            Grade::Fail => f.write_str("Fail"),
        }
    }
}

/// Classify `marks` against `PASS_THRESHOLD`. Exactly 50.0 fails.
pub fn pass_fail(marks: f32) -> Grade {
    if marks > PASS_THRESHOLD {
        Grade::Pass
    } else {
        Grade::Fail
    }
}

/// Names are written one per line, so they must not span lines.
pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.contains(|c: char| c == '\n' || c == '\r') {
        return Err(RecordError::InvalidValue(
            "name must not contain a line break".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_marks(marks: f32) -> Result<()> {
    if !marks.is_finite() {
        return Err(RecordError::InvalidValue(format!(
            "marks must be a finite number, got {}",
            marks
        )));
    }
    Ok(())
}
