//! Record file reader
//!
//! Parses the line-oriented text format and appends records to a store.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::error::{RecordError, Result};
use crate::record::Student;
use crate::store::RecordStore;

/// Outcome of a load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Records appended to the store
    pub added: usize,

    /// Records the file's count line declared
    pub expected: usize,

    /// Original roll numbers that collided and were stored as `-1`, in file order
    pub reassigned: Vec<i32>,
}

impl LoadReport {
    /// Whether every declared record was loaded
    pub fn is_complete(&self) -> bool {
        self.added == self.expected
    }
}

/// Why a record block could not be read. Ends the load without failing it.
#[derive(Debug, Error)]
pub enum BlockError {
    #[error("file ended before the {0} line")]
    UnexpectedEof(&'static str),

    #[error("unreadable line: {0}")]
    Unreadable(#[from] io::Error),

    #[error("invalid name: {0}")]
    BadName(String),

    #[error("invalid roll number '{0}'")]
    BadRoll(String),

    #[error("invalid marks '{0}'")]
    BadMarks(String),
}

/// Reads the count line and record blocks from a record file
pub struct RecordReader<R> {
    inner: R,

    /// 1-based number of the last line read
    line_no: usize,
}

impl RecordReader<BufReader<File>> {
    /// Open a record file for reading
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, line_no: 0 }
    }

    /// Read the declared record count from the first line
    pub fn read_count(&mut self) -> Result<usize> {
        let line = match self.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => return Err(RecordError::Format("missing record count".to_string())),
            Err(e) => return Err(RecordError::Format(format!("unreadable record count: {}", e))),
        };

        let count: i32 = line.trim().parse().map_err(|_| {
            RecordError::Format(format!("record count '{}' is not an integer", line.trim()))
        })?;
        usize::try_from(count)
            .map_err(|_| RecordError::Format(format!("record count {} is negative", count)))
    }

    /// Read the next three-line record block
    pub fn next_record(&mut self) -> std::result::Result<Student, BlockError> {
        let name = self.next_line()?.ok_or(BlockError::UnexpectedEof("name"))?;

        let roll_line = self.next_line()?.ok_or(BlockError::UnexpectedEof("roll number"))?;
        let roll: i32 = roll_line
            .trim()
            .parse()
            .map_err(|_| BlockError::BadRoll(roll_line.trim().to_string()))?;

        let marks_line = self.next_line()?.ok_or(BlockError::UnexpectedEof("marks"))?;
        let marks: f32 = marks_line
            .trim()
            .parse()
            .ok()
            .filter(|m: &f32| m.is_finite())
            .ok_or_else(|| BlockError::BadMarks(marks_line.trim().to_string()))?;

        Student::new(roll, name, marks).map_err(|e| BlockError::BadName(e.to_string()))
    }

    /// Number of lines consumed so far
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Next line without its terminator, or `None` at end of file
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.inner.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Append the records in `path` to `store`
///
/// The store is untouched if the file cannot be opened, the count line is
/// malformed, or room for the declared records cannot be reserved. After
/// that, a bad block only cuts the load short.
///
/// Roll collisions are checked once a block has been read in full, so a
/// block that fails on its marks line never produces a duplicate warning
/// or a `reassigned` entry.
pub fn load_into(store: &mut RecordStore, path: &Path) -> Result<LoadReport> {
    let mut reader = RecordReader::open(path)?;
    let expected = reader.read_count()?;

    let mut report = LoadReport {
        expected,
        ..LoadReport::default()
    };

    if expected == 0 {
        tracing::info!("{} declares no records", path.display());
        return Ok(report);
    }

    store.reserve_for_load(expected)?;

    for block in 0..expected {
        let student = match reader.next_record() {
            Ok(student) => student,
            Err(e) => {
                tracing::warn!(
                    "Stopped reading {} at block {} (line {}): {}",
                    path.display(),
                    block + 1,
                    reader.line_no(),
                    e
                );
                break;
            }
        };

        if let Some(roll) = store.push_loaded(student)? {
            tracing::warn!("Duplicate roll number {} detected, assigning -1", roll);
            report.reassigned.push(roll);
        }
        report.added += 1;
    }

    if report.is_complete() {
        tracing::info!("Loaded {} records from {}", report.added, path.display());
    } else {
        tracing::warn!(
            "File may be corrupt: loaded {} of {} expected records from {}",
            report.added,
            report.expected,
            path.display()
        );
    }

    Ok(report)
}
