//! RecordStore implementation
//!
//! Vec-backed store with an explicit, observable capacity policy.

use std::path::Path;
use std::str::FromStr;

use crate::config::Config;
use crate::error::{RecordError, Result};
use crate::persist::{self, LoadReport};
use crate::record::{validate_marks, validate_name, Student, UNASSIGNED_ROLL};

use super::snapshot::{sorted_snapshot, SortOrder};

/// Which field of a record a modification targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    RollNumber,
    Name,
    Marks,
}

impl FromStr for FieldKind {
    type Err = RecordError;

    /// Accepts the menu letters (R, N, M) or the full field names
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "R" | "ROLL" => Ok(FieldKind::RollNumber),
            "N" | "NAME" => Ok(FieldKind::Name),
            "M" | "MARKS" => Ok(FieldKind::Marks),
            other => Err(RecordError::InvalidValue(format!(
                "unknown field '{}', expected R, N or M",
                other
            ))),
        }
    }
}

/// A typed modification to a single field
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    RollNumber(i32),
    Name(String),
    Marks(f32),
}

impl Change {
    /// Parse raw text into a change for the given field
    pub fn parse(kind: FieldKind, text: &str) -> Result<Self> {
        match kind {
            FieldKind::RollNumber => text
                .trim()
                .parse::<i32>()
                .map(Change::RollNumber)
                .map_err(|_| RecordError::InvalidValue(format!("'{}' is not a roll number", text))),
            FieldKind::Name => Ok(Change::Name(text.to_string())),
            FieldKind::Marks => text
                .trim()
                .parse::<f32>()
                .map(Change::Marks)
                .map_err(|_| RecordError::InvalidValue(format!("'{}' is not a mark", text))),
        }
    }
}

/// The canonical record collection
///
/// Records keep their insertion order. Sorting for display always works on
/// a copy (see [`sorted_snapshot`]), never on this sequence.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Student>,

    /// Logical capacity under the growth/shrink policy.
    /// The backing Vec always holds at least this much.
    capacity: usize,

    initial_capacity: usize,
    shrink_on_remove: bool,
}

impl RecordStore {
    /// Create an empty store with the default policy
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create an empty store using the capacity settings from `config`
    pub fn with_config(config: &Config) -> Self {
        Self {
            records: Vec::new(),
            capacity: 0,
            initial_capacity: config.initial_capacity.max(1),
            shrink_on_remove: config.shrink_on_remove,
        }
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Index of the first record with `roll`, by linear scan
    pub fn find(&self, roll: i32) -> Option<usize> {
        self.records.iter().position(|s| s.roll_number == roll)
    }

    /// The first record with `roll`
    pub fn get(&self, roll: i32) -> Option<&Student> {
        self.find(roll).map(|idx| &self.records[idx])
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Append a new record
    ///
    /// Fails with `DuplicateRoll` if `roll` is already present. The sentinel
    /// gets no exemption here: a second `-1` is rejected like any other key.
    pub fn add(&mut self, roll: i32, name: impl Into<String>, marks: f32) -> Result<()> {
        if self.find(roll).is_some() {
            return Err(RecordError::DuplicateRoll(roll));
        }
        let student = Student::new(roll, name, marks)?;

        self.grow_if_full()?;
        self.records.push(student);
        Ok(())
    }

    /// Remove the record with `roll`, shifting later records left
    pub fn remove(&mut self, roll: i32) -> Result<Student> {
        let idx = self.find(roll).ok_or(RecordError::NotFound(roll))?;
        let removed = self.records.remove(idx);
        self.shrink_if_sparse();
        Ok(removed)
    }

    /// Apply a typed change to the record with `roll`
    ///
    /// A roll number change is rejected if the new roll is already taken,
    /// including by the record being modified.
    pub fn modify(&mut self, roll: i32, change: Change) -> Result<()> {
        let idx = self.find(roll).ok_or(RecordError::NotFound(roll))?;

        match change {
            Change::RollNumber(new_roll) => {
                if self.find(new_roll).is_some() {
                    return Err(RecordError::DuplicateRoll(new_roll));
                }
                self.records[idx].roll_number = new_roll;
            }
            Change::Name(name) => {
                validate_name(&name)?;
                self.records[idx].name = name;
            }
            Change::Marks(marks) => {
                validate_marks(marks)?;
                self.records[idx].marks = marks;
            }
        }
        Ok(())
    }

    /// Parse `text` for `kind` and apply it to the record with `roll`
    pub fn modify_from_text(&mut self, roll: i32, kind: FieldKind, text: &str) -> Result<()> {
        if self.find(roll).is_none() {
            return Err(RecordError::NotFound(roll));
        }
        let change = Change::parse(kind, text)?;
        self.modify(roll, change)
    }

    // =========================================================================
    // Aggregates
    // =========================================================================

    /// Mean of all marks, or `None` for an empty store
    pub fn average(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let total: f64 = self.records.iter().map(|s| s.marks as f64).sum();
        Some(total / self.records.len() as f64)
    }

    /// A copy of the records in the requested order
    pub fn sorted_snapshot(&self, order: SortOrder) -> Vec<Student> {
        sorted_snapshot(&self.records, order)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write every record to `path`, returning how many were written
    pub fn save(&self, path: &Path) -> Result<usize> {
        persist::save(path, &self.records)
    }

    /// Append the records stored in `path`
    pub fn load(&mut self, path: &Path) -> Result<LoadReport> {
        persist::load_into(self, path)
    }

    /// Make room for `additional` records ahead of a load
    ///
    /// Capacity only ever grows here. On failure nothing changes.
    pub(crate) fn reserve_for_load(&mut self, additional: usize) -> Result<()> {
        let wanted = self
            .records
            .len()
            .checked_add(additional)
            .ok_or_else(|| RecordError::Allocation(format!("cannot hold {} more records", additional)))?;

        if wanted > self.capacity {
            self.reserve_to(wanted)?;
        }
        Ok(())
    }

    /// Append a record read from a file
    ///
    /// A roll that collides with an existing record is replaced by the
    /// sentinel. Returns the original roll when that happened.
    pub(crate) fn push_loaded(&mut self, mut student: Student) -> Result<Option<i32>> {
        let mut reassigned = None;
        if student.roll_number != UNASSIGNED_ROLL && self.find(student.roll_number).is_some() {
            reassigned = Some(student.roll_number);
            student.roll_number = UNASSIGNED_ROLL;
        }

        self.grow_if_full()?;
        self.records.push(student);
        Ok(reassigned)
    }

    // =========================================================================
    // Capacity Policy
    // =========================================================================

    fn grow_if_full(&mut self) -> Result<()> {
        if self.records.len() < self.capacity {
            return Ok(());
        }

        let new_capacity = if self.capacity == 0 {
            self.initial_capacity
        } else {
            self.capacity.checked_mul(2).ok_or_else(|| {
                RecordError::Allocation(format!("capacity {} cannot double", self.capacity))
            })?
        };

        self.reserve_to(new_capacity)?;
        tracing::debug!("Store grew to capacity {}", new_capacity);
        Ok(())
    }

    fn reserve_to(&mut self, new_capacity: usize) -> Result<()> {
        let additional = new_capacity.saturating_sub(self.records.len());
        self.records
            .try_reserve_exact(additional)
            .map_err(|e| RecordError::Allocation(e.to_string()))?;
        self.capacity = new_capacity;
        Ok(())
    }

    fn shrink_if_sparse(&mut self) {
        if !self.shrink_on_remove {
            return;
        }

        let count = self.records.len();
        if count > 0 && count < self.capacity / 4 {
            self.capacity /= 2;
            self.records.shrink_to(self.capacity);
            tracing::debug!("Store shrank to capacity {}", self.capacity);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Records in canonical order
    pub fn records(&self) -> &[Student] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Logical capacity (for testing and debugging)
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
