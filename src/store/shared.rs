//! Shared store
//!
//! A `RecordStore` behind a reader/writer lock for callers that need to share
//! one store across threads. The console owns its store directly and does
//! not go through this wrapper; it is for embedding callers.
//!
//! ## Concurrency:
//! - Mutations (add/remove/modify/load): exclusive write lock
//! - Queries (find/average/sorted_snapshot/save): shared read lock, never
//!   while a mutation is in flight

use std::path::Path;

use parking_lot::RwLock;

use crate::error::Result;
use crate::persist::LoadReport;
use crate::record::Student;

use super::{Change, RecordStore, SortOrder};

/// Thread-safe wrapper around a `RecordStore`
#[derive(Debug, Default)]
pub struct SharedStore {
    inner: RwLock<RecordStore>,
}

impl SharedStore {
    pub fn new(store: RecordStore) -> Self {
        Self {
            inner: RwLock::new(store),
        }
    }

    // -------------------------------------------------------------------------
    // Writers
    // -------------------------------------------------------------------------

    pub fn add(&self, roll: i32, name: impl Into<String>, marks: f32) -> Result<()> {
        self.inner.write().add(roll, name, marks)
    }

    pub fn remove(&self, roll: i32) -> Result<Student> {
        self.inner.write().remove(roll)
    }

    pub fn modify(&self, roll: i32, change: Change) -> Result<()> {
        self.inner.write().modify(roll, change)
    }

    pub fn load(&self, path: &Path) -> Result<LoadReport> {
        self.inner.write().load(path)
    }

    // -------------------------------------------------------------------------
    // Readers
    // -------------------------------------------------------------------------

    /// A copy of the record with `roll`
    pub fn find(&self, roll: i32) -> Option<Student> {
        self.inner.read().get(roll).cloned()
    }

    pub fn average(&self) -> Option<f64> {
        self.inner.read().average()
    }

    pub fn sorted_snapshot(&self, order: SortOrder) -> Vec<Student> {
        self.inner.read().sorted_snapshot(order)
    }

    pub fn save(&self, path: &Path) -> Result<usize> {
        self.inner.read().save(path)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Unwrap the lock and hand back the store
    pub fn into_inner(self) -> RecordStore {
        self.inner.into_inner()
    }
}
