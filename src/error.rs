//! Error types for Rollcall
//!
//! Provides a unified error type for all record operations.

use thiserror::Error;

/// Result type alias using RecordError
pub type Result<T> = std::result::Result<T, RecordError>;

/// Unified error type for Rollcall operations
#[derive(Debug, Error)]
pub enum RecordError {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("A student with roll number {0} already exists")]
    DuplicateRoll(i32),

    #[error("Student with roll number {0} was not found")]
    NotFound(i32),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Memory allocation failed: {0}")]
    Allocation(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // File Format Errors
    // -------------------------------------------------------------------------
    #[error("Format error: {0}")]
    Format(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
