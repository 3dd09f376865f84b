//! Record file writer
//!
//! Serializes records to the line-oriented text format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::record::Student;

/// Write `records` to any sink: count line, then name/roll/marks per record
pub fn write_records<W: Write>(out: &mut W, records: &[Student]) -> Result<()> {
    writeln!(out, "{}", records.len())?;
    for student in records {
        writeln!(out, "{}", student.name)?;
        writeln!(out, "{}", student.roll_number)?;
        writeln!(out, "{}", student.marks)?;
    }
    Ok(())
}

/// Overwrite `path` with `records`, returning how many were written
///
/// The file is truncated first; if writing fails part way the file
/// contents are unspecified.
pub fn save(path: &Path, records: &[Student]) -> Result<usize> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_records(&mut writer, records)?;
    writer.flush()?;

    tracing::info!("Saved {} records to {}", records.len(), path.display());
    Ok(records.len())
}
