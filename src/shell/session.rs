//! Interactive session
//!
//! Owns the record store and drives it from a line-oriented console.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::{RecordError, Result};
use crate::persist::LoadReport;
use crate::record::{pass_fail, Student};
use crate::store::{RecordStore, SortOrder};

use super::Command;

const HELP: &str = "\
==== Student Record System ====
A <roll> <marks> <name>      Add a new student
D [0|1|2]                    Display all (0 as-is, 1 ascending, 2 descending)
M <roll> <R|N|M> <value>     Modify roll number, name or marks
R <roll>                     Remove a student
S <roll>                     Search by roll number
C                            Show average marks
E [file]                     Save records to file
L [file]                     Load records from file
H                            Show this help
Q                            Exit
===============================";

/// Whether the loop should keep going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A console session over any line source and output sink
pub struct Session<R, W> {
    store: RecordStore,
    config: Config,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty store
    pub fn new(config: Config, input: R, output: W) -> Self {
        let store = RecordStore::with_config(&config);
        Self::with_store(config, store, input, output)
    }

    /// Create a session around an existing store
    pub fn with_store(config: Config, store: RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            config,
            input,
            output,
        }
    }

    /// Run until `Q` or end of input
    ///
    /// Command failures are reported on the output and never end the loop;
    /// only I/O errors on the console itself are returned.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", HELP)?;

        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(self.output, "Error: {}", e)?;
                    continue;
                }
            };

            tracing::debug!("Executing {:?}", command);
            if self.execute(command)? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Execute one command, writing its outcome to the output
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        let outcome = match command {
            Command::Add { roll, marks, name } => self.add(roll, marks, name),
            Command::Modify { roll, field, value } => self
                .store
                .modify_from_text(roll, field, &value)
                .and_then(|()| self.report_modified(roll)),
            Command::Remove { roll } => self
                .store
                .remove(roll)
                .and_then(|_| Ok(writeln!(self.output, "Student record removed successfully.")?)),
            Command::Search { roll } => self.search(roll),
            Command::Display { order } => self.display(order),
            Command::Average => self.average(),
            Command::Save { target: None } => {
                Ok(writeln!(self.output, "No filename entered. Save cancelled.")?)
            }
            Command::Save { target: Some(path) } => match self.store.save(&path) {
                Ok(count) => Ok(writeln!(
                    self.output,
                    "Successfully saved {} records to {}.",
                    count,
                    path.display()
                )?),
                Err(RecordError::Io(e)) => Err(RecordError::Io(std::io::Error::new(
                    e.kind(),
                    format!("could not write {}: {}", path.display(), e),
                ))),
                Err(e) => Err(e),
            },
            Command::Load { target: None } => {
                Ok(writeln!(self.output, "No filename entered. Load cancelled.")?)
            }
            Command::Load { target: Some(path) } => match self.store.load(&path) {
                Ok(report) => self.report_load(&report, &path.display().to_string()),
                Err(RecordError::Io(e)) => Err(RecordError::Io(std::io::Error::new(
                    e.kind(),
                    format!("could not open {}: {}", path.display(), e),
                ))),
                Err(e) => Err(e),
            },
            Command::Help => Ok(writeln!(self.output, "{}", HELP)?),
            Command::Quit => {
                writeln!(self.output, "Goodbye!")?;
                return Ok(Flow::Quit);
            }
        };

        if let Err(e) = outcome {
            writeln!(self.output, "Error: {}", e)?;
        }
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Command Handlers
    // =========================================================================

    fn add(&mut self, roll: i32, marks: f32, name: String) -> Result<()> {
        let chars = name.chars().count();
        if chars > self.config.name_length_hint {
            tracing::warn!(
                "Name for roll {} is {} characters (hint is {})",
                roll,
                chars,
                self.config.name_length_hint
            );
        }

        self.store.add(roll, name, marks)?;
        writeln!(self.output, "Student added successfully!")?;
        writeln!(self.output, "Student Status: {}", pass_fail(marks))?;
        Ok(())
    }

    fn report_modified(&mut self, roll: i32) -> Result<()> {
        writeln!(self.output, "Record {} updated successfully.", roll)?;
        Ok(())
    }

    fn search(&mut self, roll: i32) -> Result<()> {
        let student = self.store.get(roll).ok_or(RecordError::NotFound(roll))?.clone();
        writeln!(self.output, "--- Student Found ---")?;
        writeln!(self.output, "Roll Number: {}", student.roll_number)?;
        writeln!(self.output, "Name:        {}", student.name)?;
        writeln!(self.output, "Marks:       {:.2}", student.marks)?;
        writeln!(self.output, "Status:      {}", student.grade())?;
        Ok(())
    }

    fn display(&mut self, order: SortOrder) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "No student records found.")?;
            return Ok(());
        }

        let heading = match order {
            SortOrder::AsIs => "(Displaying records as-is)",
            SortOrder::Ascending => "(Displaying sorted by Marks: Ascending)",
            SortOrder::Descending => "(Displaying sorted by Marks: Descending)",
        };
        let rows = self.store.sorted_snapshot(order);

        writeln!(self.output, "{}", heading)?;
        writeln!(self.output, "{}", "-".repeat(58))?;
        writeln!(self.output, "Roll No. | Name                   | Marks  | Status")?;
        writeln!(self.output, "{}", "-".repeat(58))?;
        for student in &rows {
            self.write_row(student)?;
        }
        writeln!(self.output, "{}", "-".repeat(58))?;
        Ok(())
    }

    fn write_row(&mut self, student: &Student) -> Result<()> {
        writeln!(
            self.output,
            "{:<8} | {:<22} | {:<6.2} | {}",
            student.roll_number,
            student.name,
            student.marks,
            student.grade()
        )?;
        Ok(())
    }

    fn average(&mut self) -> Result<()> {
        match self.store.average() {
            Some(avg) => writeln!(
                self.output,
                "Average marks for {} students: {:.2}",
                self.store.len(),
                avg
            )?,
            None => writeln!(self.output, "No students to calculate average for.")?,
        }
        Ok(())
    }

    fn report_load(&mut self, report: &LoadReport, source: &str) -> Result<()> {
        for roll in &report.reassigned {
            writeln!(
                self.output,
                "Duplicate Roll Number detected for Roll Number {}. Assigning -1.",
                roll
            )?;
        }

        if report.expected == 0 {
            writeln!(self.output, "File is empty.")?;
        } else if report.is_complete() {
            writeln!(
                self.output,
                "Successfully loaded {} records from {}.",
                report.added, source
            )?;
        } else {
            writeln!(
                self.output,
                "Warning: File may be corrupt. Loaded {} out of {} expected records.",
                report.added, report.expected
            )?;
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tear down the session, keeping the store and the output sink
    pub fn into_parts(self) -> (RecordStore, W) {
        (self.store, self.output)
    }
}
