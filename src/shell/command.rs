//! Command definitions
//!
//! Parses one line of console input into a typed command.

use std::path::PathBuf;

use crate::error::{RecordError, Result};
use crate::persist::target_from_input;
use crate::store::{FieldKind, SortOrder};

/// A parsed console command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a student: `A <roll> <marks> <name...>`
    Add { roll: i32, marks: f32, name: String },

    /// Change one field: `M <roll> <R|N|M> <value...>`
    Modify { roll: i32, field: FieldKind, value: String },

    /// Remove a student: `R <roll>`
    Remove { roll: i32 },

    /// Show one student: `S <roll>`
    Search { roll: i32 },

    /// List students: `D [0|1|2]`
    Display { order: SortOrder },

    /// Average marks: `C`
    Average,

    /// Save to a file: `E [file]` (no file cancels)
    Save { target: Option<PathBuf> },

    /// Load from a file: `L [file]` (no file cancels)
    Load { target: Option<PathBuf> },

    Help,

    Quit,
}

impl Command {
    /// Parse a line. Blank lines yield `None`.
    ///
    /// The first word is matched case-insensitively against the menu letter
    /// or the full command name.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let (word, rest) = split_word(line);
        if word.is_empty() {
            return Ok(None);
        }

        let command = match word.to_ascii_uppercase().as_str() {
            "A" | "ADD" => {
                let (roll, rest) = split_word(rest);
                let (marks, name) = split_word(rest);
                Command::Add {
                    roll: parse_roll(roll)?,
                    marks: parse_marks(marks)?,
                    name: name.trim_end().to_string(),
                }
            }
            "M" | "MODIFY" => {
                let (roll, rest) = split_word(rest);
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err(usage("M <roll> <R|N|M> <value>"));
                }
                Command::Modify {
                    roll: parse_roll(roll)?,
                    field: field.parse()?,
                    value: value.trim_end().to_string(),
                }
            }
            "R" | "REMOVE" => Command::Remove {
                roll: parse_roll(split_word(rest).0)?,
            },
            "S" | "SEARCH" => Command::Search {
                roll: parse_roll(split_word(rest).0)?,
            },
            "D" | "DISPLAY" => {
                let choice = split_word(rest).0.parse::<i32>().unwrap_or(0);
                Command::Display {
                    order: SortOrder::from_choice(choice),
                }
            }
            "C" | "AVERAGE" => Command::Average,
            "E" | "SAVE" => Command::Save {
                target: target_from_input(rest),
            },
            "L" | "LOAD" => Command::Load {
                target: target_from_input(rest),
            },
            "H" | "HELP" | "?" => Command::Help,
            "Q" | "QUIT" | "EXIT" => Command::Quit,
            other => {
                return Err(RecordError::InvalidValue(format!(
                    "unknown command '{}' (H for help)",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

/// Split off the first whitespace-delimited word; the remainder keeps its
/// inner spacing.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => {
            let (word, rest) = s.split_at(idx);
            (word, rest.trim_start())
        }
        None => (s, ""),
    }
}

fn parse_roll(text: &str) -> Result<i32> {
    if text.is_empty() {
        return Err(usage("a roll number is required"));
    }
    text.parse()
        .map_err(|_| RecordError::InvalidValue(format!("'{}' is not a roll number", text)))
}

fn parse_marks(text: &str) -> Result<f32> {
    if text.is_empty() {
        return Err(usage("A <roll> <marks> <name>"));
    }
    text.parse()
        .map_err(|_| RecordError::InvalidValue(format!("'{}' is not a mark", text)))
}

fn usage(hint: &str) -> RecordError {
    RecordError::InvalidValue(format!("usage: {}", hint))
}
