//! Shell Module
//!
//! The interactive console in front of the record store.
//!
//! ## Commands
//!
//! ```text
//! A <roll> <marks> <name>     Add a student
//! M <roll> <R|N|M> <value>    Modify roll number, name or marks
//! R <roll>                    Remove a student
//! S <roll>                    Search by roll number
//! D [0|1|2]                   Display as-is, ascending or descending by marks
//! C                           Average marks
//! E [file]                    Save (no file cancels)
//! L [file]                    Load and append (no file cancels)
//! H                           Help
//! Q                           Quit
//! ```
//!
//! Letters are case-insensitive and the full words (ADD, MODIFY, ...) work too.
//! The session only ever talks to the store through its public operations.

mod command;
mod session;

pub use command::Command;
pub use session::{Flow, Session};
