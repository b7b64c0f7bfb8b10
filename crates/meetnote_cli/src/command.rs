//! Line command parsing for the terminal view.

use meetnote_core::NoteId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One user action read from a prompt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    /// Shows `id`, or the active note when absent.
    Show(Option<NoteId>),
    Select(NoteId),
    New,
    Edit(NoteId),
    Delete(NoteId),
    Record,
    Help,
    Quit,
}

/// Command parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingId(&'static str),
    InvalidId(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command; type `help`"),
            Self::Unknown(word) => write!(f, "unknown command `{word}`; type `help`"),
            Self::MissingId(command) => write!(f, "`{command}` needs a note id"),
            Self::InvalidId(value) => write!(f, "not a note id: `{value}`"),
        }
    }
}

impl Error for CommandError {}

pub const HELP_TEXT: &str = "\
commands:
  list            list notes, newest first
  show [id]       show a note (default: active note)
  select <id>     make a note active
  new             create a note
  edit <id>       edit a note
  delete <id>     delete a note (asks for confirmation)
  record          start/stop recording
  help            show this help
  quit            exit";

/// Parses one prompt line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(CommandError::Empty);
    };
    let arg = words.next();

    match verb.to_ascii_lowercase().as_str() {
        "list" | "ls" => Ok(Command::List),
        "show" => arg.map(parse_id).transpose().map(Command::Show),
        "select" => required_id("select", arg).map(Command::Select),
        "new" => Ok(Command::New),
        "edit" => required_id("edit", arg).map(Command::Edit),
        "delete" | "rm" => required_id("delete", arg).map(Command::Delete),
        "record" => Ok(Command::Record),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn required_id(command: &'static str, arg: Option<&str>) -> Result<NoteId, CommandError> {
    arg.ok_or(CommandError::MissingId(command))
        .and_then(parse_id)
}

fn parse_id(value: &str) -> Result<NoteId, CommandError> {
    value
        .parse::<NoteId>()
        .map_err(|_| CommandError::InvalidId(value.to_string()))
}
