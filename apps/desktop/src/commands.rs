//! Commands typed at the prompt, parsed into actions on the user manager.

use shared::{
    domain::{DraftField, UserId},
    error::UnknownDraftField,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Refresh,
    Set { field: DraftField, value: String },
    Edit { id: UserId },
    Cancel,
    Save,
    Delete { id: UserId },
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not a user id")]
    InvalidId(String),
    #[error(transparent)]
    Field(#[from] UnknownDraftField),
}

pub const HELP: &str = "\
commands:
  list                  show users and the form
  refresh               reload users from the server
  set <field> <value>   fill a form field (name, email, phoneNumber)
  edit <id>             load a listed user into the form
  cancel                leave edit mode and clear the form
  save                  create or update from the form
  delete <id>           delete a user after confirmation
  help                  show this message
  quit                  exit";

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::Empty),
        "list" | "ls" => Ok(Command::List),
        "refresh" | "reload" => Ok(Command::Refresh),
        "set" => {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .map(|(field, value)| (field, value.trim()))
                .unwrap_or((rest, ""));
            if field.is_empty() {
                return Err(CommandError::Usage("set <field> <value>"));
            }
            Ok(Command::Set {
                field: field.parse()?,
                value: value.to_string(),
            })
        }
        "edit" => Ok(Command::Edit {
            id: parse_id(rest, "edit <id>")?,
        }),
        "cancel" => Ok(Command::Cancel),
        "save" | "submit" => Ok(Command::Save),
        "delete" | "rm" => Ok(Command::Delete {
            id: parse_id(rest, "delete <id>")?,
        }),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_id(raw: &str, usage: &'static str) -> Result<UserId, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    raw.parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
