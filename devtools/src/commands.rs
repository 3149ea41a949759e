//! Console command parsing.

use devkit::widgets::ChooserAction;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    /// Switch to the members list.
    Members,
    /// Switch to the chooser.
    Chooser,
    /// Click the nth row (1-based) of the members list or the available pane.
    Select(usize),
    /// Click the nth row (1-based) of the chosen pane.
    Unselect(usize),
    Click(String),
    FocusUp,
    FocusDown,
    Activate,
    Transfer(ChooserAction),
    Group(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("expected a row number from 1, got {0:?}")]
    BadRow(String),
}

pub const HELP: &str = "\
commands:
  show               print the current view
  members | chooser  switch view
  select <n>         click row n (members list or available pane)
  unselect <n>       click row n of the chosen pane
  click <id>         click an element by id
  up | down | enter  move keyboard focus and select (members list)
  > < >> <<          move selected / all items between panes
  group <name>       switch member group
  quit";

fn row(command: &'static str, arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument(command))?;
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(CommandError::BadRow(arg.to_string())),
    }
}

/// Parse one input line. Blank lines parse to `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    if let Some(action) = ChooserAction::from_label(head) {
        return Ok(Some(Command::Transfer(action)));
    }

    let command = match head {
        "help" | "?" => Command::Help,
        "show" | "ls" => Command::Show,
        "members" => Command::Members,
        "chooser" => Command::Chooser,
        "select" | "pick" => Command::Select(row("select", arg)?),
        "unselect" | "unpick" => Command::Unselect(row("unselect", arg)?),
        "click" => Command::Click(arg.ok_or(CommandError::MissingArgument("click"))?.to_string()),
        "up" | "k" => Command::FocusUp,
        "down" | "j" => Command::FocusDown,
        "enter" => Command::Activate,
        "group" => Command::Group(arg.ok_or(CommandError::MissingArgument("group"))?.to_string()),
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}
