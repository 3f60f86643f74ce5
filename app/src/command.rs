//! Line commands typed at the prompt.

use std::str::FromStr;

use thiserror::Error;

pub const HELP: &str = "\
commands:
  add <text>      create a todo
  toggle <n>      flip completion of row n
  delete <n>      delete row n
  edit <n>        rename row n
  text <title>    replace the title being edited
  save            send the edited title
  cancel          leave edit mode
  reload          fetch the list again
  help            show this text
  quit            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Text is kept verbatim; the view decides whether it is blank.
    Add(String),
    Toggle(usize),
    Delete(usize),
    Edit(usize),
    Text(String),
    Save,
    Cancel,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs a row number")]
    MissingRow(&'static str),
    #[error("`{0}` is not a row number")]
    BadRow(String),
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        match word {
            "" => Err(ParseError::Empty),
            "add" | "a" => Ok(Command::Add(rest.to_string())),
            "text" => Ok(Command::Text(rest.to_string())),
            "toggle" | "t" => row("toggle", rest).map(Command::Toggle),
            "delete" | "d" => row("delete", rest).map(Command::Delete),
            "edit" | "e" => row("edit", rest).map(Command::Edit),
            "save" => Ok(Command::Save),
            "cancel" => Ok(Command::Cancel),
            "reload" | "r" => Ok(Command::Reload),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

fn row(command: &'static str, arg: &str) -> Result<usize, ParseError> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err(ParseError::MissingRow(command));
    }
    arg.parse().map_err(|_| ParseError::BadRow(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_text_verbatim() {
        assert_eq!("add  buy milk \n".parse::<Command>(), Ok(Command::Add(" buy milk ".to_string())));
        assert_eq!("add".parse::<Command>(), Ok(Command::Add(String::new())));
    }

    #[test]
    fn row_commands() {
        assert_eq!("toggle 2".parse::<Command>(), Ok(Command::Toggle(2)));
        assert_eq!("d 1".parse::<Command>(), Ok(Command::Delete(1)));
        assert_eq!("  edit 3  ".parse::<Command>(), Ok(Command::Edit(3)));
    }

    #[test]
    fn row_errors() {
        assert_eq!("toggle".parse::<Command>(), Err(ParseError::MissingRow("toggle")));
        assert_eq!("edit x".parse::<Command>(), Err(ParseError::BadRow("x".to_string())));
        assert_eq!("delete -1".parse::<Command>(), Err(ParseError::BadRow("-1".to_string())));
    }

    #[test]
    fn bare_words() {
        assert_eq!("save".parse::<Command>(), Ok(Command::Save));
        assert_eq!("cancel\r\n".parse::<Command>(), Ok(Command::Cancel));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn empty_and_unknown() {
        assert_eq!("   ".parse::<Command>(), Err(ParseError::Empty));
        assert_eq!(
            "frobnicate 1".parse::<Command>(),
            Err(ParseError::Unknown("frobnicate".to_string()))
        );
    }
}
