//! The interactive loop: read a command, apply it to the view, redraw.

use std::io::{BufRead, Write};

use thiserror::Error;
use todo_view_core::{ApiError, TodoView, Transport};
use tracing::debug;

use crate::command::{Command, ParseError, HELP};
use crate::screen::draw;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("no todo on row {0}")]
    NoSuchRow(usize),
    #[error("not editing; use `edit <n>` first")]
    NotEditing,
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Print the help text, then continue.
    Help,
    Quit,
}

/// Apply one command. Row numbers refer to the screen as currently rendered.
pub fn apply<T: Transport>(view: &mut TodoView<T>, command: Command) -> Result<Flow, SessionError> {
    debug!(?command, "apply");
    match command {
        Command::Add(text) => {
            view.set_new_title(text);
            view.add()?;
        }
        Command::Toggle(number) => {
            let id = row_id(view, number)?;
            let current = view
                .state()
                .item(id)
                .map(|item| item.is_complete)
                .ok_or(SessionError::NoSuchRow(number))?;
            view.toggle_complete(id, current)?;
        }
        Command::Delete(number) => {
            let id = row_id(view, number)?;
            view.delete(id)?;
        }
        Command::Edit(number) => {
            let id = row_id(view, number)?;
            if !view.begin_edit(id) {
                return Err(SessionError::NoSuchRow(number));
            }
        }
        Command::Text(text) => {
            if !view.set_edit_text(text) {
                return Err(SessionError::NotEditing);
            }
        }
        Command::Save => {
            if !view.save_edit()? {
                return Err(SessionError::NotEditing);
            }
        }
        Command::Cancel => {
            view.cancel_edit();
        }
        Command::Reload => view.reload()?,
        Command::Help => return Ok(Flow::Help),
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn row_id<T: Transport>(view: &TodoView<T>, number: usize) -> Result<todo_view_core::TodoId, SessionError> {
    view.render()
        .row_id(number)
        .ok_or(SessionError::NoSuchRow(number))
}

/// Load, draw, then process `input` line by line until it ends or `quit`.
///
/// Request failures are shown in the screen's error banner; other command
/// errors are printed on their own line. Neither ends the session.
pub fn run<T, R, W>(view: &mut TodoView<T>, input: R, out: &mut W, styled: bool) -> std::io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    // The banner already reports a failed initial load.
    let _ = view.reload();
    draw(out, &view.render(), styled)?;

    for line in input.lines() {
        let line = line?;
        let flow = line
            .parse::<Command>()
            .map_err(SessionError::from)
            .and_then(|command| apply(view, command));
        match flow {
            Ok(Flow::Quit) => break,
            Ok(Flow::Help) => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Ok(Flow::Continue) | Err(SessionError::Api(_)) => {}
            Err(SessionError::Parse(ParseError::Empty)) => continue,
            Err(e) => writeln!(out, "error: {e}")?,
        }
        draw(out, &view.render(), styled)?;
    }
    Ok(())
}
