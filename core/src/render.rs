//! Pure rendering of a [`ViewState`] into a list screen.

use std::fmt;

use crate::error::ApiError;
use crate::types::TodoId;
use crate::view::{EditSession, ViewState};

pub const HEADING: &str = "Todo list";
pub const INPUT_PLACEHOLDER: &str = "Add a new task";
pub const EMPTY_PLACEHOLDER: &str = "No data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Shown instead of any item row when the collection is empty.
    Placeholder(&'static str),
    /// Display mode. `struck` mirrors the completion flag.
    Item { id: TodoId, title: String, struck: bool },
    /// Edit mode, showing the edit buffer with Save/Cancel.
    Editing { id: TodoId, buffer: String },
}

impl Row {
    pub fn id(&self) -> Option<TodoId> {
        match self {
            Row::Placeholder(_) => None,
            Row::Item { id, .. } | Row::Editing { id, .. } => Some(*id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub heading: &'static str,
    pub placeholder: &'static str,
    pub input: String,
    pub error: Option<String>,
    pub rows: Vec<Row>,
}

impl Screen {
    /// Id of the item shown on 1-based row `number`.
    pub fn row_id(&self, number: usize) -> Option<TodoId> {
        number
            .checked_sub(1)
            .and_then(|index| self.rows.get(index))
            .and_then(Row::id)
    }
}

pub fn render(state: &ViewState) -> Screen {
    let rows = if state.todos.is_empty() {
        vec![Row::Placeholder(EMPTY_PLACEHOLDER)]
    } else {
        state
            .todos
            .iter()
            .map(|todo| match &state.edit {
                EditSession::Editing { id, buffer } if *id == todo.id => Row::Editing {
                    id: todo.id,
                    buffer: buffer.clone(),
                },
                _ => Row::Item {
                    id: todo.id,
                    title: todo.title.clone(),
                    struck: todo.is_complete,
                },
            })
            .collect()
    };
    Screen {
        heading: HEADING,
        placeholder: INPUT_PLACEHOLDER,
        input: state.new_title.clone(),
        error: state.last_error.as_ref().map(ApiError::to_string),
        rows,
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Row::Placeholder(text) => f.write_str(text),
            Row::Item { title, struck, .. } => {
                let mark = if *struck { 'x' } else { ' ' };
                write!(f, "[{mark}] {title}")
            }
            Row::Editing { buffer, .. } => write!(f, "> {buffer}  (save | cancel)"),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        if let Some(error) = &self.error {
            writeln!(f, "! {error}")?;
        }
        if self.input.is_empty() {
            writeln!(f, "+ ({})", self.placeholder)?;
        } else {
            writeln!(f, "+ {}", self.input)?;
        }
        for (index, row) in self.rows.iter().enumerate() {
            match row {
                Row::Placeholder(_) => writeln!(f, "    {row}")?,
                _ => writeln!(f, "{:>3} {row}", index + 1)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoItem;

    fn item(id: i64, title: &str, is_complete: bool) -> TodoItem {
        TodoItem {
            id: TodoId(id),
            title: title.to_string(),
            is_complete,
        }
    }

    #[test]
    fn empty_collection_renders_placeholder() {
        let screen = render(&ViewState::default());
        assert_eq!(screen.rows, vec![Row::Placeholder("No data")]);
        assert_eq!(screen.row_id(1), None);
    }

    #[test]
    fn completed_items_are_struck() {
        let state = ViewState {
            todos: vec![item(1, "milk", true), item(2, "eggs", false)],
            ..ViewState::default()
        };
        let screen = render(&state);
        assert_eq!(
            screen.rows,
            vec![
                Row::Item { id: TodoId(1), title: "milk".into(), struck: true },
                Row::Item { id: TodoId(2), title: "eggs".into(), struck: false },
            ]
        );
    }

    #[test]
    fn only_the_edited_row_switches_mode() {
        let state = ViewState {
            todos: vec![item(1, "milk", false), item(2, "eggs", false)],
            edit: EditSession::Editing {
                id: TodoId(2),
                buffer: "brown eggs".to_string(),
            },
            ..ViewState::default()
        };
        let screen = render(&state);
        assert!(matches!(screen.rows[0], Row::Item { .. }));
        assert_eq!(
            screen.rows[1],
            Row::Editing { id: TodoId(2), buffer: "brown eggs".into() }
        );
    }

    #[test]
    fn error_becomes_a_banner() {
        let state = ViewState {
            last_error: Some(ApiError::NotFound),
            ..ViewState::default()
        };
        assert_eq!(render(&state).error.as_deref(), Some("resource not found"));
    }

    #[test]
    fn row_numbers_are_one_based() {
        let state = ViewState {
            todos: vec![item(10, "a", false), item(20, "b", false)],
            ..ViewState::default()
        };
        let screen = render(&state);
        assert_eq!(screen.row_id(0), None);
        assert_eq!(screen.row_id(2), Some(TodoId(20)));
        assert_eq!(screen.row_id(3), None);
    }

    #[test]
    fn text_output() {
        let state = ViewState {
            todos: vec![item(1, "milk", true)],
            new_title: "bread".to_string(),
            ..ViewState::default()
        };
        assert_eq!(render(&state).to_string(), "Todo list\n+ bread\n  1 [x] milk\n");
        assert_eq!(
            render(&ViewState::default()).to_string(),
            "Todo list\n+ (Add a new task)\n    No data\n"
        );
    }
}
