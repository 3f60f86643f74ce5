//! The todo view: state store, data loader, and mutation operations.
//!
//! # Design
//! `TodoView` owns a [`ViewState`] and drives a [`Transport`]. Every mutation
//! sends exactly one request and then reloads the whole collection, which is
//! the only way local state learns about the server. Errors are captured in
//! `ViewState::last_error` for rendering and also returned to the caller.
//! There is no retry.

use tracing::{debug, info, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::render::{render, Screen};
use crate::types::{CreateTodo, TodoId, TodoItem, UpdateTodo};

/// Which row, if any, is being renamed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Display,
    Editing { id: TodoId, buffer: String },
}

impl EditSession {
    pub fn editing_id(&self) -> Option<TodoId> {
        match self {
            EditSession::Display => None,
            EditSession::Editing { id, .. } => Some(*id),
        }
    }
}

/// Everything the renderer needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Last snapshot returned by the server, in server order.
    pub todos: Vec<TodoItem>,
    /// Text of the pending new item.
    pub new_title: String,
    pub edit: EditSession,
    /// Error from the most recent operation, cleared by the next success.
    pub last_error: Option<ApiError>,
}

impl ViewState {
    pub fn item(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|todo| todo.id == id)
    }
}

pub struct TodoView<T> {
    client: TodoClient,
    transport: T,
    state: ViewState,
}

impl<T: Transport> TodoView<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn render(&self) -> Screen {
        render(&self.state)
    }

    /// Fetch the full collection and replace local state with it. On failure
    /// the previous snapshot stays in place.
    pub fn reload(&mut self) -> Result<(), ApiError> {
        let loaded = self.load();
        self.settle(loaded)
    }

    pub fn set_new_title(&mut self, text: impl Into<String>) {
        self.state.new_title = text.into();
    }

    /// Create an item from the pending new-item text.
    ///
    /// Returns `Ok(false)` without sending anything when the text is blank.
    /// The text is sent verbatim, not trimmed, and is cleared only once the
    /// server accepted it.
    pub fn add(&mut self) -> Result<bool, ApiError> {
        if self.state.new_title.trim().is_empty() {
            debug!("add skipped: blank title");
            return Ok(false);
        }
        let input = CreateTodo {
            title: self.state.new_title.clone(),
            is_complete: false,
        };
        info!(title = %input.title, "creating todo");
        let created = self
            .client
            .build_create_todo(&input)
            .and_then(|req| self.send(req))
            .and_then(|resp| self.client.parse_create_todo(resp));
        if created.is_ok() {
            self.state.new_title.clear();
        }
        self.finish_mutation(created).map(|()| true)
    }

    /// Flip the completion flag of `id`, given the flag currently shown.
    pub fn toggle_complete(&mut self, id: TodoId, current: bool) -> Result<(), ApiError> {
        info!(%id, is_complete = !current, "toggling todo");
        let updated = self
            .client
            .build_update_todo(id, &UpdateTodo::completion(!current))
            .and_then(|req| self.send(req))
            .and_then(|resp| self.client.parse_update_todo(resp));
        self.finish_mutation(updated)
    }

    pub fn delete(&mut self, id: TodoId) -> Result<(), ApiError> {
        info!(%id, "deleting todo");
        let req = self.client.build_delete_todo(id);
        let deleted = self
            .send(req)
            .and_then(|resp| self.client.parse_delete_todo(resp));
        self.finish_mutation(deleted)
    }

    /// Put `id` into edit mode with its current title in the buffer. Any
    /// other edit in progress is discarded. Returns `false` if `id` is not in
    /// the collection.
    pub fn begin_edit(&mut self, id: TodoId) -> bool {
        let Some(title) = self.state.item(id).map(|item| item.title.clone()) else {
            return false;
        };
        if let Some(previous) = self.state.edit.editing_id().filter(|prev| *prev != id) {
            debug!(%previous, "discarding unsaved edit");
        }
        self.state.edit = EditSession::Editing {
            id,
            buffer: title,
        };
        true
    }

    /// Replace the edit buffer. Ignored when nothing is being edited.
    pub fn set_edit_text(&mut self, text: impl Into<String>) -> bool {
        match &mut self.state.edit {
            EditSession::Editing { buffer, .. } => {
                *buffer = text.into();
                true
            }
            EditSession::Display => false,
        }
    }

    /// Send the edited title, leave edit mode, and reload.
    ///
    /// The payload carries `id` and `title` only. The session ends whether or
    /// not the server accepted it. Returns `Ok(false)` when not editing.
    pub fn save_edit(&mut self) -> Result<bool, ApiError> {
        let EditSession::Editing { id, buffer } = std::mem::take(&mut self.state.edit) else {
            return Ok(false);
        };
        info!(%id, title = %buffer, "renaming todo");
        let updated = self
            .client
            .build_update_todo(id, &UpdateTodo::rename(id, buffer))
            .and_then(|req| self.send(req))
            .and_then(|resp| self.client.parse_update_todo(resp));
        self.finish_mutation(updated).map(|()| true)
    }

    /// Leave edit mode without sending anything.
    pub fn cancel_edit(&mut self) -> bool {
        let was_editing = self.state.edit != EditSession::Display;
        self.state.edit = EditSession::Display;
        was_editing
    }

    fn send(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }

    fn load(&mut self) -> Result<(), ApiError> {
        let req = self.client.build_list_todos();
        let todos = self
            .send(req)
            .and_then(|resp| self.client.parse_list_todos(resp))?;
        debug!(count = todos.len(), "reloaded todos");
        self.state.todos = todos;
        Ok(())
    }

    /// Reload regardless of how the mutation went; the mutation's own error
    /// takes precedence over a reload error.
    fn finish_mutation(&mut self, outcome: Result<(), ApiError>) -> Result<(), ApiError> {
        let loaded = self.load();
        self.settle(outcome.and(loaded))
    }

    fn settle(&mut self, outcome: Result<(), ApiError>) -> Result<(), ApiError> {
        match &outcome {
            Ok(()) => self.state.last_error = None,
            Err(e) => {
                warn!(error = %e, "todo request failed");
                self.state.last_error = Some(e.clone());
            }
        }
        outcome
    }
}
