//! Domain DTOs for the `/api/Todo` resource.
//!
//! # Design
//! These types mirror the server schema but are defined independently of the
//! mock-server crate. Integration tests catch any schema drift between the
//! two. Field names are camelCase on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a todo item. Opaque to the client; only
/// compared for equality and formatted into request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single todo item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub is_complete: bool,
}

/// Payload for `POST /api/Todo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub is_complete: bool,
}

/// Payload for `PUT /api/Todo/{id}`. Only the fields present in the JSON are
/// sent; the toggle and rename operations each use their own subset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TodoId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
}

impl UpdateTodo {
    /// `{"isComplete": value}`
    pub fn completion(value: bool) -> Self {
        Self {
            is_complete: Some(value),
            ..Self::default()
        }
    }

    /// `{"id": id, "title": title}`. Leaves the completion flag out.
    pub fn rename(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            title: Some(title.into()),
            is_complete: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_item_uses_camel_case() {
        let item = TodoItem {
            id: TodoId(7),
            title: "milk".to_string(),
            is_complete: true,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "title": "milk", "isComplete": true}));
    }

    #[test]
    fn completion_update_carries_only_the_flag() {
        let json = serde_json::to_value(UpdateTodo::completion(false)).unwrap();
        assert_eq!(json, serde_json::json!({"isComplete": false}));
    }

    #[test]
    fn rename_update_omits_the_flag() {
        let json = serde_json::to_value(UpdateTodo::rename(TodoId(3), "bread")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "title": "bread"}));
    }
}
