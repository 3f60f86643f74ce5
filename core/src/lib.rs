//! Client core for a single-page todo list backed by `/api/Todo`.
//!
//! # Overview
//! The core builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO). A host-provided
//! [`Transport`] executes them. On top of the client sits [`TodoView`], which
//! owns the list state, runs the four mutations, and reloads after each one,
//! and [`render`], a pure function from state to a [`Screen`].
//!
//! # Design
//! - `TodoClient` is stateless; it holds only the collection URL.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - The edit session is a tagged enum, so "editing id" and "edit buffer"
//!   cannot disagree.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod render;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use render::{render, Row, Screen};
pub use types::{CreateTodo, TodoId, TodoItem, UpdateTodo};
pub use view::{EditSession, TodoView, ViewState};
