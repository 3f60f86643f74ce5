//! In-memory stand-in for the `/api/Todo` backend.
//!
//! Ids are assigned sequentially from 1 and listing is in ascending id order.
//! `PUT` applies only the fields present in the body, so a rename keeps the
//! completion flag and a toggle keeps the title.

use std::{collections::BTreeMap, future::Future, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub is_complete: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub is_complete: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub is_complete: Option<bool>,
}

#[derive(Debug)]
pub struct Store {
    todos: BTreeMap<i64, Todo>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            todos: BTreeMap::new(),
            next_id: 1,
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/Todo", get(list_todos).post(create_todo))
        .route("/api/Todo/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, std::future::pending()).await
}

/// Serve until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "todo mock listening");
    }
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    debug!(count = store.todos.len(), "list");
    Json(store.todos.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let mut store = db.write().await;
    let todo = Todo {
        id: store.next_id,
        title: input.title,
        is_complete: input.is_complete,
    };
    store.next_id += 1;
    store.todos.insert(todo.id, todo.clone());
    info!(id = todo.id, "created");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, StatusCode> {
    let store = db.read().await;
    store.todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    if input.id.is_some_and(|body_id| body_id != id) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(is_complete) = input.is_complete {
        todo.is_complete = is_complete;
    }
    info!(id, "updated");
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let removed = store.todos.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    info!(id = removed.id, "deleted");
    Ok(StatusCode::NO_CONTENT)
}
