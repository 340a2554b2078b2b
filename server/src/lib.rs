//! HTTP surface for the todo service.
//!
//! # Design
//! - Handlers are thin: decode, call `TodoService`, pick the status code.
//! - The service lives in `AppState` behind an `Arc`; every request shares
//!   the one instance built at startup.
//! - Decoding failures are turned into 422s by the extractors in `extract`
//!   before any handler code runs.

pub mod config;
pub mod error;
pub mod extract;
pub mod index;
pub mod logging;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use maud::Markup;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub use todo_core::{StatusMessage, Todo, TodoInput, TodoList, TodoMessage, TodoService};

use crate::config::Settings;
use crate::error::ApiError;
use crate::extract::{Json, Path};

#[derive(Debug, Clone)]
pub struct AppState {
    pub todos: Arc<TodoService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Fresh state with the sample records.
    pub fn new(settings: Settings) -> Self {
        Self::with_service(settings, TodoService::with_sample_data())
    }

    pub fn with_service(settings: Settings, service: TodoService) -> Self {
        Self {
            todos: Arc::new(service),
            settings: Arc::new(settings),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

pub fn app(state: AppState) -> Router {
    let resources = state.settings.resources_dir.clone();
    Router::new()
        .route("/", get(index))
        .route("/status", get(status))
        .route("/todos", get(list_todos))
        .route("/todo", post(create_todo))
        .route("/todo/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .nest_service("/styles", ServeDir::new(resources.join("styles")))
        .nest_service("/scripts", ServeDir::new(resources.join("scripts")))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

/// Like `run`, but returns once `shutdown` resolves and in-flight requests
/// have finished.
pub async fn run_until<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn index(State(state): State<AppState>) -> Markup {
    let list = state.todos.list().await;
    index::page(&state.settings, &list)
}

async fn status() -> Json<StatusMessage> {
    Json(StatusMessage::ok())
}

async fn list_todos(State(state): State<AppState>) -> Json<TodoList> {
    Json(state.todos.list().await)
}

async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<TodoInput>,
) -> Result<(StatusCode, Json<TodoMessage>), ApiError> {
    let created = state.todos.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TodoMessage>, ApiError> {
    Ok(Json(state.todos.get(id).await?))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<TodoInput>,
) -> Result<Json<TodoMessage>, ApiError> {
    Ok(Json(state.todos.update(id, patch).await?))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TodoMessage>, ApiError> {
    Ok(Json(state.todos.delete(id).await?))
}
