//! The todo collection service.
//!
//! # Design
//! All state (the ordered records, the list title and the id counter) sits
//! behind a single `RwLock`. Reads share the lock; every mutation holds the
//! write guard for its whole find-then-change sequence, so concurrent
//! requests observe each operation either fully applied or not at all.
//!
//! Ids come from a counter that only moves forward. Deleting a todo never
//! frees its id for reuse.

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::TodoError;
use crate::types::{Todo, TodoInput, TodoList, TodoMessage};

const SAMPLE_LIST_TITLE: &str = "Sample TODO List";

#[derive(Debug)]
struct Collection {
    title: String,
    todos: Vec<Todo>,
    next_id: u64,
}

impl Collection {
    fn position(&self, id: i64) -> Option<usize> {
        let id = u64::try_from(id).ok()?;
        self.todos.iter().position(|todo| todo.id == id)
    }
}

/// In-memory todo collection with serialized mutations.
#[derive(Debug)]
pub struct TodoService {
    inner: RwLock<Collection>,
}

impl Default for TodoService {
    fn default() -> Self {
        Self::with_sample_data()
    }
}

impl TodoService {
    /// Build a service from an explicit list title and seed records.
    ///
    /// The counter starts just past the largest seeded id.
    pub fn new(title: impl Into<String>, seed: Vec<Todo>) -> Self {
        let next_id = seed.iter().map(|todo| todo.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Collection {
                title: title.into(),
                todos: seed,
                next_id,
            }),
        }
    }

    /// The two fixed records every fresh process starts with.
    pub fn with_sample_data() -> Self {
        Self::new(
            SAMPLE_LIST_TITLE,
            vec![
                Todo {
                    id: 1,
                    title: "Setup Python".to_string(),
                    description: "Get your Python environment ready".to_string(),
                    is_done: true,
                },
                Todo {
                    id: 2,
                    title: "Build a Microservice".to_string(),
                    description: "something about building a microservice".to_string(),
                    is_done: false,
                },
            ],
        )
    }

    pub async fn list(&self) -> TodoList {
        let collection = self.inner.read().await;
        TodoList {
            title: collection.title.clone(),
            todos: collection.todos.clone(),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn create(&self, input: TodoInput) -> Result<TodoMessage, TodoError> {
        if !input.is_unassigned() {
            warn!(id = ?input.id, "create rejected: id already set");
            return Err(TodoError::id_must_be_unassigned());
        }

        let mut collection = self.inner.write().await;
        let id = collection.next_id;
        collection.next_id += 1;

        let todo = Todo {
            id,
            title: input.title,
            description: input.description.unwrap_or_default(),
            is_done: input.is_done.unwrap_or_default(),
        };
        collection.todos.push(todo.clone());
        debug!(id, title = %todo.title, "created todo");

        Ok(TodoMessage::new(todo, format!("Added new todo with id {id}")))
    }

    pub async fn get(&self, id: i64) -> Result<TodoMessage, TodoError> {
        if id < 1 {
            warn!(id, "get rejected: id not positive");
            return Err(TodoError::id_must_be_positive());
        }

        let collection = self.inner.read().await;
        let Some(index) = collection.position(id) else {
            debug!(id, "get: todo not found");
            return Err(TodoError::NotFound(id));
        };
        Ok(TodoMessage::new(collection.todos[index].clone(), "OK"))
    }

    /// Apply `patch` to the todo at `id`.
    ///
    /// `title` is always written. `description` and `is_done` are written
    /// only when present in the patch. The stored id never changes.
    pub async fn update(&self, id: i64, patch: TodoInput) -> Result<TodoMessage, TodoError> {
        if let Some(body_id) = patch.id.filter(|body_id| *body_id != 0) {
            if body_id != id {
                warn!(id, body_id, "update rejected: id mismatch");
                return Err(TodoError::id_mismatch(id, body_id));
            }
        }

        let mut collection = self.inner.write().await;
        let Some(index) = collection.position(id) else {
            debug!(id, "update: todo not found");
            return Err(TodoError::NotFound(id));
        };
        let todo = &mut collection.todos[index];

        todo.title = patch.title;
        if let Some(description) = patch.description {
            todo.description = description;
        }
        if let Some(is_done) = patch.is_done {
            todo.is_done = is_done;
        }
        debug!(id, "updated todo");

        Ok(TodoMessage::new(todo.clone(), format!("OK, updated Todo {id}")))
    }

    pub async fn delete(&self, id: i64) -> Result<TodoMessage, TodoError> {
        let mut collection = self.inner.write().await;
        let Some(index) = collection.position(id) else {
            debug!(id, "delete: todo not found");
            return Err(TodoError::NotFound(id));
        };
        let removed = collection.todos.remove(index);
        debug!(id, "removed todo");

        Ok(TodoMessage::new(removed, format!("Removed Todo {id}")))
    }
}
