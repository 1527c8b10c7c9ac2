use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    repository::TodoRepository,
    todo::{CreateTodo, Todo, TodoId, TodoPatch},
};

/// Process-local todo store. One lock guards the whole sequence, so id assignment
/// and append happen as a single step.
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    items: Arc<Mutex<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, input: CreateTodo) -> Result<Todo> {
        let mut items = self.items.lock().await;
        // Next id is the current length plus one; it can repeat a surviving id after a delete.
        let id = TodoId(items.len() as i64 + 1);
        let todo = Todo { id, title: input.title, done: false };
        items.push(todo.clone());
        tracing::debug!(%id, count = items.len(), "todo created");
        Ok(todo)
    }

    async fn get(&self, id: TodoId) -> Result<Option<Todo>> {
        let items = self.items.lock().await;
        Ok(items.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        Ok(self.items.lock().await.clone())
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Option<Todo>> {
        let mut items = self.items.lock().await;
        let Some(todo) = items.iter_mut().find(|t| t.id == id) else { return Ok(None) };
        todo.apply(patch);
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: TodoId) -> Result<bool> {
        let mut items = self.items.lock().await;
        match items.iter().position(|t| t.id == id) {
            Some(index) => {
                items.remove(index);
                tracing::debug!(%id, count = items.len(), "todo deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
