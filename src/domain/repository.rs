use async_trait::async_trait;
use super::todo::{Todo, TodoId, CreateTodo, TodoPatch};

/// Ordered todo storage. Every lookup is by exact id; `list` preserves insertion order.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn create(&self, input: CreateTodo) -> anyhow::Result<Todo>;
    async fn get(&self, id: TodoId) -> anyhow::Result<Option<Todo>>;
    async fn list(&self) -> anyhow::Result<Vec<Todo>>;
    async fn update(&self, id: TodoId, patch: TodoPatch) -> anyhow::Result<Option<Todo>>;
    async fn delete(&self, id: TodoId) -> anyhow::Result<bool>;
}
