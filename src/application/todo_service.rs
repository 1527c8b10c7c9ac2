use async_trait::async_trait;
use thiserror::Error;

use crate::domain::repository::TodoRepository;
use crate::domain::todo::{CreateTodo, Todo, TodoId, TodoPatch, UpdateTodo};

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("todo {0} not found")]
    NotFound(TodoId),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub type TodoResult<T> = Result<T, TodoError>;

/// Todo use cases. Missing ids surface as [`TodoError::NotFound`] rather than empty results.
#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn create(&self, input: CreateTodo) -> TodoResult<Todo>;
    async fn get(&self, id: TodoId) -> TodoResult<Todo>;
    async fn list(&self) -> TodoResult<Vec<Todo>>;
    async fn update(&self, id: TodoId, input: UpdateTodo) -> TodoResult<Todo>;
    async fn delete(&self, id: TodoId) -> TodoResult<()>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

/// An empty title in an update request means "keep the stored title"; `done` always applies.
pub fn patch_from(input: UpdateTodo) -> TodoPatch {
    TodoPatch {
        title: Some(input.title).filter(|t| !t.is_empty()),
        done: input.done,
    }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn create(&self, input: CreateTodo) -> TodoResult<Todo> {
        let todo = self.repo.create(input).await?;
        tracing::info!(id = %todo.id, "todo added");
        Ok(todo)
    }

    async fn get(&self, id: TodoId) -> TodoResult<Todo> {
        self.repo.get(id).await?.ok_or(TodoError::NotFound(id))
    }

    async fn list(&self) -> TodoResult<Vec<Todo>> { Ok(self.repo.list().await?) }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> TodoResult<Todo> {
        let patch = patch_from(input);
        let keeps_title = patch.title.is_none();
        let todo = self.repo.update(id, patch).await?.ok_or(TodoError::NotFound(id))?;
        tracing::info!(%id, done = todo.done, keeps_title, "todo updated");
        Ok(todo)
    }

    async fn delete(&self, id: TodoId) -> TodoResult<()> {
        if self.repo.delete(id).await? {
            tracing::info!(%id, "todo deleted");
            Ok(())
        } else {
            Err(TodoError::NotFound(id))
        }
    }
}
