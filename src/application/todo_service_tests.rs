#[cfg(test)]
mod tests {
    use super::super::todo_service::{patch_from, TodoError, TodoService, TodoServiceImpl};
    use crate::domain::{repository::TodoRepository, todo::{CreateTodo, Todo, TodoId, TodoPatch, UpdateTodo}};
    use anyhow::Result;
    use async_trait::async_trait;

    #[derive(Clone, Default)]
    struct StubRepo {
        items: std::sync::Arc<std::sync::Mutex<Vec<Todo>>>,
        patches: std::sync::Arc<std::sync::Mutex<Vec<TodoPatch>>>,
    }

    #[async_trait]
    impl TodoRepository for StubRepo {
        async fn create(&self, input: CreateTodo) -> Result<Todo> {
            let mut items = self.items.lock().unwrap();
            let todo = Todo { id: TodoId(items.len() as i64 + 1), title: input.title, done: false };
            items.push(todo.clone());
            Ok(todo)
        }
        async fn get(&self, id: TodoId) -> Result<Option<Todo>> { Ok(self.items.lock().unwrap().iter().find(|t| t.id == id).cloned()) }
        async fn list(&self) -> Result<Vec<Todo>> { Ok(self.items.lock().unwrap().clone()) }
        async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Option<Todo>> {
            self.patches.lock().unwrap().push(patch.clone());
            let mut items = self.items.lock().unwrap();
            let Some(todo) = items.iter_mut().find(|t| t.id == id) else { return Ok(None) };
            todo.apply(patch);
            Ok(Some(todo.clone()))
        }
        async fn delete(&self, id: TodoId) -> Result<bool> {
            let mut items = self.items.lock().unwrap();
            let before = items.len();
            items.retain(|t| t.id != id);
            Ok(items.len() != before)
        }
    }

    struct FailingRepo;

    #[async_trait]
    impl TodoRepository for FailingRepo {
        async fn create(&self, _: CreateTodo) -> Result<Todo> { anyhow::bail!("store offline") }
        async fn get(&self, _: TodoId) -> Result<Option<Todo>> { anyhow::bail!("store offline") }
        async fn list(&self) -> Result<Vec<Todo>> { anyhow::bail!("store offline") }
        async fn update(&self, _: TodoId, _: TodoPatch) -> Result<Option<Todo>> { anyhow::bail!("store offline") }
        async fn delete(&self, _: TodoId) -> Result<bool> { anyhow::bail!("store offline") }
    }

    #[test]
    fn unit_patch_from_drops_empty_title() {
        assert_eq!(patch_from(UpdateTodo { title: String::new(), done: true }), TodoPatch { title: None, done: true });
        assert_eq!(
            patch_from(UpdateTodo { title: "New".into(), done: false }),
            TodoPatch { title: Some("New".into()), done: false }
        );
    }

    #[tokio::test]
    async fn unit_create_and_get() {
        let service = TodoServiceImpl::new(StubRepo::default());
        let created = service.create(CreateTodo { title: "Buy milk".into() }).await.unwrap();
        assert_eq!(created.title, "Buy milk");
        assert!(!created.done);
        let got = service.get(created.id).await.unwrap();
        assert_eq!(got, created);
    }

    #[tokio::test]
    async fn unit_missing_ids_are_not_found() {
        let service = TodoServiceImpl::new(StubRepo::default());
        assert!(matches!(service.get(TodoId(9999)).await, Err(TodoError::NotFound(TodoId(9999)))));
        assert!(matches!(service.update(TodoId(42), UpdateTodo::default()).await, Err(TodoError::NotFound(TodoId(42)))));
        assert!(matches!(service.delete(TodoId(7)).await, Err(TodoError::NotFound(TodoId(7)))));
    }

    #[tokio::test]
    async fn unit_list_tracks_creates_minus_deletes() {
        let service = TodoServiceImpl::new(StubRepo::default());
        for title in ["a", "b", "c", "d"] {
            service.create(CreateTodo { title: title.into() }).await.unwrap();
        }
        service.delete(TodoId(2)).await.unwrap();
        assert!(service.delete(TodoId(2)).await.is_err());
        assert_eq!(service.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn unit_update_with_empty_title_sends_no_title() {
        let repo = StubRepo::default();
        let service = TodoServiceImpl::new(repo.clone());
        let created = service.create(CreateTodo { title: "X".into() }).await.unwrap();
        let updated = service.update(created.id, UpdateTodo { title: String::new(), done: true }).await.unwrap();
        assert_eq!(updated.title, "X");
        assert!(updated.done);
        assert_eq!(*repo.patches.lock().unwrap(), vec![TodoPatch { title: None, done: true }]);
    }

    #[tokio::test]
    async fn unit_repository_errors_propagate() {
        let service = TodoServiceImpl::new(FailingRepo);
        let err = service.list().await.unwrap_err();
        assert!(matches!(err, TodoError::Store(_)));
        assert_eq!(err.to_string(), "store offline");
    }
}
