//! Service tests for todo business rules over the in-memory adapter.

use std::sync::Arc;

use crate::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{Todo, TodoId, TodoStatus},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
    services::{TodoDto, TodoService, TodoServiceError},
};
use async_trait::async_trait;
use mockall::mock;
use rstest::{fixture, rstest};

mock! {
    TodoRepo {}

    #[async_trait]
    impl TodoRepository for TodoRepo {
        async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>>;
        async fn find_by_status(&self, status: TodoStatus) -> TodoRepositoryResult<Vec<Todo>>;
        async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;
        async fn save(&self, todo: Todo) -> TodoRepositoryResult<Todo>;
        async fn delete_by_id(&self, id: TodoId) -> TodoRepositoryResult<()>;
        async fn delete_all(&self) -> TodoRepositoryResult<()>;
    }
}

#[fixture]
fn service() -> TodoService {
    TodoService::new(Arc::new(InMemoryTodoRepository::new()))
}

fn named(name: &str) -> TodoDto {
    TodoDto {
        name: Some(name.to_owned()),
        ..TodoDto::default()
    }
}

async fn create(service: &TodoService, name: &str) -> TodoDto {
    service
        .create_todo(named(name))
        .await
        .expect("creation should succeed")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_forces_active_status_and_ignores_client_fields(service: TodoService) {
    let dto = TodoDto {
        id: Some(TodoId::new(99)),
        name: Some("Buy milk".to_owned()),
        status: Some("COMPLETED".to_owned()),
    };

    let created = service
        .create_todo(dto)
        .await
        .expect("creation should succeed");

    assert_eq!(created.id, Some(TodoId::new(1)));
    assert_eq!(created.name.as_deref(), Some("Buy milk"));
    assert_eq!(created.status.as_deref(), Some("ACTIVE"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_returns_the_created_todo(service: TodoService) {
    let created = create(&service, "Water plants").await;
    let id = created.id.expect("created todo should carry an id");

    let fetched = service.get_todo(id).await.expect("lookup should succeed");

    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_missing_todo_fails_with_not_found(service: TodoService) {
    let result = service.get_todo(TodoId::new(42)).await;
    assert!(matches!(result, Err(TodoServiceError::NotFound)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_without_filter_returns_everything_in_storage_order(service: TodoService) {
    let first = create(&service, "First").await;
    let second = create(&service, "Second").await;

    let listed = service.list_todos(None).await.expect("list should succeed");

    assert_eq!(listed, vec![first, second]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_on_empty_store_returns_an_empty_sequence(service: TodoService) {
    let listed = service.list_todos(None).await.expect("list should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filters_partition_the_full_listing(service: TodoService) {
    let first = create(&service, "First").await;
    let second = create(&service, "Second").await;
    let second_id = second.id.expect("created todo should carry an id");
    service
        .update_todo(
            second_id,
            TodoDto {
                name: second.name.clone(),
                status: Some("COMPLETED".to_owned()),
                ..TodoDto::default()
            },
        )
        .await
        .expect("update should succeed");

    let active = service
        .list_todos(Some("ACTIVE"))
        .await
        .expect("filtered list should succeed");
    let completed = service
        .list_todos(Some("COMPLETED"))
        .await
        .expect("filtered list should succeed");
    let all = service.list_todos(None).await.expect("list should succeed");

    assert_eq!(active.len(), 1);
    assert_eq!(active.first().map(|dto| dto.id), Some(first.id));
    assert_eq!(completed.len(), 1);
    assert_eq!(completed.first().map(|dto| dto.id), Some(Some(second_id)));
    assert_eq!(active.len() + completed.len(), all.len());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_with_unknown_filter_fails_with_invalid_status(service: TodoService) {
    let result = service.list_todos(Some("BOGUS")).await;
    assert!(matches!(result, Err(TodoServiceError::InvalidStatus)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_invalid_status_leaves_the_stored_todo_unchanged(service: TodoService) {
    let created = create(&service, "Buy milk").await;
    let id = created.id.expect("created todo should carry an id");

    let result = service
        .update_todo(
            id,
            TodoDto {
                name: Some("Renamed".to_owned()),
                status: Some("INVALID".to_owned()),
                ..TodoDto::default()
            },
        )
        .await;

    assert!(matches!(result, Err(TodoServiceError::InvalidStatus)));
    let stored = service.get_todo(id).await.expect("lookup should succeed");
    assert_eq!(stored, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_every_field_rather_than_patching(service: TodoService) {
    let created = create(&service, "Buy milk").await;
    let id = created.id.expect("created todo should carry an id");

    // A body without name or status is applied verbatim: the name becomes
    // empty and the status is cleared.
    service
        .update_todo(id, TodoDto::default())
        .await
        .expect("update should succeed");

    let stored = service.get_todo(id).await.expect("lookup should succeed");
    assert_eq!(stored.name.as_deref(), Some(""));
    assert_eq!(stored.status, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_allows_reactivating_a_completed_todo(service: TodoService) {
    let created = create(&service, "Buy milk").await;
    let id = created.id.expect("created todo should carry an id");

    for status in ["COMPLETED", "ACTIVE"] {
        service
            .update_todo(
                id,
                TodoDto {
                    name: created.name.clone(),
                    status: Some(status.to_owned()),
                    ..TodoDto::default()
                },
            )
            .await
            .expect("update should succeed");
        let stored = service.get_todo(id).await.expect("lookup should succeed");
        assert_eq!(stored.status.as_deref(), Some(status));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_todo_fails_with_not_found(service: TodoService) {
    let result = service.update_todo(TodoId::new(42), named("Ghost")).await;
    assert!(matches!(result, Err(TodoServiceError::NotFound)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_todo(service: TodoService) {
    let created = create(&service, "Buy milk").await;
    let id = created.id.expect("created todo should carry an id");

    service.delete_todo(id).await.expect("delete should succeed");

    let result = service.get_todo(id).await;
    assert!(matches!(result, Err(TodoServiceError::NotFound)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_todo_fails_with_not_found(service: TodoService) {
    let result = service.delete_todo(TodoId::new(42)).await;
    assert!(matches!(result, Err(TodoServiceError::NotFound)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_all_purges_the_store(service: TodoService) {
    create(&service, "First").await;
    create(&service, "Second").await;

    service
        .delete_all_todos()
        .await
        .expect("purge should succeed");

    let listed = service.list_todos(None).await.expect("list should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_without_a_store_assigned_id_fails_with_create_failed() {
    let mut repository = MockTodoRepo::new();
    // A save that returns the entity without assigning an identifier is not a
    // usable creation result.
    repository.expect_save().returning(Ok);
    let service = TodoService::new(Arc::new(repository));

    let result = service.create_todo(named("Buy milk")).await;

    assert!(matches!(result, Err(TodoServiceError::CreateFailed)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repository_failures_surface_as_repository_errors() {
    let mut repository = MockTodoRepo::new();
    repository.expect_find_all().returning(|| {
        Err(TodoRepositoryError::persistence(std::io::Error::other(
            "connection refused",
        )))
    });
    let service = TodoService::new(Arc::new(repository));

    let result = service.list_todos(None).await;

    assert!(matches!(result, Err(TodoServiceError::Repository(_))));
}
