//! Integration tests for the SQLite repository against an in-memory database.

use database::{NewTask, SqliteTaskRepository, TaskRepository, UpdateTask};

async fn repo() -> SqliteTaskRepository {
    let repo = SqliteTaskRepository::new(":memory:", 1).expect("failed to build repository");
    repo.migrate().await.expect("migration failed");
    repo
}

#[tokio::test]
async fn health_check_succeeds_after_migrate() {
    let repo = repo().await;
    assert!(repo.health_check().await.is_ok());
}

#[tokio::test]
async fn create_assigns_id_and_returns_document() {
    let repo = repo().await;

    let created = repo
        .create(NewTask::new("Write report", Some("draft".to_string())))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "Write report");
    assert_eq!(created.description.as_deref(), Some("draft"));
    assert!(created.created_at <= chrono::Utc::now());
}

#[tokio::test]
async fn create_without_description() {
    let repo = repo().await;

    let created = repo.create(NewTask::new("Write report", None)).await.unwrap();
    assert!(created.description.is_none());

    // Round-trips through the store as absent, not empty
    let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert!(fetched.description.is_none());
}

#[tokio::test]
async fn list_returns_all_tasks_in_id_order() {
    let repo = repo().await;
    assert!(repo.list().await.unwrap().is_empty());

    let first = repo.create(NewTask::new("First task", None)).await.unwrap();
    let second = repo.create(NewTask::new("Second task", None)).await.unwrap();

    let all = repo.list().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);

    // Reading is idempotent
    assert_eq!(repo.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn find_by_id_absence_is_none_not_error() {
    let repo = repo().await;
    let missing = repo.find_by_id(99999).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn update_by_id_applies_partial_fields() {
    let repo = repo().await;
    let created = repo
        .create(NewTask::new("Write report", Some("draft".to_string())))
        .await
        .unwrap();

    // Description-only update leaves the name unchanged
    let updated = repo
        .update_by_id(
            created.id,
            UpdateTask {
                name: None,
                description: Some("final".to_string()),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Write report");
    assert_eq!(updated.description.as_deref(), Some("final"));

    // Name-only update leaves the description unchanged
    let updated = repo
        .update_by_id(
            created.id,
            UpdateTask {
                name: Some("Write the report".to_string()),
                description: None,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Write the report");
    assert_eq!(updated.description.as_deref(), Some("final"));
}

#[tokio::test]
async fn update_by_id_with_empty_payload_returns_current_row() {
    let repo = repo().await;
    let created = repo.create(NewTask::new("Write report", None)).await.unwrap();

    let unchanged = repo
        .update_by_id(created.id, UpdateTask::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, repo.find_by_id(created.id).await.unwrap().unwrap());
}

#[tokio::test]
async fn update_by_id_absence_is_none_not_error() {
    let repo = repo().await;
    let missing = repo
        .update_by_id(
            424242,
            UpdateTask {
                name: Some("Write report".to_string()),
                description: None,
            },
        )
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn delete_by_id_returns_deleted_document() {
    let repo = repo().await;
    let created = repo
        .create(NewTask::new("Write report", Some("draft".to_string())))
        .await
        .unwrap();

    let deleted = repo.delete_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(deleted, created);

    // Subsequent lookup sees absence
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_by_id_absence_is_none_not_error() {
    let repo = repo().await;
    let missing = repo.delete_by_id(7).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn file_backed_repository_persists_across_pools() {
    let dir = tempfile::TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("tasks.db").display());

    let created = {
        let repo = SqliteTaskRepository::new(&url, 5).unwrap();
        repo.migrate().await.unwrap();
        repo.create(NewTask::new("Write report", None)).await.unwrap()
    };

    let repo = SqliteTaskRepository::new(&url, 5).unwrap();
    repo.migrate().await.unwrap();
    let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Write report");
}
