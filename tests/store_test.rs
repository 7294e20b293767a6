use std::sync::Arc;

use skillslab_backend::models::{NewCategoryRequest, NewCourseRequest};
use skillslab_backend::storage::JsonFileStorage;
use skillslab_backend::store::DataStore;

async fn file_store(dir: &std::path::Path) -> DataStore {
    DataStore::open(Arc::new(JsonFileStorage::new(dir))).await
}

#[tokio::test]
async fn writes_survive_a_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");

    let store = file_store(dir.path()).await;
    let created = store
        .add_course(NewCourseRequest {
            title: "SEO Fundamentals".to_string(),
            description: "Search optimization basics".to_string(),
            category: "IT".to_string(),
            duration: "1 month".to_string(),
            price: "12,000 PKR".to_string(),
            ..NewCourseRequest::default()
        })
        .await;
    assert_eq!(created.id, 5);
    drop(store);

    let reopened = file_store(dir.path()).await;
    let fetched = reopened.get_course(5).await.expect("course persisted");
    assert_eq!(fetched.course.title, "SEO Fundamentals");
    assert_eq!(reopened.list_courses().await.len(), 5);
}

#[tokio::test]
async fn deletions_survive_a_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");

    let store = file_store(dir.path()).await;
    assert!(store.delete_course(1).await);
    drop(store);

    let reopened = file_store(dir.path()).await;
    assert!(reopened.get_course(1).await.is_none());
    assert_eq!(reopened.list_courses().await.len(), 3);
}

#[tokio::test]
async fn two_stores_see_each_others_writes() {
    let dir = tempfile::tempdir().expect("tempdir");

    let left = file_store(dir.path()).await;
    let right = file_store(dir.path()).await;

    let category = left
        .add_category(NewCategoryRequest {
            name: "Business".to_string(),
        })
        .await;

    // No refresh call; the next read reloads the shared medium.
    let seen = right.get_category(category.id).await.expect("visible");
    assert_eq!(seen.name, "Business");

    // Ids allocated by either store clear what the other flushed.
    let a = right
        .add_course(NewCourseRequest {
            title: "Left-behind".to_string(),
            ..NewCourseRequest::default()
        })
        .await;
    let b = left
        .add_course(NewCourseRequest {
            title: "Catch-up".to_string(),
            ..NewCourseRequest::default()
        })
        .await;
    assert!(b.id > a.id);
}

#[tokio::test]
async fn corrupt_document_degrades_to_defaults_and_heals_on_write() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(dir.path()).expect("dir");
    std::fs::write(dir.path().join("courses.json"), "{definitely not json")
        .expect("write garbage");

    let store = file_store(dir.path()).await;
    assert_eq!(store.list_courses().await.len(), 4);

    // The first successful flush replaces the broken document.
    store
        .add_course(NewCourseRequest {
            title: "Recovery".to_string(),
            ..NewCourseRequest::default()
        })
        .await;

    let reopened = file_store(dir.path()).await;
    assert_eq!(reopened.list_courses().await.len(), 5);
}
