mod categories;
mod contact_messages;
mod courses;
mod instructors;
pub mod seed;

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::storage::{StorageBackend, StorageError};

pub(crate) const COURSES_KEY: &str = "courses";
pub(crate) const INSTRUCTORS_KEY: &str = "instructors";
pub(crate) const CATEGORIES_KEY: &str = "categories";
pub(crate) const MESSAGES_KEY: &str = "contact_messages";

/// CRUD access and derived read views over the four catalog collections.
///
/// Every operation reloads the authoritative collection from the backing
/// medium before answering and flushes the whole collection back before
/// returning, so a second store over the same medium sees changes on its
/// next call. There is no locking; the last flush wins.
pub struct DataStore {
    backend: Arc<dyn StorageBackend>,
    course_ids: IdAllocator,
    instructor_ids: IdAllocator,
    category_ids: IdAllocator,
    message_ids: IdAllocator,
}

impl DataStore {
    pub async fn open(backend: Arc<dyn StorageBackend>) -> Self {
        let store = Self {
            backend,
            course_ids: IdAllocator::default(),
            instructor_ids: IdAllocator::default(),
            category_ids: IdAllocator::default(),
            message_ids: IdAllocator::default(),
        };

        // Seeded ids count as taken even when the medium holds a smaller
        // set, so admin-created records never collide with them.
        store
            .course_ids
            .observe(max_id(seed::default_courses().iter().map(|c| c.id)));
        store
            .instructor_ids
            .observe(max_id(seed::default_instructors().iter().map(|i| i.id)));
        store
            .category_ids
            .observe(max_id(seed::default_categories().iter().map(|c| c.id)));
        store
            .message_ids
            .observe(max_id(seed::default_contact_messages().iter().map(|m| m.id)));

        store
            .course_ids
            .observe(max_id(store.load_courses().await.iter().map(|c| c.id)));
        store
            .instructor_ids
            .observe(max_id(store.load_instructors().await.iter().map(|i| i.id)));
        store
            .category_ids
            .observe(max_id(store.load_categories().await.iter().map(|c| c.id)));
        store
            .message_ids
            .observe(max_id(store.load_messages().await.iter().map(|m| m.id)));

        store
    }

    /// Probes the backing medium. Degraded reads never surface an error, so
    /// this is the one place a broken medium becomes visible to callers.
    pub async fn ping(&self) -> Result<(), StorageError> {
        self.backend.load(COURSES_KEY).await.map(|_| ())
    }

    /// Rewrites every collection from the built-in defaults.
    pub async fn reset_to_defaults(&self) {
        self.persist_collection(COURSES_KEY, &seed::default_courses())
            .await;
        self.persist_collection(INSTRUCTORS_KEY, &seed::default_instructors())
            .await;
        self.persist_collection(CATEGORIES_KEY, &seed::default_categories())
            .await;
        self.persist_collection(MESSAGES_KEY, &seed::default_contact_messages())
            .await;
    }

    /// Rewrites every collection empty. Allocated ids stay retired.
    pub async fn clear_all(&self) {
        self.persist_collection::<crate::models::Course>(COURSES_KEY, &[])
            .await;
        self.persist_collection::<crate::models::Instructor>(INSTRUCTORS_KEY, &[])
            .await;
        self.persist_collection::<crate::models::Category>(CATEGORIES_KEY, &[])
            .await;
        self.persist_collection::<crate::models::ContactMessage>(MESSAGES_KEY, &[])
            .await;
    }

    pub(crate) async fn load_collection<T>(&self, key: &str, seed: fn() -> Vec<T>) -> Vec<T>
    where
        T: DeserializeOwned,
    {
        match self.backend.load(key).await {
            Ok(Some(document)) => match serde_json::from_str(&document) {
                Ok(items) => items,
                Err(err) => {
                    warn!(key, %err, "stored document is not parseable, serving defaults");
                    seed()
                }
            },
            Ok(None) => seed(),
            Err(err) => {
                warn!(key, %err, "storage backend unavailable, serving defaults");
                seed()
            }
        }
    }

    /// Full flush of one collection. A failed flush is logged and dropped;
    /// readers keep seeing the previous document.
    pub(crate) async fn persist_collection<T>(&self, key: &str, items: &[T])
    where
        T: Serialize,
    {
        let document = match serde_json::to_string(items) {
            Ok(document) => document,
            Err(err) => {
                error!(key, %err, "failed to serialize collection, write dropped");
                return;
            }
        };
        if let Err(err) = self.backend.store(key, &document).await {
            error!(key, %err, "failed to flush collection, write dropped");
        }
    }

    pub(crate) fn next_course_id(&self, existing_max: i64) -> i64 {
        self.course_ids.next(existing_max)
    }

    pub(crate) fn next_instructor_id(&self, existing_max: i64) -> i64 {
        self.instructor_ids.next(existing_max)
    }

    pub(crate) fn next_category_id(&self, existing_max: i64) -> i64 {
        self.category_ids.next(existing_max)
    }

    pub(crate) fn next_message_id(&self, existing_max: i64) -> i64 {
        self.message_ids.next(existing_max)
    }
}

/// Monotonic per-collection id source. The watermark only ever grows, so an
/// id freed by deletion is never handed out again for the life of the store.
#[derive(Default)]
struct IdAllocator {
    watermark: AtomicI64,
}

impl IdAllocator {
    fn observe(&self, id: i64) {
        self.watermark.fetch_max(id, Ordering::Relaxed);
    }

    fn next(&self, existing_max: i64) -> i64 {
        self.watermark.fetch_max(existing_max, Ordering::Relaxed);
        self.watermark.fetch_add(1, Ordering::Relaxed) + 1
    }
}

pub(crate) fn max_id<I>(ids: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    ids.into_iter().max().unwrap_or(0)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use super::DataStore;
    use crate::storage::MemoryStorage;

    pub(crate) async fn memory_store() -> DataStore {
        DataStore::open(Arc::new(MemoryStorage::new())).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::test_support::memory_store;
    use super::*;
    use crate::models::NewCourseRequest;
    use crate::storage::MemoryStorage;

    #[tokio::test]
    async fn corrupt_document_falls_back_to_defaults() {
        let backend = Arc::new(MemoryStorage::new());
        backend
            .store(COURSES_KEY, "{not json")
            .await
            .expect("store");

        let store = DataStore::open(backend).await;
        let courses = store.list_courses().await;
        assert_eq!(courses.len(), seed::default_courses().len());
    }

    #[tokio::test]
    async fn reset_rewrites_collections_from_defaults() {
        let store = memory_store().await;
        store.clear_all().await;
        assert!(store.list_courses().await.is_empty());
        assert!(store.list_categories().await.is_empty());

        store.reset_to_defaults().await;
        assert_eq!(store.list_courses().await.len(), 4);
        assert_eq!(store.list_instructors().await.len(), 4);
        assert_eq!(store.list_categories().await.len(), 2);
        assert_eq!(store.list_messages().await.len(), 2);
    }

    #[tokio::test]
    async fn ids_stay_clear_of_seeds_after_clear() {
        let store = memory_store().await;
        store.clear_all().await;

        let course = store
            .add_course(NewCourseRequest {
                title: "Fresh".to_string(),
                ..NewCourseRequest::default()
            })
            .await;
        // Seeded courses go up to id 4 even though the collection is empty.
        assert!(course.id > 4);
    }
}
