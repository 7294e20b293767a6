use chrono::Utc;

use crate::models::{Category, NewCategoryRequest, UpdateCategoryRequest};

use super::{CATEGORIES_KEY, COURSES_KEY, DataStore, max_id, seed};

/// Assigned to orphaned courses when the last category is deleted.
const FALLBACK_CATEGORY: &str = "General";

impl DataStore {
    pub async fn list_categories(&self) -> Vec<Category> {
        self.load_categories().await
    }

    pub async fn get_category(&self, id: i64) -> Option<Category> {
        self.load_categories()
            .await
            .into_iter()
            .find(|category| category.id == id)
    }

    pub async fn add_category(&self, req: NewCategoryRequest) -> Category {
        let mut categories = self.load_categories().await;
        let id = self.next_category_id(max_id(categories.iter().map(|c| c.id)));

        let category = Category {
            id,
            name: req.name,
            created_at: Some(Utc::now()),
        };

        categories.push(category.clone());
        self.persist_collection(CATEGORIES_KEY, &categories).await;
        category
    }

    pub async fn update_category(
        &self,
        id: i64,
        req: UpdateCategoryRequest,
    ) -> Option<Category> {
        let mut categories = self.load_categories().await;
        let category = categories.iter_mut().find(|c| c.id == id)?;

        if let Some(name) = req.name {
            category.name = name;
        }

        let updated = category.clone();
        self.persist_collection(CATEGORIES_KEY, &categories).await;
        Some(updated)
    }

    /// Removes the category and reassigns every course that referenced it by
    /// name to the first remaining category, or to "General" when none
    /// remain. Returns the deleted record.
    pub async fn delete_category(&self, id: i64) -> Option<Category> {
        let mut categories = self.load_categories().await;
        let index = categories.iter().position(|c| c.id == id)?;
        let deleted = categories.remove(index);

        let fallback = categories
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());

        let mut courses = self.load_courses().await;
        let mut reassigned = false;
        for course in &mut courses {
            if course.category == deleted.name {
                course.category = fallback.clone();
                reassigned = true;
            }
        }

        self.persist_collection(CATEGORIES_KEY, &categories).await;
        if reassigned {
            self.persist_collection(COURSES_KEY, &courses).await;
        }

        Some(deleted)
    }

    pub(crate) async fn load_categories(&self) -> Vec<Category> {
        self.load_collection(CATEGORIES_KEY, seed::default_categories)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::test_support::memory_store;
    use super::super::{CATEGORIES_KEY, COURSES_KEY, DataStore};
    use crate::models::{NewCategoryRequest, UpdateCategoryRequest};
    use crate::storage::{MemoryStorage, StorageBackend};

    #[tokio::test]
    async fn created_category_is_stamped_and_listed() {
        let store = memory_store().await;

        let created = store
            .add_category(NewCategoryRequest {
                name: "Business".to_string(),
            })
            .await;
        assert_eq!(created.id, 3);
        assert!(created.created_at.is_some());

        let listed = store.get_category(3).await.expect("category exists");
        assert_eq!(listed, created);
    }

    #[tokio::test]
    async fn rename_keeps_id_and_creation_stamp() {
        let store = memory_store().await;

        let updated = store
            .update_category(
                1,
                UpdateCategoryRequest {
                    name: Some("Technology".to_string()),
                },
            )
            .await
            .expect("category exists");
        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Technology");
        assert!(updated.created_at.is_none());
    }

    #[tokio::test]
    async fn deleting_a_category_reassigns_its_courses() {
        let store = memory_store().await;

        // Seeds: "IT" first, then "Media" with three courses.
        let deleted = store.delete_category(2).await.expect("category exists");
        assert_eq!(deleted.name, "Media");

        let courses = store.list_courses().await;
        let media_count = courses
            .iter()
            .filter(|v| v.course.category == "Media")
            .count();
        assert_eq!(media_count, 0);
        let it_count = courses.iter().filter(|v| v.course.category == "IT").count();
        assert_eq!(it_count, 4);
    }

    #[tokio::test]
    async fn deleting_the_last_category_falls_back_to_general() {
        let backend = Arc::new(MemoryStorage::new());
        backend
            .store(CATEGORIES_KEY, r#"[{"id": 1, "name": "IT"}]"#)
            .await
            .expect("store");
        backend
            .store(
                COURSES_KEY,
                r#"[{
                    "id": 1,
                    "title": "Networking",
                    "description": "Intro to networks",
                    "category": "IT",
                    "duration": "1 month",
                    "price": "10,000 PKR",
                    "instructorId": null,
                    "image": ""
                }]"#,
            )
            .await
            .expect("store");

        let store = DataStore::open(backend).await;
        let deleted = store.delete_category(1).await.expect("category exists");
        assert_eq!(deleted.name, "IT");

        assert!(store.list_categories().await.is_empty());
        let course = store.get_course(1).await.expect("course exists");
        assert_eq!(course.course.category, "General");
    }

    #[tokio::test]
    async fn delete_of_missing_category_is_not_found() {
        let store = memory_store().await;
        assert!(store.delete_category(99).await.is_none());
    }
}
