use crate::models::{Course, CourseView, Instructor, NewCourseRequest, UpdateCourseRequest};

use super::{COURSES_KEY, DataStore, max_id, seed};

impl DataStore {
    pub async fn list_courses(&self) -> Vec<CourseView> {
        let courses = self.load_courses().await;
        let instructors = self.load_instructors().await;
        courses
            .into_iter()
            .map(|course| with_instructor(course, &instructors))
            .collect()
    }

    pub async fn list_courses_by_category(&self, category: &str) -> Vec<CourseView> {
        self.list_courses()
            .await
            .into_iter()
            .filter(|view| view.course.category == category)
            .collect()
    }

    pub async fn get_course(&self, id: i64) -> Option<CourseView> {
        let courses = self.load_courses().await;
        let instructors = self.load_instructors().await;
        courses
            .into_iter()
            .find(|course| course.id == id)
            .map(|course| with_instructor(course, &instructors))
    }

    pub async fn add_course(&self, req: NewCourseRequest) -> Course {
        let mut courses = self.load_courses().await;
        let id = self.next_course_id(max_id(courses.iter().map(|c| c.id)));

        let course = Course {
            id,
            title: req.title,
            description: req.description,
            category: req.category,
            duration: req.duration,
            price: req.price,
            instructor_id: req.instructor_id,
            image: req.image,
            pdf_link: req.pdf_link,
            learning_outcomes: req.learning_outcomes,
            course_structure: req.course_structure,
        };

        courses.push(course.clone());
        self.persist_collection(COURSES_KEY, &courses).await;
        course
    }

    pub async fn update_course(&self, id: i64, req: UpdateCourseRequest) -> Option<Course> {
        let mut courses = self.load_courses().await;
        let course = courses.iter_mut().find(|c| c.id == id)?;

        if let Some(title) = req.title {
            course.title = title;
        }
        if let Some(description) = req.description {
            course.description = description;
        }
        if let Some(category) = req.category {
            course.category = category;
        }
        if let Some(duration) = req.duration {
            course.duration = duration;
        }
        if let Some(price) = req.price {
            course.price = price;
        }
        if let Some(instructor_id) = req.instructor_id {
            course.instructor_id = instructor_id;
        }
        if let Some(image) = req.image {
            course.image = image;
        }
        if let Some(pdf_link) = req.pdf_link {
            course.pdf_link = pdf_link;
        }
        if let Some(learning_outcomes) = req.learning_outcomes {
            course.learning_outcomes = learning_outcomes;
        }
        if let Some(course_structure) = req.course_structure {
            course.course_structure = course_structure;
        }

        let updated = course.clone();
        self.persist_collection(COURSES_KEY, &courses).await;
        Some(updated)
    }

    pub async fn delete_course(&self, id: i64) -> bool {
        let mut courses = self.load_courses().await;
        let before = courses.len();
        courses.retain(|c| c.id != id);
        if courses.len() == before {
            return false;
        }
        self.persist_collection(COURSES_KEY, &courses).await;
        true
    }

    /// Distinct category names actually used by courses, in first-seen order.
    pub async fn course_categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for course in self.load_courses().await {
            if !seen.contains(&course.category) {
                seen.push(course.category);
            }
        }
        seen
    }

    pub(crate) async fn load_courses(&self) -> Vec<Course> {
        self.load_collection(COURSES_KEY, seed::default_courses).await
    }
}

fn with_instructor(course: Course, instructors: &[Instructor]) -> CourseView {
    let instructor = course
        .instructor_id
        .and_then(|id| instructors.iter().find(|i| i.id == id).cloned());
    CourseView { course, instructor }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_store;
    use crate::models::{NewCourseRequest, UpdateCourseRequest};

    #[tokio::test]
    async fn created_course_reads_back_with_defaults_applied() {
        let store = memory_store().await;

        let req: NewCourseRequest = serde_json::from_str(
            r#"{
                "title": "Graphic Design",
                "description": "Hands-on design course",
                "category": "Media",
                "duration": "2 months",
                "price": "18,000 PKR",
                "instructorId": "2",
                "image": "/assets/course-graphic-design.jpg"
            }"#,
        )
        .expect("request");

        let created = store.add_course(req).await;
        assert_eq!(created.id, 5);
        assert_eq!(created.instructor_id, Some(2));
        assert_eq!(created.pdf_link, "");
        assert!(created.learning_outcomes.is_empty());
        assert!(created.course_structure.is_empty());

        let view = store.get_course(created.id).await.expect("course exists");
        assert_eq!(view.course, created);
        let instructor = view.instructor.expect("joined instructor");
        assert_eq!(instructor.id, 2);
        assert_eq!(instructor.name, "Sara Ahmed");
    }

    #[tokio::test]
    async fn update_touches_only_supplied_fields() {
        let store = memory_store().await;

        let updated = store
            .update_course(
                1,
                UpdateCourseRequest {
                    price: Some("26,000 PKR".to_string()),
                    ..UpdateCourseRequest::default()
                },
            )
            .await
            .expect("course exists");

        assert_eq!(updated.price, "26,000 PKR");
        assert_eq!(updated.title, "Digital Marketing & Social Media Specialist");
        assert_eq!(updated.instructor_id, Some(1));
        assert_eq!(updated.learning_outcomes.len(), 6);
    }

    #[tokio::test]
    async fn update_can_clear_the_instructor_link() {
        let store = memory_store().await;

        let req: UpdateCourseRequest =
            serde_json::from_str(r#"{"instructorId": ""}"#).expect("request");
        let updated = store.update_course(1, req).await.expect("course exists");
        assert_eq!(updated.instructor_id, None);

        // An update without the field keeps the cleared value.
        let updated = store
            .update_course(1, UpdateCourseRequest::default())
            .await
            .expect("course exists");
        assert_eq!(updated.instructor_id, None);
    }

    #[tokio::test]
    async fn update_of_missing_course_is_not_found() {
        let store = memory_store().await;
        let result = store
            .update_course(999, UpdateCourseRequest::default())
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn deleted_id_is_never_reallocated() {
        let store = memory_store().await;

        let first = store
            .add_course(NewCourseRequest {
                title: "Temp".to_string(),
                ..NewCourseRequest::default()
            })
            .await;
        assert_eq!(first.id, 5);

        assert!(store.delete_course(first.id).await);
        assert!(store.get_course(first.id).await.is_none());

        let second = store
            .add_course(NewCourseRequest {
                title: "Replacement".to_string(),
                ..NewCourseRequest::default()
            })
            .await;
        assert_eq!(second.id, 6);
    }

    #[tokio::test]
    async fn delete_of_missing_course_reports_false() {
        let store = memory_store().await;
        assert!(!store.delete_course(999).await);
    }

    #[tokio::test]
    async fn category_filter_and_distinct_listing() {
        let store = memory_store().await;

        let media = store.list_courses_by_category("Media").await;
        assert_eq!(media.len(), 3);
        assert!(media.iter().all(|v| v.course.category == "Media"));

        let names = store.course_categories().await;
        assert_eq!(names, vec!["Media".to_string(), "IT".to_string()]);
    }
}
