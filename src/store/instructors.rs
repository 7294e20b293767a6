use crate::models::{
    Course, Instructor, InstructorView, NewInstructorRequest, UpdateInstructorRequest,
};

use super::{DataStore, INSTRUCTORS_KEY, max_id, seed};

impl DataStore {
    pub async fn list_instructors(&self) -> Vec<InstructorView> {
        let instructors = self.load_instructors().await;
        let courses = self.load_courses().await;
        instructors
            .into_iter()
            .map(|instructor| with_courses(instructor, &courses))
            .collect()
    }

    pub async fn get_instructor(&self, id: i64) -> Option<InstructorView> {
        let instructors = self.load_instructors().await;
        let courses = self.load_courses().await;
        instructors
            .into_iter()
            .find(|instructor| instructor.id == id)
            .map(|instructor| with_courses(instructor, &courses))
    }

    pub async fn add_instructor(&self, req: NewInstructorRequest) -> Instructor {
        let mut instructors = self.load_instructors().await;
        let id = self.next_instructor_id(max_id(instructors.iter().map(|i| i.id)));

        let instructor = Instructor {
            id,
            name: req.name,
            biography: req.biography,
            specialization: req.specialization,
            photo_url: req.photo_url,
        };

        instructors.push(instructor.clone());
        self.persist_collection(INSTRUCTORS_KEY, &instructors).await;
        instructor
    }

    pub async fn update_instructor(
        &self,
        id: i64,
        req: UpdateInstructorRequest,
    ) -> Option<Instructor> {
        let mut instructors = self.load_instructors().await;
        let instructor = instructors.iter_mut().find(|i| i.id == id)?;

        if let Some(name) = req.name {
            instructor.name = name;
        }
        if let Some(biography) = req.biography {
            instructor.biography = biography;
        }
        if let Some(specialization) = req.specialization {
            instructor.specialization = specialization;
        }
        if let Some(photo_url) = req.photo_url {
            instructor.photo_url = photo_url;
        }

        let updated = instructor.clone();
        self.persist_collection(INSTRUCTORS_KEY, &instructors).await;
        Some(updated)
    }

    pub async fn delete_instructor(&self, id: i64) -> bool {
        let mut instructors = self.load_instructors().await;
        let before = instructors.len();
        instructors.retain(|i| i.id != id);
        if instructors.len() == before {
            return false;
        }
        self.persist_collection(INSTRUCTORS_KEY, &instructors).await;
        true
    }

    pub(crate) async fn load_instructors(&self) -> Vec<Instructor> {
        self.load_collection(INSTRUCTORS_KEY, seed::default_instructors)
            .await
    }
}

/// `Course.instructor_id` is the canonical side of the relationship; the
/// instructor's course list is always derived from it.
fn with_courses(instructor: Instructor, courses: &[Course]) -> InstructorView {
    let courses = courses
        .iter()
        .filter(|course| course.instructor_id == Some(instructor.id))
        .cloned()
        .collect();
    InstructorView {
        instructor,
        courses,
    }
}
