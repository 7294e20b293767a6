use serde::{Deserialize, Serialize};

use super::instructor::Instructor;
use super::serde_helpers::{id_or_string, id_patch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Denormalized category name. Repaired on category deletion, not
    /// enforced as a strict foreign key.
    pub category: String,
    pub duration: String,
    /// Free text, currency and formatting included.
    pub price: String,
    #[serde(default, deserialize_with = "id_or_string")]
    pub instructor_id: Option<i64>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub pdf_link: String,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    #[serde(default)]
    pub course_structure: Vec<CourseModule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    pub title: String,
    pub description: String,
    pub duration: String,
}

/// Read view: a course with its instructor resolved by `instructor_id`.
#[derive(Debug, Clone, Serialize)]
pub struct CourseView {
    #[serde(flatten)]
    pub course: Course,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<Instructor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourseRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub price: String,
    #[serde(default, deserialize_with = "id_or_string")]
    pub instructor_id: Option<i64>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub pdf_link: String,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    #[serde(default)]
    pub course_structure: Vec<CourseModule>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub duration: Option<String>,
    pub price: Option<String>,
    #[serde(default, deserialize_with = "id_patch")]
    pub instructor_id: Option<Option<i64>>,
    pub image: Option<String>,
    pub pdf_link: Option<String>,
    pub learning_outcomes: Option<Vec<String>>,
    pub course_structure: Option<Vec<CourseModule>>,
}
