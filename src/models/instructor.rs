use serde::{Deserialize, Serialize};

use super::course::Course;

/// The stored record carries no course list. `Course.instructor_id` is the
/// single source of truth for the relationship; views derive the other
/// direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub photo_url: String,
}

/// Read view: an instructor with every course it teaches.
#[derive(Debug, Clone, Serialize)]
pub struct InstructorView {
    #[serde(flatten)]
    pub instructor: Instructor,
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInstructorRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub photo_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstructorRequest {
    pub name: Option<String>,
    pub biography: Option<String>,
    pub specialization: Option<String>,
    pub photo_url: Option<String>,
}
