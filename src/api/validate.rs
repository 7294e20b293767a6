//! Required-field checks applied before a write reaches the store.

use crate::error::AppError;
use crate::models::{
    NewCategoryRequest, NewContactMessageRequest, NewCourseRequest, NewInstructorRequest,
    UpdateCategoryRequest, UpdateCourseRequest, UpdateInstructorRequest,
};

pub fn new_course(req: &NewCourseRequest) -> Result<(), AppError> {
    require(&req.title, "title")?;
    require(&req.description, "description")?;
    require(&req.category, "category")?;
    require(&req.duration, "duration")?;
    require(&req.price, "price")?;
    Ok(())
}

pub fn course_patch(req: &UpdateCourseRequest) -> Result<(), AppError> {
    require_if_present(&req.title, "title")?;
    require_if_present(&req.description, "description")?;
    require_if_present(&req.category, "category")?;
    require_if_present(&req.duration, "duration")?;
    require_if_present(&req.price, "price")?;
    Ok(())
}

pub fn new_instructor(req: &NewInstructorRequest) -> Result<(), AppError> {
    require(&req.name, "name")?;
    require(&req.specialization, "specialization")?;
    Ok(())
}

pub fn instructor_patch(req: &UpdateInstructorRequest) -> Result<(), AppError> {
    require_if_present(&req.name, "name")?;
    require_if_present(&req.specialization, "specialization")?;
    Ok(())
}

pub fn new_category(req: &NewCategoryRequest) -> Result<(), AppError> {
    require(&req.name, "name")
}

pub fn category_patch(req: &UpdateCategoryRequest) -> Result<(), AppError> {
    require_if_present(&req.name, "name")
}

pub fn new_message(req: &NewContactMessageRequest) -> Result<(), AppError> {
    require(&req.name, "name")?;
    require(&req.email, "email")?;
    require(&req.message, "message")?;
    if !req.email.contains('@') {
        return Err(AppError::BadRequest(
            "email must be a valid address".to_string(),
        ));
    }
    Ok(())
}

fn require(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} is required")));
    }
    Ok(())
}

fn require_if_present(value: &Option<String>, field: &str) -> Result<(), AppError> {
    match value {
        Some(value) => require(value, field),
        None => Ok(()),
    }
}
