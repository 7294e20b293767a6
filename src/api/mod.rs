mod validate;

use axum::Json;
use axum::extract::{Path, Query};
use axum::routing::post;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

#[derive(Deserialize)]
struct CourseListParams {
    category: Option<String>,
}

#[derive(Deserialize)]
struct MessageListParams {
    status: Option<MessageStatus>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/categories", get(course_categories))
        .route(
            "/courses/{id}",
            get(get_course).patch(update_course).delete(delete_course),
        )
        .route("/instructors", get(list_instructors).post(create_instructor))
        .route(
            "/instructors/{id}",
            get(get_instructor)
                .patch(update_instructor)
                .delete(delete_instructor),
        )
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            get(get_category)
                .patch(update_category)
                .delete(delete_category),
        )
        .route(
            "/contact-messages",
            get(list_messages).post(create_message),
        )
        .route("/contact-messages/stats", get(message_stats))
        .route(
            "/contact-messages/{id}",
            get(get_message).patch(update_message).delete(delete_message),
        )
        .route("/admin/reset-data", post(reset_data))
        .route("/admin/clear-data", post(clear_data))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.ping().await?;
    Ok(StatusCode::OK)
}

async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseListParams>,
) -> Json<Vec<CourseView>> {
    let courses = match params.category {
        Some(category) => state.store.list_courses_by_category(&category).await,
        None => state.store.list_courses().await,
    };
    Json(courses)
}

async fn course_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.store.course_categories().await)
}

async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CourseView>, AppError> {
    let course = state.store.get_course(id).await.ok_or(AppError::NotFound)?;
    Ok(Json(course))
}

async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<NewCourseRequest>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    validate::new_course(&req)?;
    let course = state.store.add_course(req).await;
    Ok((StatusCode::CREATED, Json(course)))
}

async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCourseRequest>,
) -> Result<Json<Course>, AppError> {
    validate::course_patch(&req)?;
    let course = state
        .store
        .update_course(id, req)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(course))
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_course(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

async fn list_instructors(State(state): State<AppState>) -> Json<Vec<InstructorView>> {
    Json(state.store.list_instructors().await)
}

async fn get_instructor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<InstructorView>, AppError> {
    let instructor = state
        .store
        .get_instructor(id)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(instructor))
}

async fn create_instructor(
    State(state): State<AppState>,
    Json(req): Json<NewInstructorRequest>,
) -> Result<(StatusCode, Json<Instructor>), AppError> {
    validate::new_instructor(&req)?;
    let instructor = state.store.add_instructor(req).await;
    Ok((StatusCode::CREATED, Json(instructor)))
}

async fn update_instructor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateInstructorRequest>,
) -> Result<Json<Instructor>, AppError> {
    validate::instructor_patch(&req)?;
    let instructor = state
        .store
        .update_instructor(id, req)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(instructor))
}

async fn delete_instructor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_instructor(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.store.list_categories().await)
}

async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Category>, AppError> {
    let category = state
        .store
        .get_category(id)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(category))
}

async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<NewCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    validate::new_category(&req)?;
    let category = state.store.add_category(req).await;
    Ok((StatusCode::CREATED, Json(category)))
}

async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Json<Category>, AppError> {
    validate::category_patch(&req)?;
    let category = state
        .store
        .update_category(id, req)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(category))
}

/// Returns the deleted record; the affected courses have already been
/// reassigned by the store.
async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Category>, AppError> {
    let deleted = state
        .store
        .delete_category(id)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(deleted))
}

async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<MessageListParams>,
) -> Json<Vec<ContactMessage>> {
    let messages = match params.status {
        Some(status) => state.store.list_messages_by_status(status).await,
        None => state.store.list_messages().await,
    };
    Json(messages)
}

async fn message_stats(State(state): State<AppState>) -> Json<MessageStats> {
    Json(state.store.message_stats().await)
}

async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ContactMessage>, AppError> {
    let message = state
        .store
        .get_message(id)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(message))
}

async fn create_message(
    State(state): State<AppState>,
    Json(req): Json<NewContactMessageRequest>,
) -> Result<(StatusCode, Json<ContactMessage>), AppError> {
    validate::new_message(&req)?;
    let message = state.store.add_message(req).await;
    Ok((StatusCode::CREATED, Json(message)))
}

async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateContactMessageRequest>,
) -> Result<Json<ContactMessage>, AppError> {
    let message = state
        .store
        .update_message(id, req)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(message))
}

async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_message(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

async fn reset_data(State(state): State<AppState>) -> StatusCode {
    state.store.reset_to_defaults().await;
    StatusCode::NO_CONTENT
}

async fn clear_data(State(state): State<AppState>) -> StatusCode {
    state.store.clear_all().await;
    StatusCode::NO_CONTENT
}
