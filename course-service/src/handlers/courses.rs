use crate::dtos::CourseResponse;
use crate::models::NewCourse;
use crate::services;
use crate::startup::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;

#[tracing::instrument(skip(state, id), fields(course_id))]
pub async fn get_course(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<CourseResponse>, AppError> {
    // Undecodable segments get the same JSON answer as any other bad id.
    let Path(id) = id.map_err(|e| {
        tracing::debug!(error = %e, "Rejected course id path segment");
        services::reject_undecodable_id()
    })?;
    tracing::Span::current().record("course_id", id.as_str());

    let course = services::get_course_by_id(state.store.as_ref(), &id).await?;
    Ok(Json(CourseResponse::from(course)))
}

#[tracing::instrument(skip(state, candidate), fields(title = %candidate.title))]
pub async fn create_course(
    State(state): State<AppState>,
    Json(candidate): Json<NewCourse>,
) -> Result<(StatusCode, Json<CourseResponse>), AppError> {
    let course = services::create_course(state.store.as_ref(), candidate).await?;
    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))))
}
