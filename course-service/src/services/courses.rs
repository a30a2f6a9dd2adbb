use crate::models::{Course, NewCourse};
use crate::services::store::CourseStore;
use metrics::counter;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

pub const INVALID_ID_MESSAGE: &str = "Invalid course ID format";
pub const NOT_FOUND_MESSAGE: &str = "Course not found";

/// Checks that `raw` is a 24-character hexadecimal ObjectId.
pub fn parse_course_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::BadRequest(anyhow::anyhow!(INVALID_ID_MESSAGE)))
}

/// Outcome for a path segment that never reached `parse_course_id`, such as
/// percent-encoded bytes that are not UTF-8.
pub fn reject_undecodable_id() -> AppError {
    record_lookup("invalid_id");
    AppError::BadRequest(anyhow::anyhow!(INVALID_ID_MESSAGE))
}

/// Fetches one course by id.
///
/// Malformed ids are rejected before the store is touched; otherwise the
/// store is read exactly once.
pub async fn get_course_by_id(store: &dyn CourseStore, raw_id: &str) -> Result<Course, AppError> {
    let id = match parse_course_id(raw_id) {
        Ok(id) => id,
        Err(e) => {
            record_lookup("invalid_id");
            return Err(e);
        }
    };

    match store.find_by_id(&id).await {
        Ok(Some(course)) => {
            record_lookup("found");
            Ok(course)
        }
        Ok(None) => {
            record_lookup("not_found");
            Err(AppError::NotFound(anyhow::anyhow!(NOT_FOUND_MESSAGE)))
        }
        Err(e) => {
            record_lookup("error");
            tracing::error!(course_id = %id, error = %e, "Course lookup failed");
            Err(e.into())
        }
    }
}

/// Validates a candidate and persists it.
pub async fn create_course(store: &dyn CourseStore, candidate: NewCourse) -> Result<Course, AppError> {
    let course = Course::new(candidate)?;

    store.insert(&course).await.map_err(|e| {
        tracing::error!(course_id = %course.id, error = %e, "Failed to insert course");
        AppError::from(e)
    })?;

    tracing::info!(course_id = %course.id, "Course created");
    Ok(course)
}

fn record_lookup(outcome: &'static str) {
    counter!("courses_lookup_total", "outcome" => outcome).increment(1);
}
