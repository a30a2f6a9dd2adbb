use crate::models::Course;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use thiserror::Error;

/// Failure reported by a course store. The message is shown to clients
/// verbatim.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Backend(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::DatabaseError(anyhow::Error::new(err))
    }
}

/// Single-document access to persisted courses.
///
/// `find_by_id` distinguishes a found record, a confirmed absence
/// (`Ok(None)`) and a store failure.
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Course>, StoreError>;

    async fn insert(&self, course: &Course) -> Result<(), StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
