use crate::models::Course;
use crate::services::store::{CourseStore, StoreError};
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client as MongoClient, Collection,
};
use service_core::error::AppError;

const COURSES_COLLECTION: &str = "courses";

#[derive(Clone)]
pub struct MongoCourseStore {
    client: MongoClient,
    courses: Collection<Course>,
}

impl MongoCourseStore {
    /// Connects and pings the deployment so an unreachable store fails
    /// startup instead of the first request.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::from(e)
        })?;

        let store = Self {
            courses: client.database(database).collection(COURSES_COLLECTION),
            client,
        };
        store.ping().await.map_err(|e| {
            tracing::error!("MongoDB connection failed: {}", e);
            AppError::from(e)
        })?;

        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(store)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn courses(&self) -> &Collection<Course> {
        &self.courses
    }
}

#[async_trait]
impl CourseStore for MongoCourseStore {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Course>, StoreError> {
        let course = self.courses.find_one(doc! { "_id": *id }, None).await?;
        Ok(course)
    }

    async fn insert(&self, course: &Course) -> Result<(), StoreError> {
        self.courses.insert_one(course, None).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }
}
