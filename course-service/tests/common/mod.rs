#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use course_service::models::Course;
use course_service::services::{CourseStore, StoreError};
use course_service::startup::Application;
use course_service::{build_router, AppState};
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

/// In-memory course store that counts calls and can be told to fail.
#[derive(Default)]
pub struct InMemoryCourseStore {
    courses: Mutex<HashMap<ObjectId, Course>>,
    failure: Mutex<Option<String>>,
    find_calls: AtomicUsize,
    insert_calls: AtomicUsize,
}

impl InMemoryCourseStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed(&self, course: Course) {
        self.courses.lock().unwrap().insert(course.id, course);
    }

    /// Every subsequent call fails with `message`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self, id: &ObjectId) -> Option<Course> {
        self.courses.lock().unwrap().get(id).cloned()
    }

    fn check_failure(&self) -> Result<(), StoreError> {
        match self.failure.lock().unwrap().clone() {
            Some(message) => Err(StoreError::Backend(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CourseStore for InMemoryCourseStore {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Course>, StoreError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.courses.lock().unwrap().get(id).cloned())
    }

    async fn insert(&self, course: &Course) -> Result<(), StoreError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        let mut courses = self.courses.lock().unwrap();
        if courses.contains_key(&course.id) {
            return Err(StoreError::Backend(format!(
                "E11000 duplicate key error: {}",
                course.id
            )));
        }
        courses.insert(course.id, course.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_failure()
    }
}

pub fn router(store: Arc<InMemoryCourseStore>) -> Router {
    build_router(AppState::new(store))
}

/// Sends one request through the router and returns status and JSON body.
pub async fn send(
    app: Router,
    request: Request<Body>,
) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// A running server on a random port, backed by the in-memory store.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<InMemoryCourseStore>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let store = InMemoryCourseStore::new();
        let app = Application::build_with_store(0, store.clone())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            port,
            store,
        }
    }
}
