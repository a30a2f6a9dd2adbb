pub mod courses;
pub mod health;

pub use courses::{create_course, get_course};
pub use health::{health_check, index, metrics_endpoint, readiness_check};
