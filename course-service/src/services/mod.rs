pub mod courses;
pub mod database;
pub mod metrics;
pub mod store;

pub use courses::{create_course, get_course_by_id, parse_course_id, reject_undecodable_id};
pub use database::MongoCourseStore;
pub use metrics::{get_metrics, init_metrics};
pub use store::{CourseStore, StoreError};
