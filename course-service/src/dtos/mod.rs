pub mod course;

pub use course::CourseResponse;
