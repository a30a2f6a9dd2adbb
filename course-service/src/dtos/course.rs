use crate::models::Course;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// JSON view of a course: hex id, RFC 3339 timestamps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_hours"
    )]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.to_hex(),
            title: course.title,
            description: course.description,
            instructor: course.instructor,
            duration: course.duration,
            category: course.category,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

// Largest integer an f64 holds exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole hours go out as JSON integers (`10`, not `10.0`).
fn serialize_hours<S>(hours: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match hours {
        Some(h) if h.fract() == 0.0 && h.abs() <= MAX_EXACT_INTEGER => {
            serializer.serialize_i64(*h as i64)
        }
        Some(h) => serializer.serialize_f64(*h),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewCourse;
    use serde_json::json;

    fn course(duration: Option<f64>) -> Course {
        Course::new(NewCourse {
            title: "Intro to Systems".to_string(),
            instructor: Some("Ada".to_string()),
            duration,
            ..NewCourse::default()
        })
        .unwrap()
    }

    #[test]
    fn renders_public_shape() {
        let course = course(Some(10.0));
        let id = course.id.to_hex();
        let value = serde_json::to_value(CourseResponse::from(course)).unwrap();

        assert_eq!(value["id"], json!(id));
        assert_eq!(value["title"], "Intro to Systems");
        assert_eq!(value["instructor"], "Ada");
        assert_eq!(value["duration"], json!(10));
        assert!(value["createdAt"].is_string());
        assert_eq!(value["createdAt"], value["updatedAt"]);
        assert!(value.get("description").is_none());
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn fractional_hours_stay_fractional() {
        let value = serde_json::to_value(CourseResponse::from(course(Some(1.5)))).unwrap();
        assert_eq!(value["duration"], json!(1.5));
    }

    #[test]
    fn absent_duration_is_omitted() {
        let value = serde_json::to_value(CourseResponse::from(course(None))).unwrap();
        assert!(value.get("duration").is_none());
    }
}
