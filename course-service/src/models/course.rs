use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

/// A persisted course document in the `courses` collection.
///
/// Field names match documents written by the existing Node.js service,
/// so timestamps live under `createdAt` / `updatedAt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    /// Length of the course in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Candidate course submitted by a client.
///
/// Identifiers and timestamps are never accepted from the client; unknown
/// fields are dropped.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewCourse {
    #[serde(default)]
    #[validate(length(min = 1, message = "Course title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default, deserialize_with = "deserialize_hours")]
    #[validate(range(min = 0.0, message = "Duration cannot be negative"))]
    pub duration: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Course {
    /// Validates a candidate and stamps it with a fresh id and timestamps.
    pub fn new(candidate: NewCourse) -> Result<Self, validator::ValidationErrors> {
        candidate.validate()?;

        // BSON datetimes hold milliseconds; truncate up front so the
        // in-memory record equals what the store reads back.
        let now = bson::DateTime::now().to_chrono();
        Ok(Self {
            id: ObjectId::new(),
            title: candidate.title,
            description: candidate.description,
            instructor: candidate.instructor,
            duration: candidate.duration,
            category: candidate.category,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Accepts a JSON number or a numeric string. Blank strings read as absent.
fn deserialize_hours<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Hours {
        Number(f64),
        Text(String),
    }

    let hours = match Option::<Hours>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Hours::Number(n)) => n,
        Some(Hours::Text(s)) if s.trim().is_empty() => return Ok(None),
        Some(Hours::Text(s)) => s.trim().parse::<f64>().map_err(|_| {
            de::Error::custom(format!("duration must be a number, got {:?}", s))
        })?,
    };

    if !hours.is_finite() {
        return Err(de::Error::custom("duration must be a finite number"));
    }
    Ok(Some(hours))
}
