use crate::ids::{ExerciseId, UploadId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A technique exercise as returned by `GET /api/exercises`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub title: String,
    /// Rich-text HTML from the editor.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub exercise_category: Option<String>,
    #[serde(default)]
    pub exercise_level: Option<String>,
    /// Illustration image, when one was uploaded.
    #[serde(default)]
    pub upload_id: Option<UploadId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
