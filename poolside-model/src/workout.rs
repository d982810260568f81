use crate::ids::WorkoutId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A swim session (séance) as returned by `GET /api/workouts`.
///
/// `description` carries the rich-text editor's HTML; consumers that search
/// or display it outside the editor reduce it to plain text first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: WorkoutId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Nullable on the wire; `None` renders as "Non catégorisé".
    #[serde(default)]
    pub workout_category: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
