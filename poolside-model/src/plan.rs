use crate::ids::{PlanId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A training plan as returned by `GET /api/plans`.
///
/// Plans own a many-to-many relation to workouts, persisted server-side as
/// join records and edited through the association reconciler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Difficulty level; the wire field keeps the legacy `plan_category` name.
    #[serde(default)]
    pub plan_category: Option<String>,
    /// Owning coach account, when the plan is assigned.
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /api/plans` and `PUT /api/plans/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub plan_category: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
}
