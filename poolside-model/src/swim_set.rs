use crate::ids::{SwimSetId, WorkoutId};
use serde::{Deserialize, Serialize};

/// One swim set (série) of a workout, from `GET /api/workouts/{id}/swim-sets`.
///
/// Every numeric field is nullable on the wire; the statistics code treats a
/// missing distance as 0 m, a missing repetition as a single pass and a
/// missing rest as no rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwimSet {
    pub id: SwimSetId,
    pub workout_id: WorkoutId,
    /// Distance of one repetition, in meters.
    #[serde(default)]
    pub set_distance: Option<u32>,
    #[serde(default)]
    pub set_repetition: Option<u32>,
    /// Rest after the set, in seconds.
    #[serde(default)]
    pub rest_time: Option<u32>,
    /// Stroke label (crawl, dos, brasse, ...), free-form.
    #[serde(default)]
    pub stroke: Option<String>,
}
