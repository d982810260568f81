use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Strongly typed id for exercises.
///
/// The upstream REST API hands out integer primary keys; wrapping them keeps
/// a plan id from ever being passed where a workout id is expected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ExerciseId(pub i64);

impl ExerciseId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn from_route_param(raw: &str) -> Result<Self, ModelError> {
        raw.parse()
            .map(ExerciseId)
            .map_err(|_| ModelError::InvalidId(raw.to_string()))
    }
}

impl std::fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed id for workouts (séances).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WorkoutId(pub i64);

impl WorkoutId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn from_route_param(raw: &str) -> Result<Self, ModelError> {
        raw.parse()
            .map(WorkoutId)
            .map_err(|_| ModelError::InvalidId(raw.to_string()))
    }
}

impl std::fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed id for training plans.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlanId(pub i64);

impl PlanId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn from_route_param(raw: &str) -> Result<Self, ModelError> {
        raw.parse()
            .map(PlanId)
            .map_err(|_| ModelError::InvalidId(raw.to_string()))
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed id for swim sets (séries) within a workout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SwimSetId(pub i64);

impl SwimSetId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for SwimSetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed id for CMS pages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PageId(pub i64);

impl PageId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed id for uploaded media files.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UploadId(pub i64);

impl UploadId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UploadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed id for user accounts. Only referenced by plans today.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
