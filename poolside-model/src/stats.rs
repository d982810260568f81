//! Derived statistics attached to entities by the augmentation pipeline.
//!
//! None of these values exist on the raw wire payloads; they are aggregated
//! client-side from sub-resources. `Default` is the degraded state a row
//! falls back to when its sub-resource fetch fails.

use crate::swim_set::SwimSet;
use crate::{Plan, Workout};
use serde::{Deserialize, Serialize};

/// Aggregates computed from a workout's exercises and swim sets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkoutStats {
    pub exercise_count: usize,
    pub set_count: usize,
    /// Total distance in meters: Σ distance × repetitions over the sets.
    pub total_distance_m: u32,
    /// Rough duration estimate in minutes: one minute per 100 m swum, plus
    /// the accumulated rest time.
    pub estimated_duration_min: f64,
}

impl WorkoutStats {
    pub fn from_sets(exercise_count: usize, sets: &[SwimSet]) -> Self {
        let total_distance_m: u32 = sets
            .iter()
            .map(|set| {
                set.set_distance.unwrap_or(0) * set.set_repetition.unwrap_or(1).max(1)
            })
            .sum();

        let rest_minutes: f64 = sets
            .iter()
            .map(|set| f64::from(set.rest_time.unwrap_or(0)) / 60.0)
            .sum();

        let swim_minutes = (f64::from(total_distance_m) / 100.0).ceil();

        WorkoutStats {
            exercise_count,
            set_count: sets.len(),
            total_distance_m,
            estimated_duration_min: swim_minutes + rest_minutes,
        }
    }
}

/// A workout paired with its derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutWithStats {
    #[serde(flatten)]
    pub workout: Workout,
    pub stats: WorkoutStats,
}

/// Aggregates computed from a plan's associated workouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanStats {
    pub workout_count: usize,
}

/// A plan paired with its derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanWithStats {
    #[serde(flatten)]
    pub plan: Plan,
    pub stats: PlanStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{SwimSetId, WorkoutId};

    fn set(distance: Option<u32>, repetition: Option<u32>, rest: Option<u32>) -> SwimSet {
        SwimSet {
            id: SwimSetId(0),
            workout_id: WorkoutId(1),
            set_distance: distance,
            set_repetition: repetition,
            rest_time: rest,
            stroke: None,
        }
    }

    #[test]
    fn distance_multiplies_repetitions() {
        let stats = WorkoutStats::from_sets(
            2,
            &[set(Some(100), Some(4), None), set(Some(50), Some(2), None)],
        );
        assert_eq!(stats.total_distance_m, 500);
        assert_eq!(stats.set_count, 2);
        assert_eq!(stats.exercise_count, 2);
    }

    #[test]
    fn missing_repetition_counts_as_one_pass() {
        let stats = WorkoutStats::from_sets(0, &[set(Some(200), None, None)]);
        assert_eq!(stats.total_distance_m, 200);
    }

    #[test]
    fn duration_adds_rest_to_pace_estimate() {
        // 400 m -> 4 swim minutes, 90 s rest -> 1.5 min.
        let stats = WorkoutStats::from_sets(0, &[set(Some(100), Some(4), Some(90))]);
        assert!((stats.estimated_duration_min - 5.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_sets_stay_zeroed() {
        assert_eq!(WorkoutStats::from_sets(0, &[]), WorkoutStats::default());
    }
}
