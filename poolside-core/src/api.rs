//! API service trait for server communication.
//!
//! Abstracts the HTTP transport so the engine, the augmentation pipeline and
//! the reconciler can run against any backend: the reqwest client in
//! `poolside-client`, or an in-memory double in tests. Authentication,
//! routing and retries are the implementor's concern.

use crate::error::CatalogResult;
use async_trait::async_trait;
use poolside_model::{
    Exercise, ExerciseId, Page, Plan, PlanDraft, PlanId, SwimSet, Upload,
    Workout, WorkoutId,
};
use std::fmt::Debug;

/// Generic API service trait for the swim-training catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync + Debug {
    // === Collections ===

    /// Fetch every workout.
    async fn fetch_workouts(&self) -> CatalogResult<Vec<Workout>>;

    /// Fetch every exercise.
    async fn fetch_exercises(&self) -> CatalogResult<Vec<Exercise>>;

    /// Fetch every training plan.
    async fn fetch_plans(&self) -> CatalogResult<Vec<Plan>>;

    /// Fetch every CMS page.
    async fn fetch_pages(&self) -> CatalogResult<Vec<Page>>;

    /// Fetch the media library listing.
    async fn fetch_uploads(&self) -> CatalogResult<Vec<Upload>>;

    // === Sub-resources (augmentation inputs) ===

    /// Exercises linked to a workout.
    async fn fetch_workout_exercises(
        &self,
        workout: WorkoutId,
    ) -> CatalogResult<Vec<Exercise>>;

    /// Swim sets of a workout, the source of distance/duration aggregates.
    async fn fetch_workout_swim_sets(
        &self,
        workout: WorkoutId,
    ) -> CatalogResult<Vec<SwimSet>>;

    /// Workouts currently associated with a plan (the persisted relation
    /// snapshot a reconciliation starts from).
    async fn fetch_plan_workouts(
        &self,
        plan: PlanId,
    ) -> CatalogResult<Vec<Workout>>;

    // === Plan persistence (relation parents) ===

    /// Create a plan; a not-yet-persisted parent must exist before its
    /// relations can be reconciled.
    async fn create_plan(&self, draft: &PlanDraft) -> CatalogResult<Plan>;

    /// Update an existing plan's own fields (not its relations).
    async fn update_plan(
        &self,
        plan: PlanId,
        draft: &PlanDraft,
    ) -> CatalogResult<Plan>;

    // === Relation editing ===

    /// Persist one plan→workout join record.
    async fn add_workout_to_plan(
        &self,
        plan: PlanId,
        workout: WorkoutId,
    ) -> CatalogResult<()>;

    /// Delete one plan→workout join record.
    async fn remove_workout_from_plan(
        &self,
        plan: PlanId,
        workout: WorkoutId,
    ) -> CatalogResult<()>;

    /// Persist one workout→exercise join record.
    async fn add_exercise_to_workout(
        &self,
        workout: WorkoutId,
        exercise: ExerciseId,
    ) -> CatalogResult<()>;

    /// Delete one workout→exercise join record.
    async fn remove_exercise_from_workout(
        &self,
        workout: WorkoutId,
        exercise: ExerciseId,
    ) -> CatalogResult<()>;
}
