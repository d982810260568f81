//! In-memory catalog double shared by the integration suites.
//!
//! Records every operation it serves (name + arguments) so tests can assert
//! on exact call traffic, and lets individual relation calls be primed to
//! fail, since partial failure is part of the reconciler's contract.

// Each integration target compiles its own copy; not every target uses
// every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use poolside_core::api::CatalogApi;
use poolside_core::error::{CatalogError, CatalogResult};
use poolside_model::{
    Exercise, ExerciseId, Page, Plan, PlanDraft, PlanId, SwimSet, SwimSetId,
    Upload, Workout, WorkoutId,
};
use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

/// Route `warn!` output from the code under test through the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env(),
        )
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Default)]
pub struct StubCatalog {
    pub workouts: Vec<Workout>,
    pub plans: Vec<Plan>,
    pub exercises_by_workout: HashMap<WorkoutId, Vec<Exercise>>,
    pub sets_by_workout: HashMap<WorkoutId, Vec<SwimSet>>,
    pub workouts_by_plan: HashMap<PlanId, Vec<Workout>>,
    /// Workout ids whose sub-resource fetches fail.
    pub failing_stats: BTreeSet<WorkoutId>,
    /// (plan, workout) pairs whose add call fails.
    pub failing_adds: BTreeSet<(PlanId, WorkoutId)>,
    operations: Mutex<Vec<String>>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, operation: String) {
        self.operations
            .lock()
            .expect("operation log poisoned")
            .push(operation);
    }

    /// Every operation served so far, in call order.
    pub fn operations(&self) -> Vec<String> {
        self.operations
            .lock()
            .expect("operation log poisoned")
            .clone()
    }

    /// Operations matching a prefix, e.g. `"add_workout_to_plan"`.
    pub fn operations_named(&self, prefix: &str) -> Vec<String> {
        self.operations()
            .into_iter()
            .filter(|op| op.starts_with(prefix))
            .collect()
    }
}

pub fn workout(id: i64, title: &str) -> Workout {
    Workout {
        id: WorkoutId(id),
        title: title.to_string(),
        description: None,
        workout_category: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn swim_set(
    workout: WorkoutId,
    distance: u32,
    repetition: u32,
    rest: u32,
) -> SwimSet {
    SwimSet {
        id: SwimSetId(0),
        workout_id: workout,
        set_distance: Some(distance),
        set_repetition: Some(repetition),
        rest_time: Some(rest),
        stroke: None,
    }
}

#[async_trait]
impl CatalogApi for StubCatalog {
    async fn fetch_workouts(&self) -> CatalogResult<Vec<Workout>> {
        self.record("fetch_workouts".to_string());
        Ok(self.workouts.clone())
    }

    async fn fetch_exercises(&self) -> CatalogResult<Vec<Exercise>> {
        self.record("fetch_exercises".to_string());
        Ok(Vec::new())
    }

    async fn fetch_plans(&self) -> CatalogResult<Vec<Plan>> {
        self.record("fetch_plans".to_string());
        Ok(self.plans.clone())
    }

    async fn fetch_pages(&self) -> CatalogResult<Vec<Page>> {
        self.record("fetch_pages".to_string());
        Ok(Vec::new())
    }

    async fn fetch_uploads(&self) -> CatalogResult<Vec<Upload>> {
        self.record("fetch_uploads".to_string());
        Ok(Vec::new())
    }

    async fn fetch_workout_exercises(
        &self,
        workout: WorkoutId,
    ) -> CatalogResult<Vec<Exercise>> {
        self.record(format!("fetch_workout_exercises({workout})"));
        if self.failing_stats.contains(&workout) {
            return Err(CatalogError::Server {
                status: 500,
                message: "stub failure".to_string(),
            });
        }
        Ok(self
            .exercises_by_workout
            .get(&workout)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_workout_swim_sets(
        &self,
        workout: WorkoutId,
    ) -> CatalogResult<Vec<SwimSet>> {
        self.record(format!("fetch_workout_swim_sets({workout})"));
        if self.failing_stats.contains(&workout) {
            return Err(CatalogError::Server {
                status: 500,
                message: "stub failure".to_string(),
            });
        }
        Ok(self
            .sets_by_workout
            .get(&workout)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_plan_workouts(
        &self,
        plan: PlanId,
    ) -> CatalogResult<Vec<Workout>> {
        self.record(format!("fetch_plan_workouts({plan})"));
        Ok(self
            .workouts_by_plan
            .get(&plan)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_plan(&self, draft: &PlanDraft) -> CatalogResult<Plan> {
        self.record(format!("create_plan({})", draft.title));
        Ok(Plan {
            id: PlanId(1000),
            title: draft.title.clone(),
            description: draft.description.clone(),
            plan_category: draft.plan_category.clone(),
            user_id: draft.user_id,
            created_at: None,
            updated_at: None,
        })
    }

    async fn update_plan(
        &self,
        plan: PlanId,
        draft: &PlanDraft,
    ) -> CatalogResult<Plan> {
        self.record(format!("update_plan({plan})"));
        Ok(Plan {
            id: plan,
            title: draft.title.clone(),
            description: draft.description.clone(),
            plan_category: draft.plan_category.clone(),
            user_id: draft.user_id,
            created_at: None,
            updated_at: None,
        })
    }

    async fn add_workout_to_plan(
        &self,
        plan: PlanId,
        workout: WorkoutId,
    ) -> CatalogResult<()> {
        self.record(format!("add_workout_to_plan({plan}, {workout})"));
        if self.failing_adds.contains(&(plan, workout)) {
            return Err(CatalogError::Server {
                status: 500,
                message: "stub failure".to_string(),
            });
        }
        Ok(())
    }

    async fn remove_workout_from_plan(
        &self,
        plan: PlanId,
        workout: WorkoutId,
    ) -> CatalogResult<()> {
        self.record(format!("remove_workout_from_plan({plan}, {workout})"));
        Ok(())
    }

    async fn add_exercise_to_workout(
        &self,
        workout: WorkoutId,
        exercise: ExerciseId,
    ) -> CatalogResult<()> {
        self.record(format!("add_exercise_to_workout({workout}, {exercise})"));
        Ok(())
    }

    async fn remove_exercise_from_workout(
        &self,
        workout: WorkoutId,
        exercise: ExerciseId,
    ) -> CatalogResult<()> {
        self.record(format!(
            "remove_exercise_from_workout({workout}, {exercise})"
        ));
        Ok(())
    }
}
