//! Derived-statistics augmentation: `Item -> AugmentedItem`.
//!
//! List screens show aggregates (exercise counts, total distance, estimated
//! duration, workout counts) that only exist as per-item sub-resources on
//! the server. This stage fetches them after the base collection loads,
//! in fixed-size groups: every fetch inside a group runs concurrently and
//! the group is awaited as a whole before the next one starts, which bounds
//! outstanding requests without a queue.
//!
//! A failed fetch degrades that one item to zeroed statistics; the view
//! still renders every row. Load failures of the base collection are the
//! blocking kind and are not handled here.

use crate::api::CatalogApi;
use crate::error::CatalogResult;
use async_trait::async_trait;
use futures::future::join_all;
use poolside_model::{
    Plan, PlanId, PlanStats, PlanWithStats, Workout, WorkoutId, WorkoutStats,
    WorkoutWithStats,
};
use tracing::warn;

/// Fixed group size for sub-resource fetches. Small on purpose: the backend
/// is a single box and the admin screens fire these on every refresh.
pub const STATS_BATCH_SIZE: usize = 3;

/// Supplies the per-workout sub-resources the statistics are derived from.
#[async_trait]
pub trait WorkoutStatsSource: Send + Sync {
    async fn workout_stats(&self, workout: WorkoutId) -> CatalogResult<WorkoutStats>;
}

/// Any catalog API can serve as the stats source: two sub-resource fetches
/// per workout, aggregated client-side.
#[async_trait]
impl<A: CatalogApi> WorkoutStatsSource for A {
    async fn workout_stats(&self, workout: WorkoutId) -> CatalogResult<WorkoutStats> {
        let exercises = self.fetch_workout_exercises(workout).await?;
        let sets = self.fetch_workout_swim_sets(workout).await?;
        Ok(WorkoutStats::from_sets(exercises.len(), &sets))
    }
}

/// Supplies the per-plan aggregates.
#[async_trait]
pub trait PlanStatsSource: Send + Sync {
    async fn plan_stats(&self, plan: PlanId) -> CatalogResult<PlanStats>;
}

#[async_trait]
impl<A: CatalogApi> PlanStatsSource for A {
    async fn plan_stats(&self, plan: PlanId) -> CatalogResult<PlanStats> {
        let workouts = self.fetch_plan_workouts(plan).await?;
        Ok(PlanStats {
            workout_count: workouts.len(),
        })
    }
}

/// Attach derived statistics to every workout, preserving input order.
///
/// One output item per input item, always: a failed fetch logs at `warn`
/// and that workout keeps `WorkoutStats::default()`.
pub async fn augment_workouts<S>(
    source: &S,
    workouts: Vec<Workout>,
) -> Vec<WorkoutWithStats>
where
    S: WorkoutStatsSource + ?Sized,
{
    let mut augmented = Vec::with_capacity(workouts.len());
    let mut pending = workouts.into_iter();

    loop {
        let group: Vec<Workout> =
            pending.by_ref().take(STATS_BATCH_SIZE).collect();
        if group.is_empty() {
            break;
        }

        let stats = join_all(group.iter().map(|workout| {
            let id = workout.id;
            async move {
                match source.workout_stats(id).await {
                    Ok(stats) => stats,
                    Err(error) => {
                        warn!(workout = %id, %error, "stats fetch failed, degrading to defaults");
                        WorkoutStats::default()
                    }
                }
            }
        }))
        .await;

        augmented.extend(
            group
                .into_iter()
                .zip(stats)
                .map(|(workout, stats)| WorkoutWithStats { workout, stats }),
        );
    }

    augmented
}

/// Attach workout counts to every plan, preserving input order. Same
/// windowing and degradation rules as [`augment_workouts`].
pub async fn augment_plans<S>(source: &S, plans: Vec<Plan>) -> Vec<PlanWithStats>
where
    S: PlanStatsSource + ?Sized,
{
    let mut augmented = Vec::with_capacity(plans.len());
    let mut pending = plans.into_iter();

    loop {
        let group: Vec<Plan> = pending.by_ref().take(STATS_BATCH_SIZE).collect();
        if group.is_empty() {
            break;
        }

        let stats = join_all(group.iter().map(|plan| {
            let id = plan.id;
            async move {
                match source.plan_stats(id).await {
                    Ok(stats) => stats,
                    Err(error) => {
                        warn!(plan = %id, %error, "workout count fetch failed, degrading to defaults");
                        PlanStats::default()
                    }
                }
            }
        }))
        .await;

        augmented.extend(
            group
                .into_iter()
                .zip(stats)
                .map(|(plan, stats)| PlanWithStats { plan, stats }),
        );
    }

    augmented
}
