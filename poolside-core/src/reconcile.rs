//! Many-to-many relation reconciliation.
//!
//! A relationship editor loads the persisted relation once (the snapshot),
//! lets the user toggle a local selection freely, then converges the server
//! onto the selection: one add per newly selected id, one remove per
//! deselected id. The relation API has no multi-item transaction, so
//! convergence is best-effort per id: a failed call is recorded and its
//! siblings still run. Whether recorded failures should be surfaced to the
//! end user is an open product question; today callers get them in the
//! outcome and the UI ignores them.
//!
//! Calls are idempotent and target distinct ids, so a caller may apply the
//! diff concurrently; the default here stays sequential like the screens
//! it was extracted from.

use crate::api::CatalogApi;
use crate::error::{CatalogError, CatalogResult};
use async_trait::async_trait;
use poolside_model::{ExerciseId, PlanId, WorkoutId};
use std::collections::BTreeSet;
use std::fmt::Display;
use tracing::{debug, warn};

/// The minimal set of operations separating the persisted relation from the
/// desired selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationDiff<C> {
    /// Selected locally, absent remotely.
    pub to_add: Vec<C>,
    /// Present remotely, deselected locally.
    pub to_remove: Vec<C>,
}

impl<C: Ord + Copy> RelationDiff<C> {
    /// Set difference both ways. Equal sets produce an empty diff, which
    /// the executor turns into zero remote calls.
    pub fn between(current: &BTreeSet<C>, desired: &BTreeSet<C>) -> Self {
        RelationDiff {
            to_add: desired.difference(current).copied().collect(),
            to_remove: current.difference(desired).copied().collect(),
        }
    }
}

impl<C> RelationDiff<C> {
    pub fn is_noop(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// One side of a many-to-many relation, editable one join record at a time.
#[async_trait]
pub trait RelationEditor<P, C>: Send + Sync
where
    P: Copy + Send + Sync,
    C: Copy + Send + Sync,
{
    /// Persist the (parent, child) join record.
    async fn link(&self, parent: P, child: C) -> CatalogResult<()>;

    /// Delete the (parent, child) join record.
    async fn unlink(&self, parent: P, child: C) -> CatalogResult<()>;
}

/// Which operation failed for a given id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationOp {
    Link,
    Unlink,
}

/// A single failed relation call, kept with its cause.
#[derive(Debug)]
pub struct RelationFailure<C> {
    pub child: C,
    pub op: RelationOp,
    pub error: CatalogError,
}

/// What a reconciliation actually did. Ids appear exactly once: in `added`
/// or `removed` on success, in `failed` otherwise; failures are reported,
/// never silently dropped.
#[derive(Debug)]
pub struct ReconcileOutcome<C> {
    pub added: Vec<C>,
    pub removed: Vec<C>,
    pub failed: Vec<RelationFailure<C>>,
}

impl<C> Default for ReconcileOutcome<C> {
    fn default() -> Self {
        ReconcileOutcome {
            added: Vec::new(),
            removed: Vec::new(),
            failed: Vec::new(),
        }
    }
}

impl<C> ReconcileOutcome<C> {
    /// Every call succeeded (including the zero-call case).
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Nothing needed doing and nothing was attempted.
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.failed.is_empty()
    }
}

/// Converge the persisted relation onto the desired selection.
///
/// Computes the diff, then issues one independent call per id, awaiting
/// them in turn. Failures are recorded in the outcome and do not abort the
/// batch. Re-running with an unchanged selection is a no-op: equal sets
/// issue zero calls.
///
/// For a parent that was just created, pass an empty `current` set; every
/// desired id becomes an add.
pub async fn reconcile<P, C, E>(
    editor: &E,
    parent: P,
    current: &BTreeSet<C>,
    desired: &BTreeSet<C>,
) -> ReconcileOutcome<C>
where
    P: Copy + Send + Sync + Display,
    C: Copy + Send + Sync + Display + Ord,
    E: RelationEditor<P, C> + ?Sized,
{
    apply_diff(editor, parent, RelationDiff::between(current, desired)).await
}

/// Apply a precomputed [`RelationDiff`]. Exposed separately so callers can
/// show the pending operations before committing them.
pub async fn apply_diff<P, C, E>(
    editor: &E,
    parent: P,
    diff: RelationDiff<C>,
) -> ReconcileOutcome<C>
where
    P: Copy + Send + Sync + Display,
    C: Copy + Send + Sync + Display,
    E: RelationEditor<P, C> + ?Sized,
{
    let mut outcome = ReconcileOutcome::default();

    if diff.is_noop() {
        debug!(%parent, "relation already converged, no calls issued");
        return outcome;
    }

    for child in diff.to_add {
        match editor.link(parent, child).await {
            Ok(()) => outcome.added.push(child),
            Err(error) => {
                warn!(%parent, %child, %error, "failed to add relation");
                outcome.failed.push(RelationFailure {
                    child,
                    op: RelationOp::Link,
                    error,
                });
            }
        }
    }

    for child in diff.to_remove {
        match editor.unlink(parent, child).await {
            Ok(()) => outcome.removed.push(child),
            Err(error) => {
                warn!(%parent, %child, %error, "failed to remove relation");
                outcome.failed.push(RelationFailure {
                    child,
                    op: RelationOp::Unlink,
                    error,
                });
            }
        }
    }

    debug!(
        %parent,
        added = outcome.added.len(),
        removed = outcome.removed.len(),
        failed = outcome.failed.len(),
        "relation reconciled"
    );

    outcome
}

/// The plan ↔ workout relation of any [`CatalogApi`].
#[derive(Debug)]
pub struct PlanWorkouts<'a, A: ?Sized>(pub &'a A);

#[async_trait]
impl<A> RelationEditor<PlanId, WorkoutId> for PlanWorkouts<'_, A>
where
    A: CatalogApi + ?Sized,
{
    async fn link(&self, parent: PlanId, child: WorkoutId) -> CatalogResult<()> {
        self.0.add_workout_to_plan(parent, child).await
    }

    async fn unlink(&self, parent: PlanId, child: WorkoutId) -> CatalogResult<()> {
        self.0.remove_workout_from_plan(parent, child).await
    }
}

/// The workout ↔ exercise relation of any [`CatalogApi`].
#[derive(Debug)]
pub struct WorkoutExercises<'a, A: ?Sized>(pub &'a A);

#[async_trait]
impl<A> RelationEditor<WorkoutId, ExerciseId> for WorkoutExercises<'_, A>
where
    A: CatalogApi + ?Sized,
{
    async fn link(&self, parent: WorkoutId, child: ExerciseId) -> CatalogResult<()> {
        self.0.add_exercise_to_workout(parent, child).await
    }

    async fn unlink(&self, parent: WorkoutId, child: ExerciseId) -> CatalogResult<()> {
        self.0.remove_exercise_from_workout(parent, child).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_is_symmetric_difference_split_by_side() {
        let current: BTreeSet<i64> = [1, 2].into();
        let desired: BTreeSet<i64> = [2, 3].into();
        let diff = RelationDiff::between(&current, &desired);
        assert_eq!(diff.to_add, vec![3]);
        assert_eq!(diff.to_remove, vec![1]);
    }

    #[test]
    fn equal_sets_diff_to_a_noop() {
        let ids: BTreeSet<i64> = [4, 5, 6].into();
        assert!(RelationDiff::between(&ids, &ids).is_noop());
    }

    #[test]
    fn empty_current_adds_everything() {
        let current = BTreeSet::new();
        let desired: BTreeSet<i64> = [7, 8].into();
        let diff = RelationDiff::between(&current, &desired);
        assert_eq!(diff.to_add, vec![7, 8]);
        assert!(diff.to_remove.is_empty());
    }
}
