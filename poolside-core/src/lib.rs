//! # Poolside Core
//!
//! Client-side core for the Poolside swim-training CMS. Every list screen of
//! the admin and user front ends is a view over the same machinery, provided
//! once here instead of once per screen:
//!
//! - **Collection views**: search, categorical filtering, multi-field
//!   sorting and pagination over in-memory collections ([`collection`])
//! - **Augmentation**: per-item derived statistics fetched from
//!   sub-resources with windowed concurrency ([`augment`])
//! - **Relation reconciliation**: diffing an edited selection against the
//!   persisted many-to-many relation and converging it with independent
//!   add/remove calls ([`reconcile`])
//! - **API abstraction**: the [`api::CatalogApi`] trait the engine runs
//!   against; the HTTP implementation lives in `poolside-client`
//!
//! View state is ephemeral and view-scoped: it is created with defaults when
//! a view activates, passed explicitly into every call, and dropped when the
//! view goes away. Nothing in this crate holds global mutable state.

pub mod api;
pub mod augment;
pub mod collection;
pub mod error;
pub mod reconcile;

pub use api::CatalogApi;
pub use augment::{
    PlanStatsSource, STATS_BATCH_SIZE, WorkoutStatsSource, augment_plans,
    augment_workouts,
};
pub use collection::{
    CategoryDimension, CategorySelection, FilterState, Page, PageState,
    SortField, SortOrder, SortState, ViewItem, ViewPage, ViewSession,
    ViewState, view,
};
pub use error::{CatalogError, CatalogResult};
pub use reconcile::{
    PlanWorkouts, ReconcileOutcome, RelationDiff, RelationEditor,
    RelationFailure, RelationOp, WorkoutExercises, reconcile,
};
