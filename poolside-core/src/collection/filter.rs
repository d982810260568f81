//! Search and categorical filtering.

use super::item::ViewItem;
use poolside_model::{
    ExerciseCategory, ExerciseLevel, PlanLevel, WorkoutCategory,
};
use std::collections::BTreeMap;

/// A categorical axis a screen can filter on.
///
/// Most screens expose one (`Category`); the exercise screens filter on the
/// swimmer level as a second, independent axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryDimension {
    Category,
    Level,
}

/// One dimension's dropdown selection. `All` is the identity sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(String),
}

impl CategorySelection {
    pub fn only(value: impl Into<String>) -> Self {
        CategorySelection::Only(value.into())
    }
}

// The closed vocabularies select by their exact wire spelling.

impl From<WorkoutCategory> for CategorySelection {
    fn from(category: WorkoutCategory) -> Self {
        CategorySelection::only(category.api_name())
    }
}

impl From<PlanLevel> for CategorySelection {
    fn from(level: PlanLevel) -> Self {
        CategorySelection::only(level.api_name())
    }
}

impl From<ExerciseCategory> for CategorySelection {
    fn from(category: ExerciseCategory) -> Self {
        CategorySelection::only(category.api_name())
    }
}

impl From<ExerciseLevel> for CategorySelection {
    fn from(level: ExerciseLevel) -> Self {
        CategorySelection::only(level.api_name())
    }
}

/// The active search text and per-dimension category selections of a view.
///
/// All active predicates combine with logical AND. An unset dimension
/// behaves as [`CategorySelection::All`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search: String,
    categories: BTreeMap<CategoryDimension, CategorySelection>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(search: impl Into<String>) -> Self {
        FilterState {
            search: search.into(),
            categories: BTreeMap::new(),
        }
    }

    pub fn select(&mut self, dimension: CategoryDimension, selection: CategorySelection) {
        match selection {
            // Dropping the entry keeps `is_identity` a plain emptiness check.
            CategorySelection::All => {
                self.categories.remove(&dimension);
            }
            only => {
                self.categories.insert(dimension, only);
            }
        }
    }

    pub fn selection(&self, dimension: CategoryDimension) -> &CategorySelection {
        static ALL: CategorySelection = CategorySelection::All;
        self.categories.get(&dimension).unwrap_or(&ALL)
    }

    /// True when the filter matches everything.
    pub fn is_identity(&self) -> bool {
        self.search.is_empty() && self.categories.is_empty()
    }

    fn active_selections(
        &self,
    ) -> impl Iterator<Item = (CategoryDimension, &str)> {
        self.categories.iter().filter_map(|(dim, sel)| match sel {
            CategorySelection::Only(value) => Some((*dim, value.as_str())),
            CategorySelection::All => None,
        })
    }
}

/// Does `item` satisfy every active predicate of `state`?
///
/// Empty search matches everything; search is a case-insensitive substring
/// test over the item's plain-text search fields; each non-`All` category
/// selection requires equality on its dimension. An empty result set is a
/// valid outcome, not an error.
pub fn matches<T: ViewItem>(item: &T, state: &FilterState) -> bool {
    if !state.search.is_empty() {
        let needle = state.search.to_lowercase();
        let hit = item
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));
        if !hit {
            return false;
        }
    }

    state
        .active_selections()
        .all(|(dimension, wanted)| item.category(dimension) == Some(wanted))
}
