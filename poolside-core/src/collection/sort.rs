//! Field-keyed sorting over collection items.
//!
//! Every sortable column across the list screens is one [`SortField`]
//! variant; items surface a typed [`SortValue`] per field and the comparator
//! lives here once, so tie-break and missing-data behavior cannot drift
//! between screens.

use super::item::ViewItem;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Sortable fields across the catalog's list screens.
///
/// Raw fields come straight off the entity; `ExerciseCount` and the fields
/// after it are derived by the augmentation pipeline and fall back to zero
/// when an item was not augmented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Title,
    Category,
    CreatedAt,
    UpdatedAt,
    ExerciseCount,
    SetCount,
    TotalDistance,
    EstimatedDuration,
    WorkoutCount,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// The active sort key and direction of one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for SortState {
    /// List screens open sorted by id ascending (insertion order).
    fn default() -> Self {
        SortState {
            field: SortField::Id,
            order: SortOrder::Ascending,
        }
    }
}

impl SortState {
    pub fn ascending(field: SortField) -> Self {
        SortState {
            field,
            order: SortOrder::Ascending,
        }
    }

    pub fn descending(field: SortField) -> Self {
        SortState {
            field,
            order: SortOrder::Descending,
        }
    }

    /// Header-click behavior shared by every list screen: selecting the
    /// active field flips the direction, selecting another field starts
    /// over ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.order = match self.order {
                SortOrder::Ascending => SortOrder::Descending,
                SortOrder::Descending => SortOrder::Ascending,
            };
        } else {
            self.field = field;
            self.order = SortOrder::Ascending;
        }
    }
}

/// A typed sort key extracted from an item.
///
/// A given [`SortField`] always produces the same variant, so comparisons
/// only ever see matching variants; the cross-variant ordering exists to
/// keep `Ord` total and is otherwise meaningless.
#[derive(Debug, Clone)]
pub enum SortValue {
    /// Integer keys (ids).
    Integer(i64),
    /// Text keys, compared byte-wise (ordinal, not locale collation).
    Text(String),
    /// Fractional numeric keys (estimated duration).
    Number(f64),
    /// Derived counts; items without augmented stats report 0.
    Count(u64),
    /// Timestamps. A missing date compares as the oldest possible instant,
    /// so ascending puts never-dated rows first and descending puts them
    /// last.
    Date(Option<DateTime<Utc>>),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Integer(_) => 0,
            SortValue::Text(_) => 1,
            SortValue::Number(_) => 2,
            SortValue::Count(_) => 3,
            SortValue::Date(_) => 4,
        }
    }
}

impl PartialEq for SortValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortValue {}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        use SortValue::*;
        match (self, other) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            (Number(a), Number(b)) => a.total_cmp(b),
            (Count(a), Count(b)) => a.cmp(b),
            // None is the oldest possible instant.
            (Date(a), Date(b)) => match (a, b) {
                (Some(a), Some(b)) => a.cmp(b),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => Ordering::Equal,
            },
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

/// Compare two items under the given sort state.
pub fn compare<T: ViewItem>(a: &T, b: &T, state: &SortState) -> Ordering {
    let ordering = a.sort_value(state.field).cmp(&b.sort_value(state.field));
    match state.order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}

/// Sort a collection in place under the given sort state.
///
/// Uses the standard library's stable sort: items with equal keys keep
/// their relative pre-sort order.
pub fn sort_items<T: ViewItem>(items: &mut [T], state: &SortState) {
    items.sort_by(|a, b| compare(a, b, state));
}
