//! The item abstraction the engine filters, sorts and paginates.

use super::filter::CategoryDimension;
use super::sort::{SortField, SortValue};
use super::text::plain_text;
use poolside_model::{
    Exercise, Page, Plan, PlanWithStats, Workout, WorkoutWithStats,
};
use std::borrow::Cow;

/// A collection entry the view engine can work with.
///
/// Implementations decide which fields the search predicate reads, what each
/// categorical dimension means for the entity, and how every [`SortField`]
/// maps to a typed key. Fields an entity does not carry degrade explicitly:
/// `None` for categories, zero counts and missing dates for sort keys.
pub trait ViewItem {
    /// Plain-text haystacks for the search predicate. Rich-text fields must
    /// be reduced to plain text here, not at the call site.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// The item's value on a categorical filter dimension, `None` when the
    /// entity is uncategorised or the dimension does not apply.
    fn category(&self, dimension: CategoryDimension) -> Option<&str>;

    /// Typed sort key for `field`.
    fn sort_value(&self, field: SortField) -> SortValue;
}

impl ViewItem for Workout {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Borrowed(self.title.as_str())];
        if let Some(description) = &self.description {
            fields.push(Cow::Owned(plain_text(description)));
        }
        fields
    }

    fn category(&self, dimension: CategoryDimension) -> Option<&str> {
        match dimension {
            CategoryDimension::Category => self.workout_category.as_deref(),
            CategoryDimension::Level => None,
        }
    }

    fn sort_value(&self, field: SortField) -> SortValue {
        match field {
            SortField::Id => SortValue::Integer(self.id.as_i64()),
            SortField::Title => SortValue::Text(self.title.clone()),
            SortField::Category => SortValue::Text(
                self.workout_category.clone().unwrap_or_default(),
            ),
            SortField::CreatedAt => SortValue::Date(self.created_at),
            SortField::UpdatedAt => SortValue::Date(self.updated_at),
            // Derived fields are absent on a raw workout.
            SortField::ExerciseCount
            | SortField::SetCount
            | SortField::TotalDistance
            | SortField::WorkoutCount => SortValue::Count(0),
            SortField::EstimatedDuration => SortValue::Number(0.0),
        }
    }
}

impl ViewItem for WorkoutWithStats {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        self.workout.search_fields()
    }

    fn category(&self, dimension: CategoryDimension) -> Option<&str> {
        self.workout.category(dimension)
    }

    fn sort_value(&self, field: SortField) -> SortValue {
        match field {
            SortField::ExerciseCount => {
                SortValue::Count(self.stats.exercise_count as u64)
            }
            SortField::SetCount => SortValue::Count(self.stats.set_count as u64),
            SortField::TotalDistance => {
                SortValue::Count(u64::from(self.stats.total_distance_m))
            }
            SortField::EstimatedDuration => {
                SortValue::Number(self.stats.estimated_duration_min)
            }
            raw => self.workout.sort_value(raw),
        }
    }
}

impl ViewItem for Exercise {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Borrowed(self.title.as_str())];
        if let Some(description) = &self.description {
            fields.push(Cow::Owned(plain_text(description)));
        }
        fields
    }

    fn category(&self, dimension: CategoryDimension) -> Option<&str> {
        match dimension {
            CategoryDimension::Category => self.exercise_category.as_deref(),
            CategoryDimension::Level => self.exercise_level.as_deref(),
        }
    }

    fn sort_value(&self, field: SortField) -> SortValue {
        match field {
            SortField::Id => SortValue::Integer(self.id.as_i64()),
            SortField::Title => SortValue::Text(self.title.clone()),
            SortField::Category => SortValue::Text(
                self.exercise_category.clone().unwrap_or_default(),
            ),
            SortField::CreatedAt => SortValue::Date(self.created_at),
            SortField::UpdatedAt => SortValue::Date(self.updated_at),
            SortField::ExerciseCount
            | SortField::SetCount
            | SortField::TotalDistance
            | SortField::WorkoutCount => SortValue::Count(0),
            SortField::EstimatedDuration => SortValue::Number(0.0),
        }
    }
}

impl ViewItem for Plan {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Borrowed(self.title.as_str())];
        if let Some(description) = &self.description {
            fields.push(Cow::Owned(plain_text(description)));
        }
        fields
    }

    fn category(&self, dimension: CategoryDimension) -> Option<&str> {
        match dimension {
            CategoryDimension::Category => self.plan_category.as_deref(),
            CategoryDimension::Level => None,
        }
    }

    fn sort_value(&self, field: SortField) -> SortValue {
        match field {
            SortField::Id => SortValue::Integer(self.id.as_i64()),
            SortField::Title => SortValue::Text(self.title.clone()),
            SortField::Category => {
                SortValue::Text(self.plan_category.clone().unwrap_or_default())
            }
            SortField::CreatedAt => SortValue::Date(self.created_at),
            SortField::UpdatedAt => SortValue::Date(self.updated_at),
            SortField::ExerciseCount
            | SortField::SetCount
            | SortField::TotalDistance
            | SortField::WorkoutCount => SortValue::Count(0),
            SortField::EstimatedDuration => SortValue::Number(0.0),
        }
    }
}

impl ViewItem for PlanWithStats {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        self.plan.search_fields()
    }

    fn category(&self, dimension: CategoryDimension) -> Option<&str> {
        self.plan.category(dimension)
    }

    fn sort_value(&self, field: SortField) -> SortValue {
        match field {
            SortField::WorkoutCount => {
                SortValue::Count(self.stats.workout_count as u64)
            }
            raw => self.plan.sort_value(raw),
        }
    }
}

impl ViewItem for Page {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.slug.as_str()),
        ];
        if let Some(content) = &self.content {
            fields.push(Cow::Owned(plain_text(content)));
        }
        fields
    }

    fn category(&self, _dimension: CategoryDimension) -> Option<&str> {
        None
    }

    fn sort_value(&self, field: SortField) -> SortValue {
        match field {
            SortField::Id => SortValue::Integer(self.id.as_i64()),
            SortField::Title => SortValue::Text(self.title.clone()),
            SortField::Category => SortValue::Text(String::new()),
            SortField::CreatedAt => SortValue::Date(self.created_at),
            SortField::UpdatedAt => SortValue::Date(self.updated_at),
            SortField::ExerciseCount
            | SortField::SetCount
            | SortField::TotalDistance
            | SortField::WorkoutCount => SortValue::Count(0),
            SortField::EstimatedDuration => SortValue::Number(0.0),
        }
    }
}
