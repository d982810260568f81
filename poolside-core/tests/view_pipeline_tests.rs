//! End-to-end scenarios for the filter → sort → paginate pipeline.

use poolside_core::collection::{
    CategoryDimension, CategorySelection, FilterState, PageState, SortField,
    SortState, ViewState, matches, page_count, paginate, view,
};
use poolside_model::{
    Exercise, ExerciseId, Workout, WorkoutCategory, WorkoutId, WorkoutStats,
    WorkoutWithStats,
};

fn workout(id: i64, title: &str, category: Option<&str>) -> Workout {
    Workout {
        id: WorkoutId(id),
        title: title.to_string(),
        description: None,
        workout_category: category.map(str::to_string),
        created_at: None,
        updated_at: None,
    }
}

fn exercise(id: i64, title: &str, category: &str, level: &str) -> Exercise {
    Exercise {
        id: ExerciseId(id),
        title: title.to_string(),
        description: None,
        exercise_category: Some(category.to_string()),
        exercise_level: Some(level.to_string()),
        upload_id: None,
        created_at: None,
        updated_at: None,
    }
}

fn numbered_workouts(count: usize) -> Vec<Workout> {
    (1..=count as i64)
        .map(|id| workout(id, &format!("Séance {id}"), None))
        .collect()
}

#[test]
fn identity_filter_matches_every_item() {
    let state = FilterState::default();
    for item in numbered_workouts(10) {
        assert!(matches(&item, &state));
    }
}

#[test]
fn search_matches_three_of_five_titles() {
    let workouts = vec![
        workout(1, "Vitesse pure", Some("Vitesse")),
        workout(2, "Bloc vitesse + départs", Some("Vitesse")),
        workout(3, "Endurance de base", Some("Aero 1")),
        workout(4, "VITESSE lactique", Some("Vitesse")),
        workout(5, "Technique dos", Some("Technique")),
    ];
    let state = FilterState::with_search("vitesse");
    let hits: Vec<_> = workouts
        .iter()
        .filter(|w| matches(*w, &state))
        .collect();
    assert_eq!(hits.len(), 3);
}

#[test]
fn search_reads_markup_as_plain_text() {
    let mut with_markup = workout(1, "Sprint", None);
    with_markup.description =
        Some("<p>Travail de <b>vitesse</b> en hypoxie</p>".to_string());
    let plain = workout(2, "Souplesse", None);

    let state = FilterState::with_search("vitesse");
    assert!(matches(&with_markup, &state));
    assert!(!matches(&plain, &state));
}

#[test]
fn category_and_search_predicates_combine_with_and() {
    let workouts = vec![
        workout(1, "Sprint 25m", Some("Vitesse")),
        workout(2, "Sprint 50m", Some("Mixte")),
        workout(3, "Souplesse", Some("Vitesse")),
    ];
    let mut state = FilterState::with_search("sprint");
    state.select(
        CategoryDimension::Category,
        WorkoutCategory::Vitesse.into(),
    );

    let hits: Vec<_> = workouts
        .iter()
        .filter(|w| matches(*w, &state))
        .map(|w| w.id)
        .collect();
    assert_eq!(hits, vec![WorkoutId(1)]);
}

#[test]
fn exercises_filter_on_two_dimensions_independently() {
    let exercises = vec![
        exercise(1, "Rattrapé", "Correctif De Nage", "Débutant"),
        exercise(2, "Opposition", "Correctif De Nage", "Avancé"),
        exercise(3, "Culbute", "Travail de Base", "Débutant"),
    ];
    let mut state = FilterState::default();
    state.select(
        CategoryDimension::Category,
        CategorySelection::only("Correctif De Nage"),
    );
    state.select(CategoryDimension::Level, CategorySelection::only("Débutant"));

    let hits: Vec<_> = exercises
        .iter()
        .filter(|e| matches(*e, &state))
        .map(|e| e.id)
        .collect();
    assert_eq!(hits, vec![ExerciseId(1)]);
}

#[test]
fn twenty_five_items_paginate_into_three_pages() {
    let workouts = numbered_workouts(25);
    let state = ViewState::default();
    let first = view(&workouts, &state);
    assert_eq!(first.page_count, 3);
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.filtered_len, 25);

    let mut last = ViewState::default();
    last.set_page_index(2);
    assert_eq!(view(&workouts, &last).items.len(), 5);
}

#[test]
fn out_of_range_page_is_empty_but_harmless() {
    let workouts = numbered_workouts(3);
    let mut state = ViewState::default();
    state.set_page_index(12);
    let page = view(&workouts, &state);
    assert!(page.items.is_empty());
    assert_eq!(page.page_count, 1);
}

#[test]
fn concatenated_pages_are_exactly_the_sorted_filtered_collection() {
    let workouts = numbered_workouts(23);
    let mut state = ViewState::default();
    state.set_page_size(5);
    state.toggle_sort(SortField::Title);

    let full = {
        let mut all = ViewState::default();
        all.toggle_sort(SortField::Title);
        all.set_page_size(usize::MAX);
        view(&workouts, &all)
    };

    let mut rebuilt = Vec::new();
    let count = page_count(full.filtered_len, 5);
    for index in 0..count {
        state.set_page_index(index);
        rebuilt.extend(view(&workouts, &state).items.iter().map(|w| w.id));
    }

    let expected: Vec<_> = full.items.iter().map(|w| w.id).collect();
    assert_eq!(rebuilt, expected);
    assert_eq!(rebuilt.len(), 23);
}

#[test]
fn descending_reverses_ascending_when_keys_are_unique() {
    let workouts = vec![
        workout(3, "c", None),
        workout(1, "a", None),
        workout(2, "b", None),
    ];

    let mut ascending = ViewState::default();
    ascending.sort = SortState::ascending(SortField::Title);
    let mut descending = ViewState::default();
    descending.sort = SortState::descending(SortField::Title);

    let up: Vec<_> = view(&workouts, &ascending)
        .items
        .iter()
        .map(|w| w.id)
        .collect();
    let mut down: Vec<_> = view(&workouts, &descending)
        .items
        .iter()
        .map(|w| w.id)
        .collect();
    down.reverse();
    assert_eq!(up, down);
}

#[test]
fn derived_fields_sort_augmented_workouts() {
    let rows = vec![
        WorkoutWithStats {
            workout: workout(1, "Courte", None),
            stats: WorkoutStats {
                exercise_count: 1,
                set_count: 2,
                total_distance_m: 800,
                estimated_duration_min: 9.0,
            },
        },
        WorkoutWithStats {
            workout: workout(2, "Longue", None),
            stats: WorkoutStats {
                exercise_count: 4,
                set_count: 6,
                total_distance_m: 3200,
                estimated_duration_min: 41.5,
            },
        },
        WorkoutWithStats {
            workout: workout(3, "Dégradée", None),
            stats: WorkoutStats::default(),
        },
    ];

    let mut state = ViewState::default();
    state.sort = SortState::descending(SortField::TotalDistance);
    let ids: Vec<_> = view(&rows, &state)
        .items
        .iter()
        .map(|row| row.workout.id)
        .collect();
    assert_eq!(ids, vec![WorkoutId(2), WorkoutId(1), WorkoutId(3)]);
}

#[test]
fn empty_result_set_is_a_valid_outcome() {
    let workouts = numbered_workouts(4);
    let mut state = ViewState::default();
    state.set_search("papillon");
    let page = view(&workouts, &state);
    assert_eq!(page.filtered_len, 0);
    assert_eq!(page.page_count, 0);
    assert!(page.items.is_empty());
}

#[test]
fn raw_paginate_contract_matches_the_view() {
    let items: Vec<i64> = (0..25).collect();
    // The paginator itself is generic over any slice.
    let page = paginate(&items, &PageState::new(2, 10));
    assert_eq!(page.page_count, 3);
    assert_eq!(page.items.len(), 5);
}
