use athletica::data;
use athletica::model::{apply, Exercise, ListParams, SortKey, StatusFilter, WorkoutRecord};

fn params(query: &str, status: StatusFilter, sort: SortKey) -> ListParams {
    ListParams {
        query: query.to_string(),
        status,
        sort,
    }
}

fn titles(rows: &[WorkoutRecord]) -> Vec<&str> {
    rows.iter().map(|workout| workout.title.as_str()).collect()
}

fn record(title: &str, category: &str, duration: &str, completed: bool) -> WorkoutRecord {
    WorkoutRecord {
        title: title.to_string(),
        category: category.to_string(),
        duration: duration.to_string(),
        exercises: vec![Exercise {
            name: "Rows".to_string(),
            sets: 3,
            reps: 10,
        }],
        completed,
    }
}

#[test]
fn test_default_params_keep_catalog_order() {
    let source = data::sample_workouts();
    let rows = apply(&source, &ListParams::default());

    assert_eq!(
        titles(&rows),
        vec![
            "Upper Body Strength",
            "Lower Body Focus",
            "HIIT Cardio",
            "Core & Abs",
            "Full Body Workout",
            "Endurance Run",
        ]
    );
}

#[test]
fn test_search_body_matches_three_workouts() {
    let source = data::sample_workouts();
    let rows = apply(
        &source,
        &params("body", StatusFilter::All, SortKey::Recent),
    );

    assert_eq!(
        titles(&rows),
        vec!["Upper Body Strength", "Lower Body Focus", "Full Body Workout"]
    );
}

#[test]
fn test_search_cardio_matches_only_the_hiit_workout() {
    let source = data::sample_workouts();
    let rows = apply(
        &source,
        &params("cardio", StatusFilter::All, SortKey::Recent),
    );

    // Endurance Run matches neither title nor category.
    assert_eq!(titles(&rows), vec!["HIIT Cardio"]);
}

#[test]
fn test_completed_sorted_by_duration() {
    let source = data::sample_workouts();
    let rows = apply(
        &source,
        &params("", StatusFilter::Completed, SortKey::Duration),
    );

    assert_eq!(
        titles(&rows),
        vec!["Upper Body Strength", "Endurance Run", "Core & Abs"]
    );
    let minutes: Vec<u32> = rows
        .iter()
        .map(|w| w.leading_minutes().unwrap_or(0))
        .collect();
    assert_eq!(minutes, vec![45, 40, 25]);
}

#[test]
fn test_search_is_case_insensitive() {
    let source = data::sample_workouts();
    let lower = apply(&source, &params("body", StatusFilter::All, SortKey::Recent));
    let upper = apply(&source, &params("BODY", StatusFilter::All, SortKey::Recent));
    let mixed = apply(&source, &params("BoDy", StatusFilter::All, SortKey::Recent));

    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
    assert_eq!(lower.len(), 3);
}

#[test]
fn test_search_matches_category_when_title_does_not() {
    let source = data::sample_workouts();
    let rows = apply(
        &source,
        &params("strength", StatusFilter::All, SortKey::Recent),
    );

    // "Lower Body Focus" and "Full Body Workout" match on category alone.
    assert_eq!(
        titles(&rows),
        vec!["Upper Body Strength", "Lower Body Focus", "Full Body Workout"]
    );
}

#[test]
fn test_completed_filter_keeps_finished_workouts() {
    let source = data::sample_workouts();
    let rows = apply(&source, &params("", StatusFilter::Completed, SortKey::Recent));

    assert_eq!(
        titles(&rows),
        vec!["Upper Body Strength", "Core & Abs", "Endurance Run"]
    );
    assert!(rows.iter().all(|workout| workout.completed));
}

#[test]
fn test_upcoming_filter_keeps_scheduled_workouts() {
    let source = data::sample_workouts();
    let rows = apply(&source, &params("", StatusFilter::Upcoming, SortKey::Recent));

    assert_eq!(
        titles(&rows),
        vec!["Lower Body Focus", "HIIT Cardio", "Full Body Workout"]
    );
    assert!(rows.iter().all(|workout| !workout.completed));
}

#[test]
fn test_status_filters_partition_the_catalog() {
    let source = data::sample_workouts();
    let completed = apply(&source, &params("", StatusFilter::Completed, SortKey::Recent));
    let upcoming = apply(&source, &params("", StatusFilter::Upcoming, SortKey::Recent));

    assert_eq!(completed.len() + upcoming.len(), source.len());
    for workout in &completed {
        assert!(!upcoming.contains(workout));
    }
}

#[test]
fn test_duration_sort_orders_longest_first() {
    let source = data::sample_workouts();
    let rows = apply(&source, &params("", StatusFilter::All, SortKey::Duration));

    assert_eq!(
        titles(&rows),
        vec![
            "Full Body Workout",
            "Lower Body Focus",
            "Upper Body Strength",
            "Endurance Run",
            "HIIT Cardio",
            "Core & Abs",
        ]
    );
}

#[test]
fn test_type_sort_groups_categories_alphabetically() {
    let source = data::sample_workouts();
    let rows = apply(&source, &params("", StatusFilter::All, SortKey::Type));

    assert_eq!(
        titles(&rows),
        vec![
            "HIIT Cardio",
            "Core & Abs",
            "Endurance Run",
            "Upper Body Strength",
            "Lower Body Focus",
            "Full Body Workout",
        ]
    );
}

#[test]
fn test_search_composes_with_status_filter() {
    let source = data::sample_workouts();
    let rows = apply(
        &source,
        &params("body", StatusFilter::Upcoming, SortKey::Recent),
    );

    assert_eq!(titles(&rows), vec!["Lower Body Focus", "Full Body Workout"]);
}

#[test]
fn test_all_three_stages_compose() {
    let source = data::sample_workouts();
    let rows = apply(
        &source,
        &params("body", StatusFilter::Upcoming, SortKey::Duration),
    );

    assert_eq!(titles(&rows), vec!["Full Body Workout", "Lower Body Focus"]);
}

#[test]
fn test_duration_ties_keep_filtered_order() {
    let source = vec![
        record("First", "Strength", "30 min", true),
        record("Second", "Cardio", "30 min", false),
        record("Third", "Core", "30 min", true),
    ];
    let rows = apply(&source, &params("", StatusFilter::All, SortKey::Duration));

    assert_eq!(titles(&rows), vec!["First", "Second", "Third"]);
}

#[test]
fn test_type_ties_keep_filtered_order() {
    let source = vec![
        record("Alpha", "Strength", "30 min", true),
        record("Beta", "strength", "40 min", false),
        record("Gamma", "STRENGTH", "50 min", true),
    ];
    let rows = apply(&source, &params("", StatusFilter::All, SortKey::Type));

    assert_eq!(titles(&rows), vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn test_unparseable_duration_sorts_last() {
    let source = vec![
        record("Short", "Cardio", "20 min", true),
        record("Odd", "Cardio", "about an hour", true),
        record("Long", "Cardio", "60 min", true),
    ];
    let rows = apply(&source, &params("", StatusFilter::All, SortKey::Duration));

    assert_eq!(titles(&rows), vec!["Long", "Short", "Odd"]);
}

#[test]
fn test_search_without_matches_yields_empty_list() {
    let source = data::sample_workouts();
    let rows = apply(
        &source,
        &params("zzz no such workout", StatusFilter::All, SortKey::Recent),
    );

    assert!(rows.is_empty());
}

#[test]
fn test_apply_is_idempotent() {
    let source = data::sample_workouts();
    let once = apply(
        &source,
        &params("body", StatusFilter::Upcoming, SortKey::Duration),
    );
    let twice = apply(
        &once,
        &params("body", StatusFilter::Upcoming, SortKey::Duration),
    );

    assert_eq!(once, twice);
}

#[test]
fn test_apply_leaves_source_untouched() {
    let source = data::sample_workouts();
    let before = source.clone();

    apply(&source, &params("body", StatusFilter::Completed, SortKey::Type));

    assert_eq!(source, before);
}
