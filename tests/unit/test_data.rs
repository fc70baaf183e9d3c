use athletica::data;
use athletica::model::metrics::Trend;
use athletica::model::profile::UnitSystem;
use athletica::model::progress::MetricKind;
use chrono::{Local, TimeZone};

#[test]
fn test_catalog_has_six_workouts_in_schedule_order() {
    let workouts = data::sample_workouts();
    let titles: Vec<&str> = workouts.iter().map(|w| w.title.as_str()).collect();

    assert_eq!(
        titles,
        vec![
            "Upper Body Strength",
            "Lower Body Focus",
            "HIIT Cardio",
            "Core & Abs",
            "Full Body Workout",
            "Endurance Run",
        ]
    );

    for workout in &workouts {
        assert!(!workout.exercises.is_empty(), "{} has no exercises", workout.title);
        assert!(
            workout.leading_minutes().is_some(),
            "{} has an unparseable duration",
            workout.title
        );
    }
}

#[test]
fn test_featured_workouts_come_from_the_catalog() {
    let catalog = data::sample_workouts();
    let featured = data::featured_workouts();

    let titles: Vec<&str> = featured.iter().map(|w| w.title.as_str()).collect();
    assert_eq!(titles, vec!["Upper Body Strength", "HIIT Cardio"]);

    for workout in &featured {
        assert!(catalog.contains(workout));
    }
}

#[test]
fn test_dashboard_metrics_shape() {
    let metrics = data::dashboard_metrics();
    let titles: Vec<&str> = metrics.iter().map(|m| m.title.as_str()).collect();

    assert_eq!(
        titles,
        vec!["Workouts", "Calories Burned", "Personal Records", "Avg. Heart Rate"]
    );

    // Heart rate is the one falling metric on the dashboard.
    assert_eq!(metrics[3].trend, Trend::Down);
    assert_eq!(metrics[3].change.as_deref(), Some("3%"));
    for metric in &metrics[..3] {
        assert_eq!(metric.trend, Trend::Up);
        assert!(metric.change.is_some());
    }
}

#[test]
fn test_weekly_overview_covers_the_full_week() {
    let overview = data::weekly_overview();
    assert_eq!(overview.len(), 2);

    for series in &overview {
        assert_eq!(series.points.len(), 7);
        assert_eq!(series.points[0].label, "Mon");
        assert_eq!(series.points[6].label, "Sun");
    }
    assert_eq!(overview[0].kind, MetricKind::Strength);
    assert_eq!(overview[1].kind, MetricKind::Cardio);
}

#[test]
fn test_monthly_progress_grid() {
    let series = data::monthly_progress();
    let titles: Vec<&str> = series.iter().map(|s| s.title.as_str()).collect();

    assert_eq!(
        titles,
        vec![
            "Strength Progress",
            "Cardio Distance",
            "Energy Level",
            "Resting Heart Rate",
        ]
    );

    for s in &series {
        assert_eq!(s.points.len(), 7);
        assert_eq!(s.points[0].label, "Jan");
        assert_eq!(s.points[6].label, "Jul");
    }

    let heart = &series[3];
    assert_eq!(heart.kind, MetricKind::Heart);
    assert_eq!(heart.min_value(), 64.0);
    assert_eq!(heart.max_value(), 72.0);
}

#[test]
fn test_training_time_panel_data() {
    let series = data::training_time_series();
    assert_eq!(series.title, "Workout Duration");
    assert_eq!(series.kind, MetricKind::Time);
    assert_eq!(series.points.len(), 7);
    assert_eq!(series.latest().map(|p| p.value), Some(175.0));

    let summary = data::training_time_summary();
    assert_eq!(summary.total, "54 hrs");
    assert_eq!(summary.average, "45 min");
    assert_eq!(summary.longest, "90 min");
    assert_eq!(summary.shortest, "15 min");
}

#[test]
fn test_progress_metrics_have_no_change_badges() {
    let metrics = data::progress_metrics();
    assert_eq!(metrics.len(), 4);
    assert!(metrics.iter().all(|m| m.change.is_none()));
    assert_eq!(metrics[0].value, "72");
    assert_eq!(metrics[1].value, "54 hrs");
}

#[test]
fn test_recent_activity_is_anchored_to_now() {
    let now = Local
        .with_ymd_and_hms(2023, 7, 24, 12, 0, 0)
        .single()
        .expect("fixed timestamp");
    let activities = data::recent_activity(now);

    assert_eq!(activities.len(), 3);
    assert_eq!(activities[0].title, "Completed Workout");
    assert_eq!(activities[0].relative_label(now), "Today, 9:30 AM");
    assert_eq!(activities[1].title, "New Achievement");
    assert_eq!(activities[1].relative_label(now), "Yesterday, 6:15 PM");
    assert_eq!(activities[2].title, "New Personal Record");
    assert_eq!(activities[2].relative_label(now), "2 days ago");

    // Newest first.
    for pair in activities.windows(2) {
        assert!(pair[0].occurred_at >= pair[1].occurred_at);
    }
}

#[test]
fn test_profile_fixtures() {
    let identity = data::athlete_profile();
    assert_eq!(identity.name, "Alex Johnson");
    assert_eq!(identity.tagline, "Fitness Enthusiast");
    assert_eq!(identity.focus_areas.len(), 3);

    let stats = data::profile_stats();
    let labels: Vec<&str> = stats.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Workouts", "Achievements", "Records", "Streak"]);

    let achievements = data::achievements();
    assert_eq!(achievements.len(), 4);
    for pair in achievements.windows(2) {
        assert!(pair[0].earned_on >= pair[1].earned_on);
    }

    let records = data::personal_records();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0].exercise, "Bench Press");
    assert_eq!(records[0].value, "185 lbs");
    for pair in records.windows(2) {
        assert!(pair[0].recorded_on >= pair[1].recorded_on);
    }

    let preferences = data::default_preferences();
    assert!(preferences.notifications);
    assert!(!preferences.dark_mode);
    assert_eq!(preferences.units, UnitSystem::Imperial);

    let account = data::account_settings();
    assert_eq!(account.email, "alex.johnson@example.com");
}
