//! In-memory fixture catalogs. Every page renders from these
//! constructors; there is no persistence or network behind them.

use chrono::{DateTime, Duration, Local, NaiveDate, Timelike};

use crate::model::activity::{ActivityEntry, ActivityKind};
use crate::model::metrics::{MetricCard, Trend};
use crate::model::profile::{
    AccountSettings, Achievement, AthleteProfile, PersonalRecord, Preferences, StatHighlight,
    UnitSystem,
};
use crate::model::progress::{MetricKind, ProgressSeries, TrainingTimeSummary};
use crate::model::workout::{Exercise, WorkoutRecord};

fn exercise(name: &str, sets: u32, reps: u32) -> Exercise {
    Exercise {
        name: name.to_string(),
        sets,
        reps,
    }
}

fn workout(
    title: &str,
    category: &str,
    duration: &str,
    completed: bool,
    exercises: Vec<Exercise>,
) -> WorkoutRecord {
    WorkoutRecord {
        title: title.to_string(),
        category: category.to_string(),
        duration: duration.to_string(),
        exercises,
        completed,
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Full workout catalog, most recently scheduled first.
pub fn sample_workouts() -> Vec<WorkoutRecord> {
    vec![
        workout(
            "Upper Body Strength",
            "Strength",
            "45 min",
            true,
            vec![
                exercise("Bench Press", 3, 12),
                exercise("Pull-Ups", 3, 10),
                exercise("Shoulder Press", 3, 12),
                exercise("Bicep Curls", 3, 15),
            ],
        ),
        workout(
            "Lower Body Focus",
            "Strength",
            "50 min",
            false,
            vec![
                exercise("Squats", 4, 12),
                exercise("Deadlifts", 3, 10),
                exercise("Lunges", 3, 12),
                exercise("Calf Raises", 3, 20),
            ],
        ),
        workout(
            "HIIT Cardio",
            "Cardio",
            "30 min",
            false,
            vec![
                exercise("Burpees", 3, 15),
                exercise("Mountain Climbers", 3, 20),
                exercise("Jump Squats", 3, 15),
            ],
        ),
        workout(
            "Core & Abs",
            "Core",
            "25 min",
            true,
            vec![
                exercise("Planks", 3, 60),
                exercise("Russian Twists", 3, 20),
                exercise("Leg Raises", 3, 15),
                exercise("Mountain Climbers", 3, 20),
            ],
        ),
        workout(
            "Full Body Workout",
            "Strength",
            "60 min",
            false,
            vec![
                exercise("Push-ups", 4, 15),
                exercise("Kettlebell Swings", 3, 20),
                exercise("Dumbbell Rows", 3, 12),
                exercise("Lunges", 3, 12),
                exercise("Shoulder Press", 3, 12),
            ],
        ),
        workout(
            "Endurance Run",
            "Endurance",
            "40 min",
            true,
            vec![exercise("Treadmill Run", 1, 1), exercise("Cool Down", 1, 1)],
        ),
    ]
}

/// The two cards in the dashboard's "Next Workouts" section.
pub fn featured_workouts() -> Vec<WorkoutRecord> {
    sample_workouts()
        .into_iter()
        .filter(|w| w.title == "Upper Body Strength" || w.title == "HIIT Cardio")
        .collect()
}

/// Stat tiles across the top of the dashboard.
pub fn dashboard_metrics() -> Vec<MetricCard> {
    vec![
        MetricCard::new("Workouts", "18").with_change("12%", Trend::Up),
        MetricCard::new("Calories Burned", "12,456").with_change("8%", Trend::Up),
        MetricCard::new("Personal Records", "5").with_change("2", Trend::Up),
        MetricCard::new("Avg. Heart Rate", "72 bpm").with_change("3%", Trend::Down),
    ]
}

/// Mon..Sun series behind the dashboard's progress overview.
pub fn weekly_overview() -> Vec<ProgressSeries> {
    let days = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    let strength = [100.0, 120.0, 115.0, 130.0, 135.0, 145.0, 140.0];
    let cardio = [3.2, 4.5, 3.8, 5.1, 4.7, 6.2, 5.5];
    vec![
        ProgressSeries::new("Strength Progress", MetricKind::Strength, &zip(&days, &strength)),
        ProgressSeries::new("Cardio Distance", MetricKind::Cardio, &zip(&days, &cardio)),
    ]
}

/// Jan..Jul series for the progress page's chart grid.
pub fn monthly_progress() -> Vec<ProgressSeries> {
    let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"];
    let strength = [100.0, 120.0, 115.0, 130.0, 135.0, 150.0, 140.0];
    let cardio = [3.2, 4.5, 3.8, 5.1, 4.7, 6.2, 5.5];
    let energy = [72.0, 78.0, 82.0, 76.0, 85.0, 88.0, 92.0];
    let heart = [68.0, 72.0, 70.0, 67.0, 65.0, 68.0, 64.0];
    vec![
        ProgressSeries::new("Strength Progress", MetricKind::Strength, &zip(&months, &strength)),
        ProgressSeries::new("Cardio Distance", MetricKind::Cardio, &zip(&months, &cardio)),
        ProgressSeries::new("Energy Level", MetricKind::Energy, &zip(&months, &energy)),
        ProgressSeries::new("Resting Heart Rate", MetricKind::Heart, &zip(&months, &heart)),
    ]
}

/// Jan..Jul minutes behind the training time panel.
pub fn training_time_series() -> ProgressSeries {
    let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"];
    let minutes = [120.0, 140.0, 130.0, 150.0, 145.0, 160.0, 175.0];
    ProgressSeries::new("Workout Duration", MetricKind::Time, &zip(&months, &minutes))
}

/// Stat tiles across the top of the progress page.
pub fn progress_metrics() -> Vec<MetricCard> {
    vec![
        MetricCard::new("Workouts Completed", "72"),
        MetricCard::new("Total Time", "54 hrs"),
        MetricCard::new("Achievements", "12"),
        MetricCard::new("Avg. Workout Length", "45 min"),
    ]
}

pub fn training_time_summary() -> TrainingTimeSummary {
    TrainingTimeSummary {
        total: "54 hrs".to_string(),
        average: "45 min".to_string(),
        longest: "90 min".to_string(),
        shortest: "15 min".to_string(),
    }
}

/// Recent activity feed, newest first, with timestamps anchored to
/// `now`.
pub fn recent_activity(now: DateTime<Local>) -> Vec<ActivityEntry> {
    let this_morning = now
        .with_hour(9)
        .and_then(|t| t.with_minute(30))
        .and_then(|t| t.with_second(0))
        .unwrap_or(now);
    let yesterday = now - Duration::days(1);
    let yesterday_evening = yesterday
        .with_hour(18)
        .and_then(|t| t.with_minute(15))
        .and_then(|t| t.with_second(0))
        .unwrap_or(yesterday);
    vec![
        ActivityEntry::new(
            ActivityKind::Workout,
            "Completed Workout",
            "You completed Upper Body Strength workout",
            this_morning,
        ),
        ActivityEntry::new(
            ActivityKind::Achievement,
            "New Achievement",
            "Achieved 7-day workout streak",
            yesterday_evening,
        ),
        ActivityEntry::new(
            ActivityKind::Record,
            "New Personal Record",
            "Bench Press: 185 lbs",
            now - Duration::days(2),
        ),
    ]
}

pub fn athlete_profile() -> AthleteProfile {
    AthleteProfile {
        name: "Alex Johnson".to_string(),
        tagline: "Fitness Enthusiast".to_string(),
        focus_areas: vec![
            "Strength Training".to_string(),
            "Running".to_string(),
            "HIIT".to_string(),
        ],
    }
}

pub fn profile_stats() -> Vec<StatHighlight> {
    vec![
        StatHighlight {
            glyph: "≡",
            value: "72".to_string(),
            label: "Workouts".to_string(),
        },
        StatHighlight {
            glyph: "★",
            value: "12".to_string(),
            label: "Achievements".to_string(),
        },
        StatHighlight {
            glyph: "◎",
            value: "8".to_string(),
            label: "Records".to_string(),
        },
        StatHighlight {
            glyph: "↯",
            value: "7 days".to_string(),
            label: "Streak".to_string(),
        },
    ]
}

pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            title: "7-Day Streak".to_string(),
            description: "Completed workouts for 7 consecutive days".to_string(),
            earned_on: ymd(2023, 7, 24),
        },
        Achievement {
            title: "First Milestone".to_string(),
            description: "Completed 50 total workouts".to_string(),
            earned_on: ymd(2023, 7, 15),
        },
        Achievement {
            title: "Early Bird".to_string(),
            description: "Completed 10 workouts before 8 AM".to_string(),
            earned_on: ymd(2023, 7, 8),
        },
        Achievement {
            title: "Consistency King".to_string(),
            description: "Worked out 4+ times per week for a month".to_string(),
            earned_on: ymd(2023, 6, 30),
        },
    ]
}

pub fn personal_records() -> Vec<PersonalRecord> {
    vec![
        PersonalRecord {
            exercise: "Bench Press".to_string(),
            value: "185 lbs".to_string(),
            recorded_on: ymd(2023, 7, 22),
        },
        PersonalRecord {
            exercise: "Squats".to_string(),
            value: "265 lbs".to_string(),
            recorded_on: ymd(2023, 7, 18),
        },
        PersonalRecord {
            exercise: "Deadlift".to_string(),
            value: "315 lbs".to_string(),
            recorded_on: ymd(2023, 7, 14),
        },
        PersonalRecord {
            exercise: "5K Run".to_string(),
            value: "22:45".to_string(),
            recorded_on: ymd(2023, 7, 10),
        },
        PersonalRecord {
            exercise: "Plank".to_string(),
            value: "3:15".to_string(),
            recorded_on: ymd(2023, 7, 5),
        },
    ]
}

pub fn default_preferences() -> Preferences {
    Preferences {
        notifications: true,
        dark_mode: false,
        units: UnitSystem::Imperial,
    }
}

pub fn account_settings() -> AccountSettings {
    AccountSettings {
        name: "Alex Johnson".to_string(),
        email: "alex.johnson@example.com".to_string(),
        bio: "Fitness enthusiast focused on strength training and running. \
              Working to improve every day."
            .to_string(),
    }
}

fn zip<'a>(labels: &[&'a str], values: &[f64]) -> Vec<(&'a str, f64)> {
    labels
        .iter()
        .zip(values.iter())
        .map(|(label, value)| (*label, *value))
        .collect()
}
