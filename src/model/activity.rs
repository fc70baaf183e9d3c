//! Entries in the recent activity feed.

use chrono::{DateTime, Local};

/// What kind of event an activity entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Workout,
    Achievement,
    Goal,
    Record,
}

/// One row in the recent activity feed.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub occurred_at: DateTime<Local>,
}

impl ActivityEntry {
    pub fn new(
        kind: ActivityKind,
        title: impl Into<String>,
        description: impl Into<String>,
        occurred_at: DateTime<Local>,
    ) -> Self {
        ActivityEntry {
            kind,
            title: title.into(),
            description: description.into(),
            occurred_at,
        }
    }

    /// Human timestamp relative to `now`: `"Today, 9:30 AM"`,
    /// `"Yesterday, 6:15 PM"`, then `"N days ago"`.
    pub fn relative_label(&self, now: DateTime<Local>) -> String {
        let days = (now.date_naive() - self.occurred_at.date_naive()).num_days();
        let clock = self.occurred_at.format("%-I:%M %p");
        match days {
            d if d <= 0 => format!("Today, {clock}"),
            1 => format!("Yesterday, {clock}"),
            d => format!("{d} days ago"),
        }
    }
}
