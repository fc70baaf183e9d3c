//! Workout records and the list transformation pipeline.
//!
//! The pipeline is the one piece of real logic behind the workout list:
//! a text search, a completion filter, and a sort applied in that order
//! over an immutable source catalog. Every view of the list is derived
//! by [`apply`]; nothing ever mutates the catalog itself.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::model::ParseError;

/// A single exercise line inside a workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
}

/// One workout in the catalog.
///
/// `duration` is kept as display text (`"45 min"`) because that is what
/// the cards show; [`WorkoutRecord::leading_minutes`] recovers the
/// numeric value for sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutRecord {
    pub title: String,
    #[serde(rename = "type")]
    pub category: String,
    pub duration: String,
    pub exercises: Vec<Exercise>,
    pub completed: bool,
}

impl WorkoutRecord {
    /// Parses the leading integer of the duration text.
    ///
    /// `"45 min"` yields `Some(45)`; text with no leading digits yields
    /// `None` and sorts after every well-formed duration.
    pub fn leading_minutes(&self) -> Option<u32> {
        let digits_end = self
            .duration
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.duration.len());
        self.duration[..digits_end].parse().ok()
    }

    /// Badge text shown on workout cards.
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Scheduled"
        }
    }
}

/// Completion filter applied by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Upcoming,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Completed,
        StatusFilter::Upcoming,
    ];

    /// Label shown in the filter selector.
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All Workouts",
            StatusFilter::Completed => "Completed",
            StatusFilter::Upcoming => "Upcoming",
        }
    }

    /// Next filter in presentation order, wrapping at the end.
    pub fn cycled(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Completed,
            StatusFilter::Completed => StatusFilter::Upcoming,
            StatusFilter::Upcoming => StatusFilter::All,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusFilter::All => "all",
            StatusFilter::Completed => "completed",
            StatusFilter::Upcoming => "upcoming",
        };
        write!(f, "{name}")
    }
}

impl FromStr for StatusFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "completed" => Ok(StatusFilter::Completed),
            "upcoming" => Ok(StatusFilter::Upcoming),
            other => Err(ParseError::StatusFilter(other.to_string())),
        }
    }
}

/// Sort order applied by the pipeline after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Catalog order, most recently scheduled first. No reordering.
    #[default]
    Recent,
    /// Longest duration first. Ties keep their filtered order.
    Duration,
    /// Category name ascending, case-insensitive. Ties keep their
    /// filtered order.
    Type,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Recent, SortKey::Duration, SortKey::Type];

    /// Label shown in the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Recent => "Recent",
            SortKey::Duration => "Duration",
            SortKey::Type => "Type",
        }
    }

    /// Next sort key in presentation order, wrapping at the end.
    pub fn cycled(self) -> Self {
        match self {
            SortKey::Recent => SortKey::Duration,
            SortKey::Duration => SortKey::Type,
            SortKey::Type => SortKey::Recent,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Recent => "recent",
            SortKey::Duration => "duration",
            SortKey::Type => "type",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recent" => Ok(SortKey::Recent),
            "duration" => Ok(SortKey::Duration),
            "type" => Ok(SortKey::Type),
            other => Err(ParseError::SortKey(other.to_string())),
        }
    }
}

/// Inputs to the list transformation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListParams {
    /// Raw search text. Matching is case-insensitive; the empty string
    /// matches everything.
    pub query: String,
    pub status: StatusFilter,
    pub sort: SortKey,
}

/// Runs the three pipeline stages over `source` and returns the rows to
/// display. Search narrows first, then the completion filter, then the
/// sort. The source slice is never mutated and the same inputs always
/// produce the same output.
pub fn apply(source: &[WorkoutRecord], params: &ListParams) -> Vec<WorkoutRecord> {
    let mut rows: Vec<WorkoutRecord> = source.to_vec();

    if !params.query.is_empty() {
        let needle = params.query.to_lowercase();
        rows.retain(|workout| {
            workout.title.to_lowercase().contains(&needle)
                || workout.category.to_lowercase().contains(&needle)
        });
    }

    match params.status {
        StatusFilter::All => {}
        StatusFilter::Completed => rows.retain(|workout| workout.completed),
        StatusFilter::Upcoming => rows.retain(|workout| !workout.completed),
    }

    // Vec::sort_by is stable, so equal keys keep their filtered order.
    match params.sort {
        SortKey::Recent => {}
        SortKey::Duration => rows.sort_by(|a, b| sort_minutes(b).cmp(&sort_minutes(a))),
        SortKey::Type => {
            rows.sort_by(|a, b| a.category.to_lowercase().cmp(&b.category.to_lowercase()))
        }
    }

    rows
}

/// Duration sort key. Unparseable durations collapse to zero minutes,
/// which places them after every well-formed duration under the
/// descending sort.
fn sort_minutes(workout: &WorkoutRecord) -> u32 {
    workout.leading_minutes().unwrap_or(0)
}
