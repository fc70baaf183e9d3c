//! Domain types for the dashboard: workout records with their list
//! transformation pipeline, metric cards, progress series, the activity
//! feed, and athlete profile fixtures.

pub mod activity;
pub mod metrics;
pub mod profile;
pub mod progress;
pub mod workout;

pub use workout::{apply, Exercise, ListParams, SortKey, StatusFilter, WorkoutRecord};

use thiserror::Error;

/// Error produced when a user-supplied option name does not match any
/// known value. Raised from `FromStr` impls used by the CLI and config.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unknown status filter `{0}` (expected all, completed, or upcoming)")]
    StatusFilter(String),
    #[error("unknown sort key `{0}` (expected recent, duration, or type)")]
    SortKey(String),
    #[error("unknown page `{0}` (expected dashboard, workouts, progress, or profile)")]
    Page(String),
    #[error("unknown unit system `{0}` (expected imperial or metric)")]
    UnitSystem(String),
}
