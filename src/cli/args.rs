use clap::Args;
use std::time::Duration;

use crate::app::state::Page;
use crate::model::{SortKey, StatusFilter};

#[derive(Args, Clone, Debug, Default)]
pub struct DashboardArgs {
    /// Page to open first: dashboard, workouts, progress, or profile
    #[arg(long, value_name = "PAGE")]
    pub page: Option<Page>,

    /// Frame poll interval, e.g. 120ms (overrides the config file)
    #[arg(long, value_name = "DURATION", value_parser = humantime::parse_duration)]
    pub tick_rate: Option<Duration>,
}

#[derive(Args, Clone, Debug)]
pub struct WorkoutsArgs {
    /// Case-insensitive text matched against titles and categories
    #[arg(long, short = 'q', default_value = "", value_name = "TEXT")]
    pub query: String,

    /// Completion filter: all, completed, or upcoming
    #[arg(long, default_value = "all", value_name = "FILTER")]
    pub status: StatusFilter,

    /// Sort order: recent, duration, or type
    #[arg(long, default_value = "recent", value_name = "KEY")]
    pub sort: SortKey,

    /// Emit either terminal-friendly text or machine-readable JSON
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,
}

#[derive(Clone, clap::ValueEnum, Debug, PartialEq)]
pub enum OutputFormat {
    /// Human-readable, column-aligned table
    Text,
    /// JSON payload suitable for downstream tooling
    Json,
}
