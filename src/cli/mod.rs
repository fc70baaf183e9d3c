pub mod args;
pub mod commands;

pub use args::{DashboardArgs, OutputFormat, WorkoutsArgs};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n";

#[derive(Parser)]
#[command(name = "athletica")]
#[command(version = crate::VERSION)]
#[command(about = "Terminal fitness dashboard")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Running with no command opens the interactive dashboard; `workouts` prints the filtered list and exits."
)]
pub struct Args {
    /// Path to the config file (default: ~/.athletica/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Open the interactive dashboard",
        long_about = "Dashboard starts the full-screen UI with the metric tiles, workout list, progress charts, and profile pages.",
        after_help = "Example:\n    athletica dashboard --page workouts"
    )]
    Dashboard(DashboardArgs),
    #[command(
        about = "List workouts without opening the UI",
        long_about = "Workouts runs the same search, filter, and sort the dashboard uses and prints the result, so the list can be piped or scripted.",
        after_help = "Examples:\n    athletica workouts --query cardio\n    athletica workouts --status completed --sort duration --format json"
    )]
    Workouts(WorkoutsArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Dashboard(DashboardArgs::default())
    }
}

pub fn run(args: Args, config: AppConfig) -> crate::Result<()> {
    match args.command.unwrap_or_default() {
        Command::Dashboard(dashboard_args) => commands::dashboard(dashboard_args, config),
        Command::Workouts(workouts_args) => commands::workouts(workouts_args),
    }
}
