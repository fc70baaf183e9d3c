use tracing::info;

use crate::app;
use crate::cli::args::{DashboardArgs, OutputFormat, WorkoutsArgs};
use crate::config::AppConfig;
use crate::data;
use crate::model::{apply, ListParams, WorkoutRecord};
use crate::Result;

/// Open the interactive dashboard, applying CLI overrides on top of
/// the loaded config.
pub fn dashboard(args: DashboardArgs, mut config: AppConfig) -> Result<()> {
    if let Some(page) = args.page {
        config.ui.start_page = page;
    }
    if let Some(tick_rate) = args.tick_rate {
        config.ui.tick_rate = tick_rate;
    }
    // CLI overrides go through the same bounds checks as the file.
    config.validate()?;

    info!(page = config.ui.start_page.title(), "starting dashboard");
    app::run(&config)
}

/// Run the list pipeline over the catalog and print the result.
pub fn workouts(args: WorkoutsArgs) -> Result<()> {
    let source = data::sample_workouts();
    let params = ListParams {
        query: args.query,
        status: args.status,
        sort: args.sort,
    };
    let rows = apply(&source, &params);
    info!(
        query = %params.query,
        status = %params.status,
        sort = %params.sort,
        matched = rows.len(),
        "workouts listed"
    );

    match args.format {
        OutputFormat::Text => print_table(&rows, &params, source.len()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }
    Ok(())
}

fn print_table(rows: &[WorkoutRecord], params: &ListParams, total: usize) {
    if rows.is_empty() {
        println!("No workouts found. Try a different search or filter.");
        return;
    }

    println!(
        "{:<22} {:<10} {:>9} {:>10} {:>10}",
        "TITLE", "CATEGORY", "DURATION", "EXERCISES", "STATUS"
    );
    for workout in rows {
        println!(
            "{:<22} {:<10} {:>9} {:>10} {:>10}",
            workout.title,
            workout.category,
            workout.duration,
            workout.exercises.len(),
            workout.status_label()
        );
    }
    println!(
        "\n{} of {} workouts (status: {}, sort: {})",
        rows.len(),
        total,
        params.status,
        params.sort
    );
}
