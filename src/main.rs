use athletica::cli::{self, Args};
use athletica::config::AppConfig;
use athletica::logging;
use clap::Parser;

fn main() -> athletica::Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref())?;
    let guard = logging::init(&config.logging)?;
    tracing::debug!(
        log_file = %guard.log_file_path().display(),
        "logging initialized"
    );
    cli::run(args, config)
}
