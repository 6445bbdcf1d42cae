use anyhow::Context;
use std::fs::File;
use std::io::{self, BufReader};
use tracing_subscriber::fmt;

use user_registration::modules::users::service::UserRegistrationService;
use user_registration::shell::cli;
use user_registration::shell::config::ShellConfig;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ShellConfig::from_env();

    // stdout carries responses only
    fmt()
        .with_env_filter(config.env_filter()?)
        .with_writer(io::stderr)
        .init();

    let service = UserRegistrationService::new();
    let stdout = io::stdout();

    let summary = match &config.input {
        Some(path) => {
            tracing::info!(path = %path.display(), "reading requests from file");
            let file = File::open(path)
                .with_context(|| format!("failed to open request file {}", path.display()))?;
            cli::run(&service, BufReader::new(file), stdout.lock())?
        }
        None => {
            tracing::info!("reading requests from stdin");
            cli::run(&service, io::stdin().lock(), stdout.lock())?
        }
    };

    tracing::info!(
        processed = summary.processed,
        registered = summary.registered,
        rejected = summary.rejected,
        malformed = summary.malformed,
        "input exhausted"
    );
    Ok(())
}
