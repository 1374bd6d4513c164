mod cli;

use crate::cli::CLI;
use applink_gateway::admin;
use applink_gateway::telemetry::{self, LogFormat};
use applink_storage::SqliteRequestLog;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_with_writer(LogFormat::Text, std::io::stderr)?;

    let config = CLI::try_parse()?;
    let log = SqliteRequestLog::connect(&config.database).await?;

    let mut stdout = std::io::stdout().lock();
    admin::run(&log, &config.command, &mut stdout).await?;

    Ok(())
}
