use std::io::Write;

use applink_core::{RequestLog, RequestRecord};
use clap::Subcommand;

use crate::error::Result;

pub const DEFAULT_INSPECT_LIMIT: u32 = 10;

/// Out-of-band maintenance of the request log. None of these are reachable
/// over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum AdminCommand {
    /// Create the request table if it is missing.
    Init,
    /// Print the most recent requests, oldest first.
    Inspect {
        #[arg(long, default_value_t = DEFAULT_INSPECT_LIMIT)]
        limit: u32,
        /// Print one JSON object per line.
        #[arg(long)]
        json: bool,
    },
    /// Delete every logged request.
    Reset,
}

pub async fn run<W: Write>(log: &dyn RequestLog, command: &AdminCommand, out: &mut W) -> Result<()> {
    log.initialize().await?;

    match command {
        AdminCommand::Init => {
            writeln!(out, "request log ready")?;
        }
        AdminCommand::Inspect { limit, json } => {
            for record in log.recent(*limit).await? {
                if *json {
                    serde_json::to_writer(&mut *out, &record).map_err(std::io::Error::from)?;
                    writeln!(out)?;
                } else {
                    writeln!(out, "{}", format_line(&record))?;
                }
            }
        }
        AdminCommand::Reset => {
            let removed = log.purge().await?;
            writeln!(out, "deleted {removed} requests")?;
        }
    }

    Ok(())
}

fn format_line(record: &RequestRecord) -> String {
    format!(
        "{} {:30} {} {}",
        record.timestamp_text(),
        record.path,
        record.user_agent.as_deref().unwrap_or("-"),
        record.client_ip.as_deref().unwrap_or("-"),
    )
}
