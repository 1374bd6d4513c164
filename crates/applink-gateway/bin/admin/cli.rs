use applink_gateway::admin::AdminCommand;
use clap::Parser;
use std::path::PathBuf;

pub const DATABASE_ENV: &str = "APPLINK_DATABASE";

#[derive(Debug, Parser)]
#[command(name = "applink-admin", about = "Maintain the applink request log")]
pub struct CLI {
    /// SQLite file holding the request log.
    #[arg(long, env = DATABASE_ENV)]
    pub database: PathBuf,

    #[command(subcommand)]
    pub command: AdminCommand,
}
