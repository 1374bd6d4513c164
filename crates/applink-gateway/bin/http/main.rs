mod cli;

use std::sync::Arc;

use crate::cli::CLI;
use applink_core::{AppStoreResolver, RequestLog};
use applink_gateway::{server, telemetry, App, AppState};
use applink_storage::{InMemoryRequestLog, SqliteRequestLog};
use clap::Parser;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::try_parse()?;
    telemetry::init(config.log_format)?;

    let resolver = AppStoreResolver::new(config.redirect_rule())?;

    info!(
        listen_addr = %config.listen_addr,
        app_id = %resolver.rule().app_id,
        provider_id = ?resolver.rule().provider_id,
        fallback_url = %resolver.rule().fallback_url,
        trust_forwarded_for = config.trust_forwarded_for,
        "starting applink gateway"
    );

    let log: Arc<dyn RequestLog> = match &config.database {
        Some(path) => {
            info!(database = %path.display(), "logging requests to sqlite");
            Arc::new(SqliteRequestLog::connect(path).await?)
        }
        None => {
            warn!("no database configured, requests are logged in memory only");
            Arc::new(InMemoryRequestLog::new())
        }
    };

    let state = AppState::new(Arc::new(resolver), log)
        .with_trust_forwarded_for(config.trust_forwarded_for);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    server::serve(listener, App::router(state)).await?;

    Ok(())
}
