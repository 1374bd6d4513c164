use applink_core::rule::DEFAULT_FALLBACK_URL;
use applink_core::RedirectRule;
use applink_gateway::telemetry::LogFormat;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "APPLINK_LISTEN_ADDR";
pub const APP_ID_ENV: &str = "APPLINK_APP_ID";
pub const PROVIDER_ID_ENV: &str = "APPLINK_PROVIDER_ID";
pub const FALLBACK_URL_ENV: &str = "APPLINK_FALLBACK_URL";
pub const DATABASE_ENV: &str = "APPLINK_DATABASE";
pub const TRUST_FORWARDED_FOR_ENV: &str = "APPLINK_TRUST_FORWARDED_FOR";
pub const LOG_FORMAT_ENV: &str = "APPLINK_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "applink-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Numeric App Store id of the app campaigns point to.
    #[arg(long, env = APP_ID_ENV)]
    pub app_id: String,

    /// Advertising provider token, sent as `pt`.
    #[arg(long, env = PROVIDER_ID_ENV)]
    pub provider_id: Option<String>,

    #[arg(long, env = FALLBACK_URL_ENV, default_value = DEFAULT_FALLBACK_URL)]
    pub fallback_url: String,

    /// SQLite file for the request log. Requests are kept in memory when
    /// unset.
    #[arg(long, env = DATABASE_ENV)]
    pub database: Option<PathBuf>,

    #[arg(long, env = TRUST_FORWARDED_FOR_ENV)]
    pub trust_forwarded_for: bool,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,
}

impl CLI {
    pub fn redirect_rule(&self) -> RedirectRule {
        RedirectRule {
            app_id: self.app_id.clone(),
            provider_id: self.provider_id.clone().filter(|id| !id.is_empty()),
            fallback_url: self.fallback_url.clone(),
        }
    }
}
