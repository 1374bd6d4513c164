//! Core types and traits for the Applink redirect service.
//!
//! This crate holds everything that does not touch the network or a
//! database: campaign token sanitization, the redirect rule and resolver,
//! and the request log contract implemented by `applink-storage`.

pub mod campaign;
pub mod error;
pub mod log;
pub mod record;
pub mod resolver;
pub mod rule;

pub use campaign::CampaignToken;
pub use error::{ConfigError, StorageError};
pub use log::RequestLog;
pub use record::RequestRecord;
pub use resolver::{AppStoreResolver, Resolver};
pub use rule::RedirectRule;
