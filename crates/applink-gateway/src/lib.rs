//! HTTP front end of the Applink redirect service.
//!
//! `GET /` redirects to the fallback URL and `GET /{page}` redirects to an
//! App Store deep link carrying `page` as its campaign token. Every routed
//! request is appended to the request log after its response is built;
//! a failing log never fails the redirect.

pub mod admin;
pub mod app;
pub mod error;
pub mod handlers;
pub mod hook;
pub mod server;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use error::GatewayError;
pub use state::AppState;
