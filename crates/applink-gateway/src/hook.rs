use std::net::SocketAddr;

use applink_core::RequestRecord;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::header::USER_AGENT;
use axum::http::HeaderName;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::state::AppState;

static X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

/// Post-response hook that appends the request to the request log.
///
/// The record is stamped before the handler runs and written once the
/// response exists. Write failures are logged and the response is returned
/// unchanged.
pub async fn record_request(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let record = RequestRecord::now(
        request.uri().path(),
        header_text(&request, &USER_AGENT),
        client_ip(&request, state.trust_forwarded_for()),
    );

    let response = next.run(request).await;

    let path = record.path.clone();
    if let Err(err) = state.log().record(record).await {
        warn!(path = %path, error = %err, "failed to record request");
    }

    response
}

fn header_text(request: &Request, name: &HeaderName) -> Option<String> {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Resolves the client IP from the forwarded header (when trusted) or the
/// peer address of the connection.
fn client_ip(request: &Request, trust_forwarded_for: bool) -> Option<String> {
    if trust_forwarded_for {
        let forwarded = header_text(request, &X_FORWARDED_FOR).and_then(|value| {
            value
                .split(',')
                .next()
                .map(str::trim)
                .filter(|first| !first.is_empty())
                .map(str::to_owned)
        });
        if forwarded.is_some() {
            return forwarded;
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}
