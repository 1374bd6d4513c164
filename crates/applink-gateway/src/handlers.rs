use axum::extract::State;
use axum::http::Uri;
use axum::response::Redirect;
use percent_encoding::percent_decode_str;

use crate::state::AppState;

pub async fn root_handler(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&state.resolver().root())
}

/// Redirects `/{page}` to the campaign link for `page`.
///
/// The segment is taken from the raw URI and percent-decoded lossily, so
/// bytes that are not UTF-8 become replacement characters (dropped by the
/// sanitizer) instead of rejecting the request.
pub async fn page_handler(uri: Uri, State(state): State<AppState>) -> Redirect {
    let segment = uri.path().strip_prefix('/').unwrap_or(uri.path());
    let name = percent_decode_str(segment).decode_utf8_lossy();
    Redirect::temporary(&state.resolver().campaign(&name))
}
