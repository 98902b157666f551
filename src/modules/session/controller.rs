use axum::{Json, extract::State};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde_json::{Value, json};
use tracing::{info, instrument};

use crate::state::AppState;

/// Clears the session cookie.
///
/// Answers with an expired, empty cookie under the configured name whether
/// or not the request carried one.
#[utoipa::path(
    get,
    path = "/api/resetsession",
    responses(
        (status = 200, description = "Session cookie cleared", body = serde_json::Value)
    ),
    tag = "Session"
)]
#[instrument(skip_all)]
pub async fn reset_session(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Value>) {
    let mut cookie = Cookie::build((state.session_config.cookie_name.clone(), ""))
        .path("/")
        .http_only(true)
        .build();
    cookie.make_removal();

    info!(cookie = %state.session_config.cookie_name, "Session cookie cleared");

    (jar.add(cookie), Json(json!({ "success": true })))
}
