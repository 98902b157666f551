use axum::{Router, routing::get};

use crate::modules::session::controller::reset_session;
use crate::router::method_not_supported;
use crate::state::AppState;

pub fn init_session_router() -> Router<AppState> {
    Router::new().route(
        "/resetsession",
        get(reset_session)
            .post(reset_session)
            .fallback(method_not_supported),
    )
}
