use axum::{
    Router,
    handler::Handler,
    middleware,
    routing::{get, post},
};

use crate::middleware::role::require_editor;
use crate::modules::compose::controller::{accept_suggestion, generate, list_concepts};
use crate::router::authenticated;
use crate::state::AppState;

pub fn init_compose_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/compose",
            authenticated(
                state,
                post(generate.layer(middleware::from_fn_with_state(state.clone(), require_editor))),
            ),
        )
        .route("/compose/concepts", authenticated(state, get(list_concepts)))
        .route(
            "/compose/suggestions/{id}/accept",
            authenticated(state, post(accept_suggestion)),
        )
}
