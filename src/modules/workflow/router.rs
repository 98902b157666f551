use axum::{
    Router,
    handler::Handler,
    middleware,
    routing::{get, post, put},
};

use crate::middleware::role::{require_content_role, require_reviewer};
use crate::modules::workflow::controller::{
    complete_item, list_items, save_page_workflow_item, stop_automation,
};
use crate::router::authenticated;
use crate::state::AppState;

pub fn init_workflow_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/workflow/stop-automation",
            authenticated(
                state,
                post(stop_automation.layer(middleware::from_fn_with_state(
                    state.clone(),
                    require_reviewer,
                ))),
            ),
        )
        .route("/workflow/complete-item", authenticated(state, post(complete_item)))
        .route(
            "/workflow/page-item",
            authenticated(
                state,
                put(save_page_workflow_item.layer(middleware::from_fn_with_state(
                    state.clone(),
                    require_content_role,
                ))),
            ),
        )
        .route("/workflow/{workflow_id}/items", authenticated(state, get(list_items)))
}
