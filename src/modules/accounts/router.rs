use axum::{Router, handler::Handler, middleware, routing::get};

use crate::middleware::role::require_admin;
use crate::modules::accounts::controller::{
    get_account, get_organization, invite_member, list_members, update_account,
};
use crate::router::authenticated;
use crate::state::AppState;

pub fn init_accounts_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/account",
            authenticated(
                state,
                get(get_account).patch(
                    update_account
                        .layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                ),
            ),
        )
        .route("/organization", authenticated(state, get(get_organization)))
        .route(
            "/organization/members",
            authenticated(
                state,
                get(list_members
                    .layer(middleware::from_fn_with_state(state.clone(), require_admin)))
                .post(invite_member),
            ),
        )
}
