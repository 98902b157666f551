use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::translations::controller::{languages, page_status, translate_page};
use crate::router::authenticated;
use crate::state::AppState;

pub fn init_translations_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/translations/languages", authenticated(state, get(languages)))
        .route("/translations/pages", authenticated(state, post(translate_page)))
        .route("/translations/pages/{page_id}", authenticated(state, get(page_status)))
}
