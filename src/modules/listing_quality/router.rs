use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::listing_quality::controller::{report, score};
use crate::router::authenticated;
use crate::state::AppState;

pub fn init_listing_quality_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/listing-quality/score", authenticated(state, post(score)))
        .route(
            "/listing-quality/report/{product_id}",
            authenticated(state, get(report)),
        )
}
