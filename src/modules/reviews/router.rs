use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::reviews::controller::{analyze, summary};
use crate::router::authenticated;
use crate::state::AppState;

pub fn init_reviews_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/reviews/analyze", authenticated(state, post(analyze)))
        .route("/reviews/{product_id}/summary", authenticated(state, get(summary)))
}
