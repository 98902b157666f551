use axum::{Router, routing::get};

use crate::modules::catalog::controller::{get_product, list_products};
use crate::router::authenticated;
use crate::state::AppState;

pub fn init_catalog_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/products", authenticated(state, get(list_products)))
        .route("/products/{id}", authenticated(state, get(get_product)))
}
