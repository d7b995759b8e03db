use axum::Router;
use axum::routing::{get, post};

use crate::interface_adapters::handlers::{
    create_movie, healthcheck, method_not_allowed, not_found, show_movie,
};
use crate::interface_adapters::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/v1/healthcheck", get(healthcheck))
        .route("/v1/movies", post(create_movie))
        .route("/v1/movies/{id}", get(show_movie))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .with_state(state)
}
