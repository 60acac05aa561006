pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::suggestion::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/suggestions", post(handlers::handle_suggest))
        .route(
            "/api/v1/suggestions/:user_id",
            get(handlers::handle_get_record),
        )
        .with_state(state)
}
