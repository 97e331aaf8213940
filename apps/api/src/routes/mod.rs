pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Interview API
        .route("/api/v1/interviews", post(handlers::handle_save_job))
        .route(
            "/api/v1/interviews/:id",
            get(handlers::handle_get_interview),
        )
        .route(
            "/api/v1/interviews/:id/questions",
            post(handlers::handle_generate_questions),
        )
        .with_state(state)
}
