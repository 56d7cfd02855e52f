pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::flows::handlers as flow_handlers;
use crate::interview::handlers as interview_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Interview — the only multi-turn flow; state travels in the body
        .route(
            "/api/v1/interview/turn",
            post(interview_handlers::handle_interview_turn),
        )
        // Single-shot study tools
        .route("/api/v1/quiz", post(flow_handlers::handle_generate_quiz))
        .route("/api/v1/debate", post(flow_handlers::handle_debate))
        .route(
            "/api/v1/reasoning",
            post(flow_handlers::handle_reasoning_challenge),
        )
        .route(
            "/api/v1/resources",
            post(flow_handlers::handle_curate_resources),
        )
        .with_state(state)
}
