use crate::handlers::{health, quiz, topics};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/quiz/questions", get(quiz::get_questions))
        .route("/quiz/bands", get(quiz::get_bands))
        .route("/quiz/score", post(quiz::score_json))
        .route("/quiz/score/form", post(quiz::score_form))
        .route("/topics", get(topics::list_topics))
        .route("/topics/{id}", get(topics::get_topic));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
