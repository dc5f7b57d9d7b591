// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{self, category, question, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Nests the category, question and quiz routes under `/api/v1`.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (store handle and config).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let category_routes = Router::new()
        .route("/", get(category::list_categories))
        .route("/{id}", get(category::get_category))
        .route("/{id}/questions", get(category::list_category_questions));

    let question_routes = Router::new()
        .route(
            "/",
            get(question::list_questions).post(question::create_question),
        )
        .route("/search", post(question::search))
        .route("/{id}", delete(question::delete_question));

    let api = Router::new()
        .nest("/categories", category_routes)
        .nest("/questions", question_routes)
        .route("/quizzes", post(quiz::next_question));

    Router::new()
        .nest("/api/v1", api)
        .fallback(handlers::not_found)
        // Global Middleware (applied top to bottom)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
