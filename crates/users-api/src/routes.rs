use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{health, users};
use crate::state::AppState;

fn collection_routes() -> MethodRouter<AppState> {
    get(users::list_users).post(users::create_user)
}

fn member_routes() -> MethodRouter<AppState> {
    get(users::get_user)
        .put(users::replace_user)
        .delete(users::delete_user)
}

pub fn build_router(state: AppState) -> Router {
    // Trailing slashes resolve to the same handlers
    Router::new()
        .route("/health", get(health::health_check))
        .route("/users", collection_routes())
        .route("/users/", collection_routes())
        .route("/users/{id}", member_routes())
        .route("/users/{id}/", member_routes())
        .with_state(state)
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Tracing
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
