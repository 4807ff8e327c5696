mod handlers;

use std::path::PathBuf;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::directory::ActivityDirectory;

pub fn create_router(directory: ActivityDirectory, static_dir: PathBuf) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/activities", get(handlers::list_activities))
        .route("/activities/{activity_name}/signup", post(handlers::signup))
        .route(
            "/activities/{activity_name}/unregister",
            delete(handlers::unregister),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(directory)
}
